use std::sync::Arc;

use crate::auth::SessionStore;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            sessions: SessionStore::new(),
        }
    }
}
