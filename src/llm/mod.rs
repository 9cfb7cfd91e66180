pub mod workers_ai;

pub use workers_ai::{call_workers_ai, image_message_content, UpstreamError};
