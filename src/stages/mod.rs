use std::future::Future;

use tracing::warn;

pub mod items;
pub mod outfits;
pub mod profile;

/// Runs a fallible stage body and substitutes the stage's deterministic
/// fallback on any failure. Stages never surface errors to their callers;
/// they degrade to canned data and log why.
pub async fn or_fallback<T, F>(stage: &str, attempt: F, fallback: impl FnOnce() -> T) -> T
where
    F: Future<Output = anyhow::Result<T>>,
{
    match attempt.await {
        Ok(value) => value,
        Err(err) => {
            warn!("{} generation failed, using fallback: {:#}", stage, err);
            fallback()
        }
    }
}

#[cfg(test)]
pub(crate) fn offline_config() -> crate::config::Config {
    crate::config::Config {
        bind_address: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        cloudflare_api_token: String::new(),
        cloudflare_account_id: String::new(),
        cloudflare_api_base_url: "https://api.cloudflare.com/client/v4".to_string(),
        cloudflare_model: "@cf/meta/llama-2-7b-chat-int8".to_string(),
        image_dir: "./img".to_string(),
        public_image_dir: "public/images".to_string(),
        upstream_timeout_seconds: 60,
        access_token_expire_minutes: 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn successful_attempts_pass_through() {
        let value = or_fallback("test", async { Ok(7) }, || 0).await;
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn failures_yield_the_fallback() {
        let value = or_fallback("test", async { Err(anyhow!("boom")) }, || 42).await;
        assert_eq!(value, 42);
    }
}
