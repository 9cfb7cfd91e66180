use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::utils::http::get_http_client;
use crate::utils::timing::log_upstream_timing;

/// Failure taxonomy for the Workers AI boundary. Every variant degrades to
/// a stage fallback; none of them reach an HTTP caller.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Cloudflare credentials are not configured")]
    MissingCredentials,
    #[error("upstream request failed with status {status}: {detail}")]
    Http { status: StatusCode, detail: String },
    #[error("upstream reported failure: {0}")]
    Unsuccessful(String),
    #[error("upstream response envelope is missing the result text")]
    MalformedEnvelope,
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if let Some(message) = value
            .pointer("/errors/0/message")
            .or_else(|| value.pointer("/error/message"))
            .and_then(|v| v.as_str())
        {
            return message.to_string();
        }
        return truncate_for_log(&value.to_string(), 2000);
    }

    truncate_for_log(trimmed, 2000)
}

/// Serializes uploaded images into the data-URL message parts the upstream
/// model expects as user content.
pub fn image_message_content(images: &[Vec<u8>]) -> String {
    let parts: Vec<Value> = images
        .iter()
        .map(|image_data| {
            let encoded = general_purpose::STANDARD.encode(image_data);
            json!({
                "type": "image_url",
                "image_url": {
                    "url": format!("data:image/jpeg;base64,{encoded}")
                }
            })
        })
        .collect();
    Value::Array(parts).to_string()
}

fn extract_response_text(envelope: &Value) -> Result<String, UpstreamError> {
    if envelope.get("success").and_then(Value::as_bool) == Some(false) {
        let detail = envelope
            .get("errors")
            .map(|errors| truncate_for_log(&errors.to_string(), 500))
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(UpstreamError::Unsuccessful(detail));
    }

    envelope
        .pointer("/result/response")
        .and_then(Value::as_str)
        .map(|text| text.to_string())
        .ok_or(UpstreamError::MalformedEnvelope)
}

/// Sends one chat request to Workers AI and returns the model's response
/// text. One attempt only; any failure is mapped into `UpstreamError` and
/// left to the calling stage's fallback policy.
pub async fn call_workers_ai(
    config: &Config,
    system_prompt: &str,
    user_content: &str,
    operation: &str,
) -> Result<String, UpstreamError> {
    let (api_token, account_id) = config
        .cloudflare_credentials()
        .ok_or(UpstreamError::MissingCredentials)?;

    let url = format!(
        "{}/accounts/{}/ai/run/{}",
        config.cloudflare_api_base_url.trim_end_matches('/'),
        account_id,
        config.cloudflare_model
    );
    let payload = json!({
        "messages": [
            { "role": "system", "content": system_prompt },
            { "role": "user", "content": user_content }
        ]
    });
    let timeout = Duration::from_secs(config.upstream_timeout_seconds);

    log_upstream_timing(&config.cloudflare_model, operation, || async {
        debug!(
            "Workers AI request: operation={}, user_content_len={}",
            operation,
            user_content.chars().count()
        );

        let response = get_http_client()
            .post(&url)
            .header("Authorization", format!("Bearer {api_token}"))
            .timeout(timeout)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = summarize_error_body(&body);
            warn!("Workers AI error: status={}, detail={}", status, detail);
            return Err(UpstreamError::Http { status, detail });
        }

        let envelope = response.json::<Value>().await?;
        extract_response_text(&envelope)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_is_pulled_from_the_envelope() {
        let envelope = json!({
            "success": true,
            "result": { "response": "{\"items\": []}" }
        });
        assert_eq!(
            extract_response_text(&envelope).unwrap(),
            "{\"items\": []}"
        );
    }

    #[test]
    fn reported_failure_is_rejected() {
        let envelope = json!({
            "success": false,
            "errors": [{ "code": 7000, "message": "No route" }]
        });
        let err = extract_response_text(&envelope).unwrap_err();
        assert!(matches!(err, UpstreamError::Unsuccessful(_)));
    }

    #[test]
    fn missing_result_text_is_a_malformed_envelope() {
        for envelope in [json!({}), json!({ "success": true, "result": {} })] {
            let err = extract_response_text(&envelope).unwrap_err();
            assert!(matches!(err, UpstreamError::MalformedEnvelope));
        }
    }

    #[test]
    fn image_content_is_a_json_array_of_data_urls() {
        let content = image_message_content(&[vec![1, 2, 3]]);
        let parsed: Value = serde_json::from_str(&content).unwrap();
        let url = parsed
            .pointer("/0/image_url/url")
            .and_then(Value::as_str)
            .unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(parsed.pointer("/0/type").unwrap(), "image_url");
    }

    #[test]
    fn error_body_summaries_prefer_the_upstream_message() {
        let summary =
            summarize_error_body("{\"errors\": [{\"code\": 10000, \"message\": \"bad token\"}]}");
        assert_eq!(summary, "bad token");
        assert_eq!(summarize_error_body("  "), "empty response body");
    }
}
