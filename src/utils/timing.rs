use std::time::Instant;

use chrono::Utc;
use tracing::info;

/// Logs start/end records for an upstream inference call on the dedicated
/// timing target, passing the call result through untouched.
pub async fn log_upstream_timing<T, E, F, Fut>(
    model: &str,
    operation: &str,
    call: F,
) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
{
    let started_at = Utc::now();
    let started_perf = Instant::now();
    info!(
        target: "server.timing",
        "event=upstream_request model={} operation={} started_at={}",
        model,
        operation,
        started_at.to_rfc3339()
    );

    let result = call().await;
    let status = if result.is_ok() { "success" } else { "error" };

    let completed_at = Utc::now();
    let duration = started_perf.elapsed().as_secs_f64();
    info!(
        target: "server.timing",
        "event=upstream_response model={} operation={} completed_at={} duration_s={:.3} status={}",
        model,
        operation,
        completed_at.to_rfc3339(),
        duration,
        status
    );

    result
}
