use std::time::Duration;

/// Shared outbound client. Every upstream call (Sheets lookup, LINE reply)
/// is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .pool_max_idle_per_host(16)
        .build()
}
