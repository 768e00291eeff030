//! HTTP helpers for the alternative snapshot bootstrap.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with a displayable message instead of panics so
//! a failed bootstrap degrades to waiting for the `initial` push.

/// Fetch the raw 10,000-digit grid snapshot from the pixels endpoint.
///
/// # Errors
///
/// Returns a displayable message when the request fails or the response
/// body cannot be read; status codes outside 2xx are reported as such.
pub async fn fetch_grid_snapshot(url: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("snapshot request failed: {}", resp.status()));
    }
    resp.text().await.map_err(|e| e.to_string())
}
