//! Networking: synchronization protocol and its browser transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sync` is the pure protocol state machine over the session; `socket`
//! manages the WebSocket lifecycle and `api` the HTTP bootstrap fetch,
//! both browser-only behind the `web` feature.

#[cfg(feature = "web")]
pub mod api;
#[cfg(feature = "web")]
pub mod socket;
pub mod sync;

/// How the session obtains its first full grid snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapMode {
    /// Wait for the server's `initial` push message.
    #[default]
    InitialMessage,
    /// Fetch the snapshot over HTTP instead of waiting for the push.
    HttpFetch,
}

/// Endpoints and bootstrap strategy for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// WebSocket endpoint for the realtime channel.
    pub websocket_url: String,
    /// HTTP endpoint returning the raw 10,000-digit grid snapshot.
    pub pixels_url: String,
    /// Snapshot bootstrap strategy.
    pub bootstrap: BootstrapMode,
    /// Site key for the human-verification widget; empty in local
    /// development, where the gate shows a plain connect button instead.
    pub captcha_sitekey: String,
}

impl Default for SyncConfig {
    /// Local development endpoints.
    fn default() -> Self {
        Self {
            websocket_url: "ws://localhost:8080/ws".to_owned(),
            pixels_url: "http://localhost:8080/pixels".to_owned(),
            bootstrap: BootstrapMode::InitialMessage,
            captcha_sitekey: String::new(),
        }
    }
}
