//! # client
//!
//! Leptos + WASM frontend for the collaborative pixel canvas.
//!
//! This crate contains the application shell, UI components, session state,
//! the synchronization protocol state machine, and the client-side rate
//! limiter. It builds on the `canvas` crate for grid/viewport/render logic
//! and the `wire` crate for the message model. Browser glue (WebSocket,
//! HTTP bootstrap, localStorage) is gated behind the `web` cargo feature so
//! the protocol and state logic test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod rate_limit;
pub mod state;
pub mod util;
