//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! All mutable client state lives in one explicit [`session::Session`]
//! object held in a Leptos signal; protocol handlers and UI components
//! receive it rather than reaching for globals.

pub mod session;
