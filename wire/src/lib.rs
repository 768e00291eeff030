//! Shared message model and JSON codec for the realtime canvas transport.
//!
//! This crate owns the wire representation spoken between the pixel server
//! and its clients. Data messages are UTF-8 JSON records tagged by a `type`
//! field; two server-side control conditions arrive as bare text sentinels
//! instead of JSON. Both forms are normalized here into [`ServerMessage`],
//! so dispatch code downstream matches an exhaustive enum and never
//! inspects raw protocol strings.

use serde::{Deserialize, Serialize};

/// Number of cells in a full grid snapshot (100 × 100, row-major).
pub const GRID_CELLS: usize = 10_000;

/// Number of distinct color indices; cells hold a digit in `0..COLOR_COUNT`.
pub const COLOR_COUNT: u8 = 10;

/// Bare-text server message sent when an update was dropped by throttling.
const RATE_LIMIT_SENTINEL: &str = "rate limit exceeded";

/// Bare-text server message sent when the server refuses another client.
const CLIENT_LIMIT_SENTINEL: &str = "client limit exceeded";

/// Error returned by [`decode_server_message`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text was neither a known sentinel nor a well-formed JSON record.
    #[error("failed to decode server message: {0}")]
    Decode(#[from] serde_json::Error),
    /// An `initial` snapshot did not contain exactly [`GRID_CELLS`] cells.
    #[error("invalid grid snapshot length: {0}")]
    BadSnapshotLength(usize),
    /// A cell index on the wire is outside `0..GRID_CELLS`.
    #[error("cell index out of range: {0}")]
    IndexOutOfRange(u64),
    /// A color field was not a single digit in `'0'..='9'`.
    #[error("invalid color value: {0:?}")]
    InvalidColor(String),
}

/// A message received from the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerMessage {
    /// Full-grid bootstrap snapshot plus the current viewer count.
    Initial {
        /// Exactly [`GRID_CELLS`] color digits, row-major.
        data: String,
        /// Number of currently connected clients.
        client_count: u32,
    },
    /// Single-cell broadcast plus the current viewer count.
    Update {
        /// Row-major cell index in `0..GRID_CELLS`.
        index: usize,
        /// Color index in `0..COLOR_COUNT`.
        color: u8,
        /// Number of currently connected clients.
        client_count: u32,
    },
    /// The server dropped an update from this client due to throttling.
    RateLimited,
    /// The server refused this client; the session is over.
    ClientLimitExceeded,
}

/// A message sent to the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientMessage {
    /// Request to set one cell to the given color.
    RequestUpdate {
        /// Row-major cell index in `0..GRID_CELLS`.
        index: usize,
        /// Color index in `0..COLOR_COUNT`.
        color: u8,
    },
}

/// Decode one inbound transport text into a [`ServerMessage`].
///
/// Sentinel texts are matched exactly; anything else must parse as a tagged
/// JSON record. Snapshot length, cell index, and color digit are validated
/// here so consumers can rely on every variant's invariants.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON or an unknown `type`
/// tag, and the corresponding validation variant for out-of-domain fields.
pub fn decode_server_message(text: &str) -> Result<ServerMessage, CodecError> {
    match text {
        RATE_LIMIT_SENTINEL => return Ok(ServerMessage::RateLimited),
        CLIENT_LIMIT_SENTINEL => return Ok(ServerMessage::ClientLimitExceeded),
        _ => {}
    }

    let wire: WireServerMessage = serde_json::from_str(text)?;
    match wire {
        WireServerMessage::Initial { data, client_count } => {
            if data.len() != GRID_CELLS {
                return Err(CodecError::BadSnapshotLength(data.len()));
            }
            if let Some(bad) = data.chars().find(|c| !c.is_ascii_digit()) {
                return Err(CodecError::InvalidColor(bad.to_string()));
            }
            Ok(ServerMessage::Initial { data, client_count })
        }
        WireServerMessage::Update { data, client_count } => {
            let index = validate_index(data.index)?;
            let color = validate_color(&data.color)?;
            Ok(ServerMessage::Update { index, color, client_count })
        }
    }
}

/// Encode one outbound [`ClientMessage`] as transport text.
///
/// # Panics
///
/// Never panics in practice; the wire struct contains no map keys or
/// non-string-serializable values, so `serde_json` cannot fail on it.
#[must_use]
pub fn encode_client_message(msg: &ClientMessage) -> String {
    let wire = match *msg {
        ClientMessage::RequestUpdate { index, color } => WireClientMessage::Update {
            data: WireCell {
                index: index as u64,
                color: color_digit(color).to_string(),
            },
        },
    };
    serde_json::to_string(&wire).unwrap_or_default()
}

fn validate_index(index: u64) -> Result<usize, CodecError> {
    if index < GRID_CELLS as u64 {
        Ok(index as usize)
    } else {
        Err(CodecError::IndexOutOfRange(index))
    }
}

fn validate_color(raw: &str) -> Result<u8, CodecError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Ok(c as u8 - b'0'),
        _ => Err(CodecError::InvalidColor(raw.to_owned())),
    }
}

fn color_digit(color: u8) -> char {
    char::from(b'0' + (color % COLOR_COUNT))
}

/// Inbound JSON records as they appear on the wire.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireServerMessage {
    Initial {
        data: String,
        #[serde(rename = "clientCount")]
        client_count: u32,
    },
    Update {
        data: WireCell,
        #[serde(rename = "clientCount")]
        client_count: u32,
    },
}

/// Outbound JSON records as they appear on the wire.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireClientMessage {
    Update { data: WireCell },
}

/// One cell address/color pair; the color travels as a single digit string.
#[derive(Serialize, Deserialize)]
struct WireCell {
    index: u64,
    color: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
