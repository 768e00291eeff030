//! Synchronization protocol state machine.
//!
//! Handlers here are pure over `(&mut Session, &mut impl UpdateSink)`:
//! the transport layer feeds them decoded [`ServerMessage`]s and lifecycle
//! events in arrival order, and tests feed them directly with a fake sink.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in this module can fail loudly. Inbound anomalies (bad
//! snapshot, impossible cell) are logged and dropped so a hostile or
//! buggy server cannot crash the session, and a rejected local attempt
//! leaves the grid and viewport exactly as they were.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use canvas::grid::Grid;
use wire::{ClientMessage, ServerMessage};

use crate::state::session::{ConnectionStatus, Session};

/// Outbound half of the synchronization channel.
///
/// Sends are fire-and-forget: no acknowledgment, no retry. The browser
/// implementation queues onto the WebSocket; tests inject a recorder.
pub trait UpdateSink {
    /// Queue a message for delivery. Returns `false` if the channel is
    /// gone; the message is then lost, by design.
    fn send(&mut self, msg: &ClientMessage) -> bool;
}

/// The channel finished its handshake.
pub fn on_open(session: &mut Session) {
    if !session.status.is_terminal() {
        session.status = ConnectionStatus::Open;
    }
}

/// The channel closed.
pub fn on_close(session: &mut Session) {
    if !session.status.is_terminal() {
        session.status = ConnectionStatus::Closed;
    }
}

/// The channel failed.
pub fn on_error(session: &mut Session) {
    if !session.status.is_terminal() {
        session.status = ConnectionStatus::Errored;
    }
}

/// Apply one inbound message, in arrival order.
pub fn on_message(session: &mut Session, msg: ServerMessage) {
    if session.status.is_terminal() {
        return;
    }
    match msg {
        ServerMessage::Initial { data, client_count } => {
            load_snapshot(session, &data);
            session.client_count = client_count;
        }
        ServerMessage::Update { index, color, client_count } => {
            match session.grid.set(index, color) {
                Ok(next) => {
                    session.grid = next;
                    session.bump_scene_rev();
                }
                Err(err) => log::warn!("ignoring impossible cell update: {err}"),
            }
            session.client_count = client_count;
        }
        // Informational only. If the dropped attempt was ours, the
        // optimistic change stays: this cell may diverge from the server
        // until a future broadcast touches it.
        ServerMessage::RateLimited => {}
        ServerMessage::ClientLimitExceeded => {
            session.status = ConnectionStatus::Blocked;
            session.canvas_revealed = false;
        }
    }
}

/// Replace the grid wholesale from a 10,000-digit snapshot and reveal the
/// canvas. Shared by the `initial` push message and the HTTP bootstrap.
pub fn load_snapshot(session: &mut Session, data: &str) {
    match Grid::from_digits(data) {
        Ok(grid) => {
            session.grid = grid;
            session.canvas_revealed = true;
            session.bump_scene_rev();
        }
        Err(err) => log::warn!("ignoring malformed grid snapshot: {err}"),
    }
}

/// Attempt a locally-initiated cell update.
///
/// A no-op when the cell already holds `color`, when the rate limiter
/// rejects the attempt, or when the channel is not open — all silent.
/// An accepted attempt mutates the grid optimistically before any network
/// round trip, bumps the persisted counter, and sends exactly one
/// `RequestUpdate`. Returns whether the update was applied.
pub fn request_update(
    session: &mut Session,
    sink: &mut impl UpdateSink,
    index: usize,
    color: u8,
    now_ms: f64,
) -> bool {
    let Ok(current) = session.grid.get(index) else {
        return false;
    };
    if current == color {
        return false;
    }
    // The limiter records before the open-check, so an attempt dropped on
    // a closed channel still consumes a window slot.
    if !session.limiter.check_and_record(now_ms) {
        return false;
    }
    if session.status != ConnectionStatus::Open {
        return false;
    }
    let Ok(next) = session.grid.set(index, color) else {
        return false;
    };
    session.grid = next;
    session.updates_sent += 1;
    session.bump_scene_rev();
    sink.send(&ClientMessage::RequestUpdate { index, color });
    true
}
