//! Session state for one connected canvas client.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model is the local projection of the shared canvas: the current
//! grid snapshot, the viewport, the user's color, and the connection
//! lifecycle. One value is created on page load and passed to every
//! handler — no module-level singletons for the socket handle, selected
//! color, or pixel buffer — so the protocol state machine is testable
//! without a real network channel.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use canvas::camera::Viewport;
use canvas::grid::Grid;

use crate::rate_limit::RateLimiter;

/// Default selected color index: black.
pub const DEFAULT_COLOR: u8 = 9;

/// Connection lifecycle state of the synchronization channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Channel handshake in progress; no data assumed yet.
    #[default]
    Connecting,
    /// Channel open; updates flow in both directions.
    Open,
    /// Channel closed. Terminal: reload to start a new session.
    Closed,
    /// Channel failed. Terminal: reload to start a new session.
    Errored,
    /// The server refused this client (capacity). Terminal, no retry.
    Blocked,
}

impl ConnectionStatus {
    /// Whether the session has ended; terminal states admit no further
    /// transitions or mutations.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Errored | Self::Blocked)
    }
}

/// All state for one client session.
#[derive(Clone, Debug)]
pub struct Session {
    /// Current grid snapshot.
    pub grid: Grid,
    /// Pan/zoom viewport over the grid.
    pub viewport: Viewport,
    /// Color index applied by the next paint; persisted across sessions.
    pub selected_color: u8,
    /// Connection lifecycle state.
    pub status: ConnectionStatus,
    /// Viewer count as last reported by the server.
    pub client_count: u32,
    /// Locally accepted updates, ever; persisted, display-only.
    pub updates_sent: u64,
    /// Throttle for locally-initiated updates.
    pub limiter: RateLimiter,
    /// True once the first snapshot arrived and the canvas is shown.
    pub canvas_revealed: bool,
    /// Bumped whenever drawable state changes; the canvas host watches
    /// this to schedule redraws.
    pub scene_rev: u64,
}

impl Session {
    /// Fresh session for a square canvas of `canvas_size` CSS pixels.
    #[must_use]
    pub fn new(canvas_size: f64) -> Self {
        Self {
            grid: Grid::default(),
            viewport: Viewport::new(canvas_size),
            selected_color: DEFAULT_COLOR,
            status: ConnectionStatus::Connecting,
            client_count: 0,
            updates_sent: 0,
            limiter: RateLimiter::default(),
            canvas_revealed: false,
            scene_rev: 0,
        }
    }

    /// Mark drawable state as changed.
    pub fn bump_scene_rev(&mut self) {
        self.scene_rev = self.scene_rev.wrapping_add(1);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(canvas::consts::CANVAS_MAX_SIZE_PX)
    }
}
