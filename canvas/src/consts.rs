//! Shared numeric constants for the canvas crate.

// ── Grid geometry ───────────────────────────────────────────────

/// Cells per side of the square grid.
pub const GRID_SIZE: usize = 100;

/// Total cell count (`GRID_SIZE` squared).
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Number of distinct color indices a cell can hold.
pub const COLOR_COUNT: u8 = 10;

// ── Canvas sizing ───────────────────────────────────────────────

/// Horizontal margin subtracted from the available width when sizing the
/// square canvas.
pub const CANVAS_FIT_MARGIN_PX: f64 = 50.0;

/// Upper bound on the square canvas size in CSS pixels.
pub const CANVAS_MAX_SIZE_PX: f64 = 500.0;

/// Inset between the canvas element's outer edge and its drawing origin
/// (border plus padding), subtracted from pointer coordinates before
/// cell lookup.
pub const POINTER_INSET_PX: f64 = 4.0;

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel in screen pixels beyond which a press becomes a pan.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Maximum touch duration in milliseconds still counted as a tap.
pub const TAP_MAX_MS: f64 = 100.0;

/// Per-wheel-notch zoom-in factor.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Per-wheel-notch zoom-out factor.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Zoom-in factor for the on-screen zoom button.
pub const BUTTON_ZOOM_IN: f64 = 1.2;

/// Zoom-out factor for the on-screen zoom button.
pub const BUTTON_ZOOM_OUT: f64 = 0.8;
