//! Input model: the gesture state machine for pointer and touch streams.
//!
//! Raw browser events carry no intent; the same pointer-down can begin a
//! pan or a cell paint depending on what follows. [`GestureTracker`]
//! consumes position/timing facts and emits [`GestureAction`]s for the
//! host to apply to the viewport and the session. It holds no reference to
//! either, so the full gesture grammar tests natively.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::{DRAG_THRESHOLD_PX, TAP_MAX_MS, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};

/// An intent extracted from the raw event stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Scroll the viewport by the given screen-pixel deltas.
    Pan {
        /// Horizontal pointer travel since the last event.
        delta_x: f64,
        /// Vertical pointer travel since the last event.
        delta_y: f64,
    },
    /// Scale the viewport around an anchor point.
    Zoom {
        /// Multiplicative zoom step.
        factor: f64,
        /// Screen position that should stay visually fixed.
        anchor: Point,
    },
    /// Paint the cell under the given screen position.
    Paint(Point),
}

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    /// No gesture; waiting for the next press.
    #[default]
    Idle,
    /// A press that has not yet traveled past the drag threshold; release
    /// here is a click.
    Pressed {
        /// Position of the initial press, the reference for the threshold.
        start: Point,
    },
    /// A press that became a pan; every move emits a delta.
    Panning {
        /// Position at the previous event, the reference for the delta.
        last: Point,
    },
    /// Two-finger pinch; every move emits a zoom factor.
    Pinching {
        /// Finger distance at the previous event.
        last_distance: f64,
    },
}

/// State machine turning pointer/touch event streams into gestures.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
    /// Start of the current touch, used for the tap-duration check. Stays
    /// set after the touch ends so the mouse events browsers synthesize
    /// from a tap never paint a second time.
    touch_started_ms: Option<f64>,
    /// Most recent single-touch position; a tap paints here.
    last_touch: Option<Point>,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The gesture currently in progress.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    // --- Mouse / pointer events ---

    pub fn on_pointer_down(&mut self, at: Point) {
        self.phase = GesturePhase::Pressed { start: at };
    }

    /// Classify a pointer move: past the drag threshold a press becomes a
    /// pan, and every further move emits a pan delta.
    pub fn on_pointer_move(&mut self, at: Point) -> Option<GestureAction> {
        match self.phase {
            GesturePhase::Pressed { start }
                if (at.x - start.x).abs() > DRAG_THRESHOLD_PX
                    || (at.y - start.y).abs() > DRAG_THRESHOLD_PX =>
            {
                self.phase = GesturePhase::Panning { last: at };
                Some(GestureAction::Pan { delta_x: at.x - start.x, delta_y: at.y - start.y })
            }
            GesturePhase::Panning { last } => {
                self.phase = GesturePhase::Panning { last: at };
                Some(GestureAction::Pan { delta_x: at.x - last.x, delta_y: at.y - last.y })
            }
            _ => None,
        }
    }

    /// A release after an un-dragged press is a click, which paints.
    pub fn on_pointer_up(&mut self, at: Point) -> Option<GestureAction> {
        let was_click = matches!(self.phase, GesturePhase::Pressed { .. });
        self.phase = GesturePhase::Idle;
        if was_click && self.touch_started_ms.is_none() {
            Some(GestureAction::Paint(at))
        } else {
            None
        }
    }

    /// The pointer left the canvas; abandon any gesture in progress.
    pub fn on_pointer_leave(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Wheel scroll zooms in place: one step in or out anchored at the
    /// cursor.
    #[must_use]
    pub fn on_wheel(&self, at: Point, delta_y: f64) -> GestureAction {
        let factor = if delta_y > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN };
        GestureAction::Zoom { factor, anchor: at }
    }

    // --- Touch events ---

    pub fn on_touch_start(&mut self, touches: &[Point], now_ms: f64) {
        self.touch_started_ms = Some(now_ms);
        match touches {
            [a, b, ..] => {
                self.phase = GesturePhase::Pinching { last_distance: distance(*a, *b) };
            }
            [only] => {
                self.phase = GesturePhase::Pressed { start: *only };
                self.last_touch = Some(*only);
            }
            [] => {}
        }
    }

    /// Single-finger moves pan without a threshold; two-finger moves pinch
    /// with the zoom factor given by the finger-distance ratio, anchored
    /// at the midpoint.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> Option<GestureAction> {
        match touches {
            [a, b, ..] => {
                let current = distance(*a, *b);
                let anchor = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
                let action = match self.phase {
                    GesturePhase::Pinching { last_distance } if last_distance > 0.0 => {
                        Some(GestureAction::Zoom { factor: current / last_distance, anchor })
                    }
                    _ => None,
                };
                self.phase = GesturePhase::Pinching { last_distance: current };
                action
            }
            [only] => {
                let action = match self.phase {
                    GesturePhase::Pressed { start: last } | GesturePhase::Panning { last } => {
                        Some(GestureAction::Pan {
                            delta_x: only.x - last.x,
                            delta_y: only.y - last.y,
                        })
                    }
                    _ => None,
                };
                if action.is_some() {
                    self.phase = GesturePhase::Panning { last: *only };
                    self.last_touch = Some(*only);
                }
                action
            }
            [] => None,
        }
    }

    /// When the last finger lifts, a short-enough touch is a tap and
    /// paints at the most recent touch position.
    pub fn on_touch_end(&mut self, remaining_touches: usize, now_ms: f64) -> Option<GestureAction> {
        self.phase = GesturePhase::Idle;
        if remaining_touches > 0 {
            return None;
        }
        let started = self.touch_started_ms?;
        if now_ms - started < TAP_MAX_MS {
            self.last_touch.map(GestureAction::Paint)
        } else {
            None
        }
    }
}

fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx.hypot(dy)
}
