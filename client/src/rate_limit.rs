//! Client-side rate limiting for outgoing cell updates.
//!
//! DESIGN
//! ======
//! The canonical policy is a sliding window over a `VecDeque` of accepted
//! timestamps: an attempt is rejected when the window already holds the
//! maximum, and expired entries are pruned lazily on each check. A simpler
//! fixed-cooldown policy is available as a configuration choice. The limiter
//! only curbs local over-submission; the server enforces its own limits
//! and reports them separately over the wire.
//!
//! Timestamps are caller-supplied `f64` milliseconds from the browser
//! clock — `std::time::Instant` is unavailable on wasm32, and the explicit
//! `now_ms` parameter doubles as the testing seam.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

use std::collections::VecDeque;

/// Default sliding-window capacity: accepted updates per window.
pub const DEFAULT_MAX_UPDATES: usize = 20;

/// Default sliding-window span in milliseconds.
pub const DEFAULT_WINDOW_MS: f64 = 5_000.0;

/// Default cooldown span for the fixed-cooldown policy, in milliseconds.
pub const DEFAULT_COOLDOWN_MS: f64 = 500.0;

/// Throttle policy for locally-initiated updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatePolicy {
    /// Admit at most `max_updates` accepted attempts within any trailing
    /// `window_ms` span. The canonical policy.
    SlidingWindow {
        max_updates: usize,
        window_ms: f64,
    },
    /// Reject any attempt less than `cooldown_ms` after the last accepted
    /// one. Simpler variant, kept as a configuration choice.
    FixedCooldown {
        cooldown_ms: f64,
    },
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self::SlidingWindow {
            max_updates: DEFAULT_MAX_UPDATES,
            window_ms: DEFAULT_WINDOW_MS,
        }
    }
}

/// Gate for locally-initiated updates, checked before an attempt is
/// applied optimistically or sent.
#[derive(Debug, Clone, Default)]
pub struct RateLimiter {
    policy: RatePolicy,
    /// Timestamps of accepted attempts still inside the window.
    accepted: VecDeque<f64>,
    /// Timestamp of the most recent accepted attempt.
    last_accepted_ms: Option<f64>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(policy: RatePolicy) -> Self {
        Self { policy, accepted: VecDeque::new(), last_accepted_ms: None }
    }

    /// Check whether an attempt at `now_ms` is admitted; if so, record it.
    ///
    /// Returns `false` when the attempt must be dropped. Rejected attempts
    /// are not recorded and do not extend any window.
    pub fn check_and_record(&mut self, now_ms: f64) -> bool {
        match self.policy {
            RatePolicy::SlidingWindow { max_updates, window_ms } => {
                prune_window(&mut self.accepted, now_ms, window_ms);
                if self.accepted.len() >= max_updates {
                    return false;
                }
                self.accepted.push_back(now_ms);
                true
            }
            RatePolicy::FixedCooldown { cooldown_ms } => {
                if let Some(last) = self.last_accepted_ms
                    && now_ms - last < cooldown_ms
                {
                    return false;
                }
                self.last_accepted_ms = Some(now_ms);
                true
            }
        }
    }
}

fn prune_window(accepted: &mut VecDeque<f64>, now_ms: f64, window_ms: f64) {
    while let Some(&front) = accepted.front() {
        if now_ms - front >= window_ms {
            accepted.pop_front();
        } else {
            break;
        }
    }
}
