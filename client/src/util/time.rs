//! Wall-clock access for gesture timing and rate limiting.

/// Current wall-clock time in milliseconds via the JS `Date.now()` API.
/// Zero outside the browser; callers only compare differences.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "web")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "web"))]
    {
        0.0
    }
}
