//! Browser localStorage helpers for persisted user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize web-only read/write behavior so components can
//! persist the selected color and the update counter without repeating
//! web-sys glue. Failures are silent: preferences are conveniences, never
//! load-bearing state.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the selected color index.
const SELECTED_COLOR_KEY: &str = "selectedColor";

/// Storage key for the cumulative accepted-update counter.
const PIXEL_COUNT_KEY: &str = "pixelCount";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "web")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "web")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (key, value);
    }
}

/// The persisted selected color, if any and still a valid index.
#[must_use]
pub fn load_selected_color() -> Option<u8> {
    load_json::<u8>(SELECTED_COLOR_KEY).filter(|&c| c < canvas::consts::COLOR_COUNT)
}

/// Persist the selected color.
pub fn save_selected_color(color: u8) {
    save_json(SELECTED_COLOR_KEY, &color);
}

/// The persisted accepted-update counter; zero when absent.
#[must_use]
pub fn load_pixel_count() -> u64 {
    load_json::<u64>(PIXEL_COUNT_KEY).unwrap_or(0)
}

/// Persist the accepted-update counter.
pub fn save_pixel_count(count: u64) {
    save_json(PIXEL_COUNT_KEY, &count);
}
