//! Fixed ten-entry palette mapping color indices to CSS colors.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::consts::COLOR_COUNT;

/// CSS hex color for each color index, in index order.
pub const PALETTE: [&str; COLOR_COUNT as usize] = [
    "#FFFFFF", // white
    "#74B63E", // green
    "#FFCE33", // yellow
    "#CC421D", // red
    "#FF8533", // orange
    "#87308C", // purple
    "#1D70A2", // blue
    "#079D9D", // teal
    "#F05689", // pink
    "#000000", // black
];

/// CSS color for a color index. Out-of-range indices fall back to black
/// rather than panicking; valid grids never hit the fallback.
#[must_use]
pub fn css_color(color: u8) -> &'static str {
    PALETTE.get(usize::from(color)).copied().unwrap_or("#000000")
}
