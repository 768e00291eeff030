//! Rendering: rasterizes a grid snapshot through the viewport.
//!
//! Every redraw is a full pass: clear, then one flat rectangle per cell.
//! At 10,000 fixed cells this is deliberately simple — there is no dirty
//! tracking, and cells scrolled off-canvas are still issued (the surface
//! clips them). Drawing goes through the [`Surface`] trait so the pass is
//! natively testable; [`Canvas2dSurface`] is the only code in the crate
//! that touches [`web_sys::CanvasRenderingContext2d`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use web_sys::CanvasRenderingContext2d;

use crate::camera::Viewport;
use crate::grid::Grid;
use crate::palette;

/// A drawing surface the renderer can paint on.
pub trait Surface {
    /// Erase the given area, in drawing coordinates from the origin.
    fn clear(&mut self, width: f64, height: f64);
    /// Fill an axis-aligned rectangle with a CSS color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
}

/// Draw the full grid: clear the canvas, then fill every cell's rectangle
/// with its palette color at the viewport's current zoom and offsets.
pub fn draw(surface: &mut impl Surface, grid: &Grid, viewport: &Viewport) {
    surface.clear(viewport.canvas_size(), viewport.canvas_size());
    for (index, color) in grid.cells() {
        let rect = viewport.cell_rect(index);
        surface.fill_rect(rect.x, rect.y, rect.size, rect.size, palette::css_color(color));
    }
}

/// [`Surface`] backed by a browser 2D canvas context.
pub struct Canvas2dSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> Canvas2dSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2dSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }
}
