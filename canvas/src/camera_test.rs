#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::POINTER_INSET_PX;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A mid-zoom viewport with non-trivial offsets, used by several tests.
fn mid_zoom_viewport() -> Viewport {
    let mut vp = Viewport::new(500.0);
    vp.zoom(5.0, Point::new(250.0, 250.0));
    vp
}

/// Grid-space coordinate currently under a screen-space x (or y) value.
fn grid_coord_under(offset: f64, anchor: f64, pixel_size: f64) -> f64 {
    (offset + anchor) / pixel_size
}

// --- Construction ---

#[test]
fn new_viewport_is_fully_zoomed_out() {
    let vp = Viewport::new(500.0);
    assert_eq!(vp.pixel_size(), 5.0);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);
    assert_eq!(vp.inset_px(), POINTER_INSET_PX);
}

#[test]
fn zoom_bounds_derive_from_canvas_size() {
    let vp = Viewport::new(400.0);
    assert_eq!(vp.min_pixel_size(), 4.0);
    assert_eq!(vp.max_pixel_size(), 40.0);
}

#[test]
fn max_offset_is_zero_when_fully_zoomed_out() {
    let vp = Viewport::new(500.0);
    assert_eq!(vp.max_offset(), 0.0);
}

// --- Pan ---

#[test]
fn pan_moves_against_the_drag_direction() {
    let mut vp = mid_zoom_viewport();
    let before = vp.offset_x();
    vp.pan(-30.0, 0.0);
    assert!(approx_eq(vp.offset_x(), before + 30.0));
}

#[test]
fn pan_clamps_at_the_origin() {
    let mut vp = mid_zoom_viewport();
    vp.pan(1e6, 1e6);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);
}

#[test]
fn pan_clamps_at_the_far_edge() {
    let mut vp = mid_zoom_viewport();
    vp.pan(-1e6, -1e6);
    assert!(approx_eq(vp.offset_x(), vp.max_offset()));
    assert!(approx_eq(vp.offset_y(), vp.max_offset()));
}

#[test]
fn pan_is_a_no_op_when_fully_zoomed_out() {
    let mut vp = Viewport::new(500.0);
    vp.pan(-40.0, 25.0);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);
}

// --- Zoom ---

#[test]
fn zoom_clamps_pixel_size_to_its_bounds() {
    let mut vp = Viewport::new(500.0);
    vp.zoom(1e9, Point::new(0.0, 0.0));
    assert_eq!(vp.pixel_size(), vp.max_pixel_size());
    vp.zoom(1e-9, Point::new(0.0, 0.0));
    assert_eq!(vp.pixel_size(), vp.min_pixel_size());
}

#[test]
fn zoom_round_trip_restores_pixel_size_off_clamp() {
    let mut vp = mid_zoom_viewport();
    let before = vp.pixel_size();
    vp.zoom(1.25, Point::new(120.0, 80.0));
    vp.zoom(1.0 / 1.25, Point::new(120.0, 80.0));
    assert!(approx_eq(vp.pixel_size(), before));
}

#[test]
fn zoom_keeps_the_anchored_grid_point_fixed() {
    let mut vp = mid_zoom_viewport();
    let anchor = Point::new(200.0, 150.0);
    let gx = grid_coord_under(vp.offset_x(), anchor.x, vp.pixel_size());
    let gy = grid_coord_under(vp.offset_y(), anchor.y, vp.pixel_size());

    vp.zoom(1.1, anchor);

    assert!(approx_eq(grid_coord_under(vp.offset_x(), anchor.x, vp.pixel_size()), gx));
    assert!(approx_eq(grid_coord_under(vp.offset_y(), anchor.y, vp.pixel_size()), gy));
}

#[test]
fn offsets_stay_in_bounds_under_arbitrary_gestures() {
    let mut vp = Viewport::new(500.0);
    let gestures: [(f64, f64, f64); 8] = [
        (2.0, 250.0, 250.0),
        (-80.0, 40.0, 0.0),
        (1.5, 10.0, 490.0),
        (300.0, -300.0, 0.0),
        (0.4, 250.0, 0.0),
        (-1e4, 1e4, 0.0),
        (3.0, 499.0, 1.0),
        (0.9, 0.0, 0.0),
    ];
    for (i, (zoom_or_pan, a, b)) in gestures.into_iter().enumerate() {
        if i % 2 == 0 {
            vp.zoom(zoom_or_pan, Point::new(a, b));
        } else {
            vp.pan(zoom_or_pan, a);
        }
        let max = vp.max_offset();
        assert!((0.0..=max).contains(&vp.offset_x()), "offset_x out of bounds at step {i}");
        assert!((0.0..=max).contains(&vp.offset_y()), "offset_y out of bounds at step {i}");
    }
}

// --- Cell mapping ---

#[test]
fn screen_to_cell_maps_the_top_left_cell() {
    let vp = Viewport::new(500.0);
    let at = Point::new(POINTER_INSET_PX + 2.5, POINTER_INSET_PX + 2.5);
    assert_eq!(vp.screen_to_cell(at), Some(0));
}

#[test]
fn screen_to_cell_maps_an_interior_cell() {
    let vp = Viewport::new(500.0);
    // Column 1, row 2 at 5 px per cell.
    let at = Point::new(POINTER_INSET_PX + 7.5, POINTER_INSET_PX + 12.5);
    assert_eq!(vp.screen_to_cell(at), Some(201));
}

#[test]
fn screen_to_cell_rejects_points_left_of_the_grid() {
    let vp = Viewport::new(500.0);
    assert_eq!(vp.screen_to_cell(Point::new(0.0, 50.0)), None);
}

#[test]
fn screen_to_cell_rejects_points_past_the_far_edge() {
    let vp = Viewport::new(500.0);
    let at = Point::new(POINTER_INSET_PX + 500.1, POINTER_INSET_PX + 10.0);
    assert_eq!(vp.screen_to_cell(at), None);
}

#[test]
fn screen_to_cell_accounts_for_offsets() {
    let mut vp = Viewport::new(500.0);
    vp.zoom(5.0, Point::new(0.0, 0.0));
    vp.pan(-vp.pixel_size() * 3.0, -vp.pixel_size() * 2.0);
    // The cell at the drawing origin is now (row 2, col 3).
    let at = Point::new(POINTER_INSET_PX + 1.0, POINTER_INSET_PX + 1.0);
    assert_eq!(vp.screen_to_cell(at), Some(203));
}

#[test]
fn cell_rect_and_screen_to_cell_are_mutual_inverses() {
    let mut vp = mid_zoom_viewport();
    vp.pan(-137.0, -59.0);
    for index in [0usize, 99, 4_646, 5_050, 6_060, 9_999] {
        let rect = vp.cell_rect(index);
        let center = Point::new(
            rect.x + rect.size / 2.0 + vp.inset_px(),
            rect.y + rect.size / 2.0 + vp.inset_px(),
        );
        // Only cells whose center is on-canvas can round-trip through a
        // pointer position.
        if (0.0..vp.canvas_size()).contains(&(center.x - vp.inset_px()))
            && (0.0..vp.canvas_size()).contains(&(center.y - vp.inset_px()))
        {
            assert_eq!(vp.screen_to_cell(center), Some(index), "cell {index}");
        }
    }
}

#[test]
fn cell_rect_tiles_the_canvas_when_fully_zoomed_out() {
    let vp = Viewport::new(500.0);
    let first = vp.cell_rect(0);
    assert_eq!((first.x, first.y, first.size), (0.0, 0.0, 5.0));
    let last = vp.cell_rect(9_999);
    assert_eq!((last.x, last.y), (495.0, 495.0));
}

// --- Canvas sizing ---

#[test]
fn fit_canvas_size_subtracts_the_margin() {
    assert_eq!(fit_canvas_size(400.0), 350.0);
}

#[test]
fn fit_canvas_size_caps_at_the_maximum() {
    assert_eq!(fit_canvas_size(2_000.0), 500.0);
}

#[test]
fn fit_canvas_size_never_collapses() {
    assert_eq!(fit_canvas_size(40.0), 100.0);
}
