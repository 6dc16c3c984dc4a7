//! Pure transforms between device-pixel coordinates and plane coordinates.

use crate::viewport::ViewportState;

/// Plane units covered by one device pixel at scale 1. One hundred pixels
/// span one plane unit; this constant fixes the default zoom level's
/// visible extent and must not change.
pub const PLANE_UNITS_PER_PIXEL: f64 = 0.01;

/// Map a device pixel to the point of the plane it samples.
pub fn pixel_to_plane(px: f64, py: f64, state: &ViewportState) -> (f64, f64) {
    let (zero_x, zero_y) = plane_origin(state);
    (
        (px - zero_x) * state.scale * PLANE_UNITS_PER_PIXEL,
        (py - zero_y) * state.scale * PLANE_UNITS_PER_PIXEL,
    )
}

/// Inverse of [`pixel_to_plane`]: the device pixel at which a plane point
/// appears.
pub fn plane_to_pixel(x: f64, y: f64, state: &ViewportState) -> (f64, f64) {
    let (zero_x, zero_y) = plane_origin(state);
    (
        x / (state.scale * PLANE_UNITS_PER_PIXEL) + zero_x,
        y / (state.scale * PLANE_UNITS_PER_PIXEL) + zero_y,
    )
}

/// Device-pixel position of the plane origin: viewport center shifted by
/// the pan offset (offset is stored pre-scale).
fn plane_origin(state: &ViewportState) -> (f64, f64) {
    (
        state.size.0 as f64 / 2.0 + state.offset.0 / state.scale,
        state.size.1 as f64 / 2.0 + state.offset.1 / state.scale,
    )
}
