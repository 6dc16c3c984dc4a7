//! wasm-bindgen boundary. Selectors cross as plain integers and are
//! converted to the internal enums here; unknown values make the call a
//! no-op rather than an error.

use crate::fill::{fill, reset as reset_buffer, FillRequest};
use fractalview_core::{Fractal, RenderMode};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render(
    pixels: &mut [u8],
    fractal: u8,
    render_mode: u8,
    width: u32,
    height: u32,
    grid: bool,
    noise: bool,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    time_ms: f64,
    frame: u32,
) {
    let (Some(fractal), Some(mode)) = (
        Fractal::from_index(fractal),
        RenderMode::from_index(render_mode),
    ) else {
        return;
    };

    fill(FillRequest {
        pixels,
        fractal,
        mode,
        width,
        height,
        grid,
        noise,
        scale,
        offset: (offset_x, offset_y),
        time_ms,
        frame,
    });
}

#[wasm_bindgen]
pub fn reset(pixels: &mut [u8]) {
    reset_buffer(pixels);
}
