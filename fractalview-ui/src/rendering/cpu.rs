//! Software rendering: an off-screen RGBA buffer filled by the compute
//! crate, blitted to a 2-D canvas once per frame.

use crate::rendering::backend::RenderBackend;
use fractalview_compute::{fill, reset, FillRequest};
use fractalview_core::ViewportState;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

pub struct CpuBackend {
    ctx: CanvasRenderingContext2d,
    pixels: Vec<u8>,
    size: (u32, u32),
    frame: u32,
}

impl CpuBackend {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            pixels: Vec::new(),
            size: (0, 0),
            frame: 0,
        })
    }

    fn blit(&self) -> Result<(), JsValue> {
        let image_data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&self.pixels),
            self.size.0,
            self.size.1,
        )?;
        self.ctx.put_image_data(&image_data, 0.0, 0.0)
    }
}

impl RenderBackend for CpuBackend {
    fn render_step(&mut self, state: &ViewportState, time_ms: f64) -> bool {
        if !state.is_renderable() {
            return false;
        }
        // Stale buffer: dimensions moved under us and the resize hasn't
        // landed yet. Skip the whole frame rather than blit a mismatch.
        if state.size != self.size
            || self.pixels.len() != (self.size.0 * self.size.1 * 4) as usize
        {
            return false;
        }

        fill(FillRequest {
            pixels: &mut self.pixels,
            fractal: state.params.fractal,
            mode: state.params.render_mode,
            width: self.size.0,
            height: self.size.1,
            grid: state.params.grid,
            noise: state.params.noise,
            scale: state.scale,
            offset: state.offset,
            time_ms,
            frame: self.frame,
        });
        self.frame = self.frame.wrapping_add(1);

        match self.blit() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("CPU blit failed: {e:?}");
                false
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        // Fresh allocation, never resized in place.
        self.pixels = vec![0; (width * height * 4) as usize];
        reset(&mut self.pixels);
        self.frame = 0;
    }
}
