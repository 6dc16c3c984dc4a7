//! Hardware rendering: the wgpu surface renderer behind the backend
//! contract.

use crate::rendering::backend::RenderBackend;
use fractalview_core::ViewportState;
use fractalview_gpu::{GpuError, SurfaceRenderer, ViewUniforms};
use web_sys::HtmlCanvasElement;

pub struct GpuBackend {
    renderer: SurfaceRenderer,
}

impl GpuBackend {
    /// Acquire a device and build the pipeline against `canvas`. Any
    /// failure (no adapter, shader rejected) is terminal for the GPU
    /// path this session.
    pub async fn create(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<Self, GpuError> {
        let renderer = SurfaceRenderer::for_canvas(canvas, width, height).await?;
        Ok(Self { renderer })
    }
}

impl RenderBackend for GpuBackend {
    fn render_step(&mut self, state: &ViewportState, time_ms: f64) -> bool {
        if !state.is_renderable() {
            return false;
        }
        match self.renderer.render(&ViewUniforms::new(state, time_ms)) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("GPU frame skipped: {e}");
                false
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }
}
