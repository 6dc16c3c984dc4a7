//! Hardware-accelerated fractal rendering using wgpu.
//!
//! One render pipeline, one static full-screen quad, one uniform block.
//! Every frame writes the current view transform into the uniforms and
//! issues a single draw call; all fractal evaluation happens in the
//! fragment stage.

mod device;
mod error;
mod pipeline;
mod renderer;
mod uniforms;

pub use device::{GpuAvailability, GpuContext};
pub use error::GpuError;
pub use pipeline::FractalPipeline;
pub use renderer::SurfaceRenderer;
pub use uniforms::{ViewUniforms, FLAG_GRID, FLAG_NOISE};
