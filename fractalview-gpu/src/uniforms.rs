//! The uniform block shared by every GPU frame.

use bytemuck::{Pod, Zeroable};
use fractalview_core::ViewportState;

pub const FLAG_GRID: u32 = 1 << 0;
pub const FLAG_NOISE: u32 = 1 << 1;

/// Per-frame uniforms: viewport resolution, pan offset, zoom scale,
/// fractal selector, a monotonic time value and the overlay flag bits.
/// Layout must match the `Uniforms` struct in `shader.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub resolution: [f32; 2],
    pub offset: [f32; 2],
    pub scale: f32,
    pub fractal: u32,
    pub time_ms: f32,
    pub flags: u32,
}

impl ViewUniforms {
    pub fn new(state: &ViewportState, time_ms: f64) -> Self {
        let mut flags = 0;
        if state.params.grid {
            flags |= FLAG_GRID;
        }
        if state.params.noise {
            flags |= FLAG_NOISE;
        }

        Self {
            resolution: [state.size.0 as f32, state.size.1 as f32],
            offset: [state.offset.0 as f32, state.offset.1 as f32],
            scale: state.scale as f32,
            fractal: state.params.fractal.as_index() as u32,
            time_ms: time_ms as f32,
            flags,
        }
    }
}
