pub mod bindings;
pub mod fill;
pub mod fractals;
pub mod palette;

pub use fill::{fill, reset, FillRequest};
pub use fractals::{burning_ship, julia, mandelbrot, newton, MAX_ITERATIONS};
pub use palette::shade;

// Re-export core types for convenience
pub use fractalview_core::{Fractal, RenderMode};
