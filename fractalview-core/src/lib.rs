pub mod gestures;
pub mod mapper;
pub mod params;
pub mod schedule;
pub mod viewport;

pub use gestures::{
    wheel_factor, GestureSession, PINCH_ZOOM_IN, PINCH_ZOOM_OUT, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
pub use mapper::{pixel_to_plane, plane_to_pixel, PLANE_UNITS_PER_PIXEL};
pub use params::{Device, Fractal, Parameters, RenderMode};
pub use schedule::FramePhase;
pub use viewport::ViewportState;
