//! GPU error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("No GPU adapter found")]
    NoAdapter,

    #[error("Failed to create device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    #[error("Failed to create surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    #[error("Shader or pipeline rejected by the driver: {0}")]
    ShaderValidation(String),

    #[error("Surface frame unavailable: {0}")]
    SurfaceLost(#[from] wgpu::SurfaceError),

    #[error("GPU unavailable: {0}")]
    Unavailable(String),
}
