//! Error types for SAPE.
//!
//! Registry lookups, GPU setup and readback, and engine configuration each
//! get their own enum. Nothing in the crate retries or substitutes defaults;
//! every failure is surfaced to the caller.

use std::fmt;

/// Errors raised by attractor registry lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No attractor is registered under this id.
    NotFound(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound(id) => write!(f, "Attractor \"{}\" not found in registry", id),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors that can occur while acquiring or talking to the GPU.
#[derive(Debug)]
pub enum GpuError {
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// Failed to map buffer for reading.
    BufferMapping(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::BufferMapping(msg) => write!(f, "Failed to map GPU buffer: {}", msg),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when configuring or driving a [`ComputeEngine`](crate::ComputeEngine).
#[derive(Debug)]
pub enum EngineError {
    /// Attractor lookup failed.
    Registry(RegistryError),
    /// Particle count must be at least one.
    InvalidParticleCount(u32),
    /// The texture cannot hold the requested number of particles.
    TextureTooSmall { texture_size: u32, particle_count: u32 },
    /// The texture exceeds the device's 2D texture limit.
    TextureTooLarge { texture_size: u32, max: u32 },
    /// An initial-condition generator produced NaN or infinity.
    NonFiniteInitialCondition { attractor: &'static str, index: u32 },
    /// A parameter override names a key the bound attractor does not have.
    UnknownParameter { attractor: &'static str, name: String },
    /// GPU failure.
    Gpu(GpuError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Registry(e) => write!(f, "{}", e),
            EngineError::InvalidParticleCount(n) => {
                write!(f, "Particle count must be positive, got {}", n)
            }
            EngineError::TextureTooSmall { texture_size, particle_count } => write!(
                f,
                "Texture of size {}x{} cannot hold {} particles",
                texture_size, texture_size, particle_count
            ),
            EngineError::TextureTooLarge { texture_size, max } => write!(
                f,
                "Texture size {} exceeds the device limit of {}",
                texture_size, max
            ),
            EngineError::NonFiniteInitialCondition { attractor, index } => write!(
                f,
                "Initial conditions for \"{}\" produced a non-finite position at particle {}",
                attractor, index
            ),
            EngineError::UnknownParameter { attractor, name } => {
                write!(f, "Attractor \"{}\" has no parameter \"{}\"", attractor, name)
            }
            EngineError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Registry(e) => Some(e),
            EngineError::Gpu(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegistryError> for EngineError {
    fn from(e: RegistryError) -> Self {
        EngineError::Registry(e)
    }
}

impl From<std::convert::Infallible> for EngineError {
    fn from(e: std::convert::Infallible) -> Self {
        match e {}
    }
}

impl From<GpuError> for EngineError {
    fn from(e: GpuError) -> Self {
        EngineError::Gpu(e)
    }
}
