//! # SAPE - Strange Attractor Particle Engine
//!
//! GPU-resident integration of chaotic dynamical systems.
//!
//! SAPE keeps every particle's position in a float texture on the GPU and
//! advances all of them one Euler step per frame with a single compute
//! dispatch. The host picks an attractor from a fixed catalog, tweaks its
//! parameters live, and optionally reads positions back for audio or
//! analysis.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sape::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gpu = GpuContext::headless()?;
//!     let mut engine = ComputeEngine::new(
//!         gpu.device.clone(),
//!         gpu.queue.clone(),
//!         EngineConfig::new()
//!             .with_particle_count(100_000)
//!             .with_attractor(AttractorId::Lorenz),
//!     )?;
//!
//!     for _ in 0..600 {
//!         engine.compute();
//!     }
//!
//!     engine.update_parameters(&[("rho", 24.0)])?;
//!     engine.switch_attractor("aizawa")?;
//!
//!     let positions = engine.read_positions()?;
//!     println!("{:?}", positions.position(0));
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Attractors
//!
//! Each model is an [`AttractorId`] with a static [`AttractorDefinition`]:
//! default parameters (always including `dt`), bounds, a seeding
//! distribution and a color scheme. Look them up through [`registry`].
//!
//! ### State Layout
//!
//! Particle `i` lives in texel `i` of a square `Rgba32Float` texture as
//! `(x, y, z, 1.0)`. Unused texels are zero. See [`layout`].
//!
//! ### Double Buffering
//!
//! Two textures alternate as source and destination. After each
//! [`ComputeEngine::compute`] the freshly written texture becomes current,
//! so renderers always sample a complete frame.
//!
//! ## Feature Overview
//!
//! | Concern | Items |
//! |---------|-------|
//! | Models | [`AttractorId`], [`registry`], [`euler_step`] |
//! | Layout | [`layout::texture_size`], [`layout::create_position_data`], [`ParticleBuffer`] |
//! | Engine | [`ComputeEngine`], [`EngineConfig`] |
//! | Readback | [`ComputeEngine::read_positions`], [`ReadbackThrottle`], [`sampling`] |
//! | GPU | [`GpuContext`], [`PositionTexture`], [`create_data_texture`] |
//!
//! ## Logging
//!
//! SAPE logs through the [`log`] facade and never installs a logger.

pub mod attractor;
mod engine;
pub mod error;
mod gpu;
pub mod layout;
pub mod registry;
pub mod sampling;
pub mod spawn;
pub mod time;

pub use attractor::{
    euler_step, AttractorDefinition, AttractorId, Bounds, ColorScheme, ParamRange, Params,
};
pub use bytemuck;
pub use engine::{ComputeEngine, EngineConfig};
pub use error::{EngineError, GpuError, RegistryError};
pub use glam::{Vec3, Vec4};
pub use gpu::{
    create_data_texture, GpuContext, PingPong, PositionTexture, INTEGRATE_SHADER, POSITION_FORMAT,
};
pub use layout::ParticleBuffer;
pub use sampling::{select_spread, ParticleSample};
pub use spawn::{InitialConditions, SpawnContext};
pub use time::{FrameClock, ReadbackThrottle};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use sape::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attractor::{AttractorDefinition, AttractorId, Bounds, ColorScheme, Params};
    pub use crate::engine::{ComputeEngine, EngineConfig};
    pub use crate::error::{EngineError, GpuError, RegistryError};
    pub use crate::gpu::{GpuContext, PositionTexture};
    pub use crate::layout::ParticleBuffer;
    pub use crate::registry;
    pub use crate::sampling::{select_spread, ParticleSample};
    pub use crate::time::{FrameClock, ReadbackThrottle};
    pub use crate::Vec3;
}
