//! Host-side layout of particle state.
//!
//! Particles live one per texel in a square RGBA32F texture. Texel `i`
//! (row-major, `i = y * size + x`) holds particle `i` as `(x, y, z, 1.0)`;
//! texels past the particle count are padding and hold all zeros.

use glam::Vec3;

use crate::attractor::AttractorDefinition;
use crate::error::EngineError;

/// Channels per texel (RGBA).
pub const CHANNELS: usize = 4;

/// Bytes per texel in an `Rgba32Float` texture.
pub const TEXEL_BYTES: u32 = (CHANNELS * std::mem::size_of::<f32>()) as u32;

/// Side length of the smallest square texture holding `particle_count`
/// texels: `ceil(sqrt(n))`.
///
/// The float estimate is corrected with integer arithmetic, so the result
/// is exact for every `u32`.
pub fn texture_size(particle_count: u32) -> u32 {
    let n = particle_count as u64;
    let mut size = (n as f64).sqrt().ceil() as u64;
    while size * size < n {
        size += 1;
    }
    while size > 0 && (size - 1) * (size - 1) >= n {
        size -= 1;
    }
    size as u32
}

/// Full texel contents of a position texture, padding included.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBuffer {
    data: Vec<[f32; 4]>,
    particle_count: u32,
    texture_size: u32,
}

impl ParticleBuffer {
    /// Wrap texel data read back from (or destined for) a texture.
    ///
    /// `data` must hold exactly `texture_size²` texels.
    pub(crate) fn from_texels(data: Vec<[f32; 4]>, particle_count: u32, texture_size: u32) -> Self {
        debug_assert_eq!(data.len(), (texture_size as usize).pow(2));
        Self {
            data,
            particle_count,
            texture_size,
        }
    }

    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    pub fn texture_size(&self) -> u32 {
        self.texture_size
    }

    /// Every texel, live particles first, then padding.
    pub fn texels(&self) -> &[[f32; 4]] {
        &self.data
    }

    /// Texels that hold particles.
    pub fn live(&self) -> &[[f32; 4]] {
        &self.data[..self.particle_count as usize]
    }

    /// Position of particle `index`, if it is live.
    pub fn position(&self, index: u32) -> Option<Vec3> {
        if index >= self.particle_count {
            return None;
        }
        let [x, y, z, _] = self.data[index as usize];
        Some(Vec3::new(x, y, z))
    }

    /// Positions of all live particles.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.live().iter().map(|&[x, y, z, _]| Vec3::new(x, y, z))
    }

    /// Raw bytes for upload, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Flat channel view, `4 * texture_size²` floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.data)
    }
}

/// Build the initial texel buffer for `definition`.
///
/// The generator is called exactly once per particle, in increasing index
/// order. Live texels get `w = 1.0`; padding stays zero.
pub fn create_position_data(
    definition: &AttractorDefinition,
    particle_count: u32,
    texture_size: u32,
) -> Result<ParticleBuffer, EngineError> {
    if particle_count == 0 {
        return Err(EngineError::InvalidParticleCount(particle_count));
    }
    let capacity = texture_size as u64 * texture_size as u64;
    if capacity < particle_count as u64 {
        return Err(EngineError::TextureTooSmall {
            texture_size,
            particle_count,
        });
    }

    let mut data = vec![[0.0f32; 4]; capacity as usize];
    for (index, texel) in (0..particle_count).zip(data.iter_mut()) {
        let p = definition.initial_position(index, particle_count);
        if !p.is_finite() {
            return Err(EngineError::NonFiniteInitialCondition {
                attractor: definition.id.as_str(),
                index,
            });
        }
        *texel = [p.x, p.y, p.z, 1.0];
    }

    Ok(ParticleBuffer::from_texels(data, particle_count, texture_size))
}
