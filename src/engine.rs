//! The double-buffered compute engine.
//!
//! Particle positions live in two RGBA32F textures. Each [`compute`] reads
//! the current texture, writes one Euler step into the other, and swaps.
//! Positions never leave the GPU unless [`read_positions`] is called.
//!
//! [`compute`]: ComputeEngine::compute
//! [`read_positions`]: ComputeEngine::read_positions

use std::sync::Arc;

use crate::attractor::{AttractorDefinition, AttractorId, Bounds, ColorScheme, Params};
use crate::error::{EngineError, GpuError};
use crate::gpu::{
    create_data_texture, IntegrationPipeline, IntegrationUniforms, PingPong, PositionTexture,
    Readback,
};
use crate::layout::{self, ParticleBuffer};

/// Construction parameters for a [`ComputeEngine`].
///
/// # Example
///
/// ```ignore
/// let config = EngineConfig::new()
///     .with_particle_count(100_000)
///     .with_attractor(AttractorId::Lorenz)
///     .with_time_scale(0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub particle_count: u32,
    pub attractor: AttractorId,
    pub time_scale: f32,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            particle_count: 65_536,
            attractor: AttractorId::Thomas,
            time_scale: 1.0,
        }
    }

    /// Set the number of simulated particles. Must be at least one.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the initial attractor.
    pub fn with_attractor(mut self, attractor: AttractorId) -> Self {
        self.attractor = attractor;
        self
    }

    /// Set the time-speed multiplier. Negative values clamp to 0.
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale.max(0.0);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// GPU-resident particle state for one attractor.
///
/// Every mutating operation takes `&mut self`; one engine is driven by one
/// frame loop. Independent engines share nothing.
pub struct ComputeEngine {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    attractor: AttractorId,
    /// Live copy of the attractor's parameters
    params: Params,
    particle_count: u32,
    texture_size: u32,
    time_scale: f32,
    frame: u64,
    pipeline: IntegrationPipeline,
    textures: PingPong<PositionTexture>,
    /// Indexed by `textures.read_is_b()`
    bind_groups: [wgpu::BindGroup; 2],
    readback: Readback,
}

impl ComputeEngine {
    /// Create an engine seeded with `config.attractor`'s initial conditions.
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let definition = config.attractor.definition();
        let (buffer, texture_size) = seed(&device, definition, config.particle_count)?;
        let params = definition.params();
        let time_scale = config.time_scale.max(0.0);

        let uniforms = IntegrationUniforms::new(
            definition.id,
            &params,
            config.particle_count,
            texture_size,
            time_scale,
        );
        let pipeline = IntegrationPipeline::new(&device, &uniforms);
        let textures = create_textures(&device, &queue, &buffer);
        let bind_groups = pipeline.create_bind_groups(&device, &textures);
        let readback = Readback::new(&device, texture_size);

        log::info!(
            "Engine ready: {} with {} particles on a {}x{} texture",
            definition.name,
            config.particle_count,
            texture_size,
            texture_size
        );

        Ok(Self {
            device,
            queue,
            attractor: definition.id,
            params,
            particle_count: config.particle_count,
            texture_size,
            time_scale,
            frame: 0,
            pipeline,
            textures,
            bind_groups,
            readback,
        })
    }

    /// Reseed both slots from `attractor`'s initial conditions.
    ///
    /// Accepts an [`AttractorId`] or a registry key. On error the engine is
    /// left exactly as it was.
    pub fn initialize<A>(&mut self, attractor: A, particle_count: u32) -> Result<(), EngineError>
    where
        A: TryInto<AttractorId>,
        EngineError: From<A::Error>,
    {
        let id: AttractorId = attractor.try_into()?;
        let definition = id.definition();
        let (buffer, texture_size) = seed(&self.device, definition, particle_count)?;

        if texture_size != self.texture_size {
            for texture in self.textures.both() {
                texture.destroy();
            }
            self.readback.destroy();

            self.textures = create_textures(&self.device, &self.queue, &buffer);
            self.bind_groups = self.pipeline.create_bind_groups(&self.device, &self.textures);
            self.readback = Readback::new(&self.device, texture_size);
            self.texture_size = texture_size;
        } else {
            for texture in self.textures.both() {
                texture.write(&self.queue, &buffer);
            }
        }
        self.textures.reset();

        self.attractor = id;
        self.params = definition.params();
        self.particle_count = particle_count;
        self.frame = 0;
        self.upload_uniforms();

        log::info!(
            "Engine initialized: {} with {} particles on a {}x{} texture",
            definition.name,
            particle_count,
            texture_size,
            texture_size
        );
        Ok(())
    }

    /// Advance every particle by one step and make the result current.
    pub fn compute(&mut self) {
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Attractor Compute Encoder"),
        });
        let bind_group = &self.bind_groups[self.textures.read_is_b() as usize];
        self.pipeline.dispatch(&mut encoder, bind_group, self.texture_size);
        self.queue.submit(std::iter::once(encoder.finish()));

        self.textures.swap();
        self.frame += 1;
    }

    /// Switch to another attractor, keeping the particle count. Always
    /// reseeds.
    pub fn switch_attractor<A>(&mut self, attractor: A) -> Result<(), EngineError>
    where
        A: TryInto<AttractorId>,
        EngineError: From<A::Error>,
    {
        self.initialize(attractor, self.particle_count)
    }

    /// Override live parameters without reseeding.
    ///
    /// Overrides accumulate across calls. If any name is unknown for the
    /// current attractor the whole batch is rejected.
    pub fn update_parameters(&mut self, overrides: &[(&str, f32)]) -> Result<(), EngineError> {
        if let Some((name, _)) = overrides.iter().find(|(name, _)| !self.params.contains(name)) {
            log::warn!("Rejected parameter \"{}\" for {}", name, self.attractor);
            return Err(EngineError::UnknownParameter {
                attractor: self.attractor.as_str(),
                name: name.to_string(),
            });
        }

        for (name, value) in overrides {
            self.params.set(name, *value);
        }
        self.upload_uniforms();

        log::debug!("Updated {} parameters: {:?}", self.attractor, overrides);
        Ok(())
    }

    /// Restore the attractor's canonical parameters.
    pub fn reset_parameters(&mut self) {
        self.params = self.definition().params();
        self.upload_uniforms();
    }

    /// Set the time-speed multiplier. Negative values clamp to 0, which
    /// freezes the particles.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale.max(0.0);
        self.upload_uniforms();
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Copy the current state to the CPU. Blocks until the GPU is done.
    ///
    /// The result reflects every `compute` issued so far and includes the
    /// padding texels.
    pub fn read_positions(&self) -> Result<ParticleBuffer, GpuError> {
        self.readback.read(
            &self.device,
            &self.queue,
            self.textures.current(),
            self.particle_count,
        )
    }

    pub fn attractor(&self) -> AttractorId {
        self.attractor
    }

    pub fn definition(&self) -> &'static AttractorDefinition {
        self.attractor.definition()
    }

    /// Live parameters, including any overrides.
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    pub fn texture_size(&self) -> u32 {
        self.texture_size
    }

    /// Steps computed since the last (re)initialization.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Texture holding the latest state, for rendering.
    pub fn current_texture(&self) -> &PositionTexture {
        self.textures.current()
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.definition().color_scheme
    }

    pub fn bounds(&self) -> Bounds {
        self.definition().bounds
    }

    /// Release all GPU resources held by the engine.
    pub fn dispose(self) {
        let (a, b) = self.textures.into_inner();
        a.destroy();
        b.destroy();
        self.readback.destroy();
        self.pipeline.destroy();
        log::debug!("Engine disposed");
    }

    fn upload_uniforms(&self) {
        let uniforms = IntegrationUniforms::new(
            self.attractor,
            &self.params,
            self.particle_count,
            self.texture_size,
            self.time_scale,
        );
        self.pipeline.write_uniforms(&self.queue, &uniforms);
    }
}

/// Validate sizes against the device and build the initial buffer.
fn seed(
    device: &wgpu::Device,
    definition: &AttractorDefinition,
    particle_count: u32,
) -> Result<(ParticleBuffer, u32), EngineError> {
    if particle_count == 0 {
        return Err(EngineError::InvalidParticleCount(particle_count));
    }
    let texture_size = layout::texture_size(particle_count);
    let max = device.limits().max_texture_dimension_2d;
    if texture_size > max {
        return Err(EngineError::TextureTooLarge { texture_size, max });
    }
    let buffer = layout::create_position_data(definition, particle_count, texture_size)?;
    Ok((buffer, texture_size))
}

/// Both slots hold `buffer` when this returns.
fn create_textures(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    buffer: &ParticleBuffer,
) -> PingPong<PositionTexture> {
    PingPong::new(
        create_data_texture(device, queue, buffer),
        create_data_texture(device, queue, buffer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::GpuContext;

    fn read_slot(engine: &ComputeEngine, texture: &PositionTexture) -> ParticleBuffer {
        engine
            .readback
            .read(&engine.device, &engine.queue, texture, engine.particle_count)
            .unwrap()
    }

    #[test]
    fn test_double_initialize_fills_both_slots() {
        let Ok(ctx) = GpuContext::headless() else { return };
        let mut engine = ComputeEngine::new(
            ctx.device.clone(),
            ctx.queue.clone(),
            EngineConfig::new().with_particle_count(500),
        )
        .unwrap();

        // Odd step count leaves slot B current and both slots diverged
        for _ in 0..3 {
            engine.compute();
        }
        engine.initialize(AttractorId::Thomas, 500).unwrap();
        engine.initialize(AttractorId::Thomas, 500).unwrap();

        assert!(!engine.textures.read_is_b());
        let expected = layout::create_position_data(
            AttractorId::Thomas.definition(),
            500,
            layout::texture_size(500),
        )
        .unwrap();
        let current = read_slot(&engine, engine.textures.current());
        let next = read_slot(&engine, engine.textures.next());
        assert_eq!(current, expected);
        assert_eq!(next, expected);
    }
}
