//! Blocking texture readback.
//!
//! Copies a whole position texture into a `MAP_READ` staging buffer, waits
//! for the map, and strips the row padding the copy requires.

use std::sync::mpsc;

use super::texture::extent;
use super::PositionTexture;
use crate::error::GpuError;
use crate::layout::{ParticleBuffer, TEXEL_BYTES};

/// Row pitch of a copy of `size` texels, rounded up to
/// `COPY_BYTES_PER_ROW_ALIGNMENT` (256).
pub(crate) fn padded_bytes_per_row(size: u32) -> u32 {
    (size * TEXEL_BYTES).next_multiple_of(wgpu::COPY_BYTES_PER_ROW_ALIGNMENT)
}

/// Staging buffer sized for one texture.
pub(crate) struct Readback {
    staging_buffer: wgpu::Buffer,
    texture_size: u32,
}

impl Readback {
    pub fn new(device: &wgpu::Device, texture_size: u32) -> Self {
        let size = padded_bytes_per_row(texture_size) as u64 * texture_size as u64;
        let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Position Readback Staging Buffer"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            staging_buffer,
            texture_size,
        }
    }

    /// Copy `texture` to the CPU, blocking until the data is available.
    pub fn read(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texture: &PositionTexture,
        particle_count: u32,
    ) -> Result<ParticleBuffer, GpuError> {
        let size = self.texture_size;
        let padded_row = padded_bytes_per_row(size);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Position Readback Encoder"),
        });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &texture.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &self.staging_buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(size),
                },
            },
            extent(size),
        );
        queue.submit(std::iter::once(encoder.finish()));

        let buffer_slice = self.staging_buffer.slice(..);
        let (tx, rx) = mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        device.poll(wgpu::Maintain::Wait);

        match rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                log::error!("Position readback map failed: {}", e);
                return Err(GpuError::BufferMapping(e.to_string()));
            }
            Err(e) => {
                log::error!("Position readback channel closed: {}", e);
                return Err(GpuError::BufferMapping(e.to_string()));
            }
        }

        let row_bytes = (size * TEXEL_BYTES) as usize;
        let mut texels = Vec::with_capacity((size as usize).pow(2));
        {
            let data = buffer_slice.get_mapped_range();
            for row in data.chunks_exact(padded_row as usize) {
                texels.extend_from_slice(bytemuck::cast_slice::<u8, [f32; 4]>(&row[..row_bytes]));
            }
        }
        self.staging_buffer.unmap();

        log::debug!("Read back {}x{} position texels", size, size);
        Ok(ParticleBuffer::from_texels(texels, particle_count, size))
    }

    pub fn destroy(&self) {
        self.staging_buffer.destroy();
    }
}
