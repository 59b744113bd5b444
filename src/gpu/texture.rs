//! Particle position textures.

use crate::layout::{ParticleBuffer, TEXEL_BYTES};

/// Texel format of every position texture.
pub const POSITION_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba32Float;

/// A square float texture holding one particle per texel.
///
/// Sampled with nearest filtering and clamp-to-edge addressing, so a lookup
/// never blends two particles together.
pub struct PositionTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    size: u32,
}

impl PositionTexture {
    /// Allocate an empty `size`×`size` position texture.
    pub fn new(device: &wgpu::Device, size: u32, label: &str) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: extent(size),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: POSITION_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::STORAGE_BINDING
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", label)),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            size,
        }
    }

    /// Side length in texels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Upload a full buffer. The buffer must match this texture's size.
    pub fn write(&self, queue: &wgpu::Queue, buffer: &ParticleBuffer) {
        debug_assert_eq!(buffer.texture_size(), self.size);
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            buffer.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.size * TEXEL_BYTES),
                rows_per_image: Some(self.size),
            },
            extent(self.size),
        );
    }

    pub fn destroy(&self) {
        self.texture.destroy();
    }
}

/// Create a position texture sized for `buffer` and upload it.
pub fn create_data_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    buffer: &ParticleBuffer,
) -> PositionTexture {
    let texture = PositionTexture::new(device, buffer.texture_size(), "Position Texture");
    texture.write(queue, buffer);
    texture
}

pub(crate) fn extent(size: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size,
        height: size,
        depth_or_array_layers: 1,
    }
}
