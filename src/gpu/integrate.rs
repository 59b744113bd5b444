//! The integration compute pass.
//!
//! One WGSL program covers every model: it switches on the model index in
//! the uniforms and reads the coefficients positionally. Each invocation
//! advances one texel by a forward-Euler step.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::{PingPong, PositionTexture};
use crate::attractor::{AttractorId, Params};

/// Workgroup edge length. Workgroups are `WORKGROUP_SIZE`×`WORKGROUP_SIZE`.
pub const WORKGROUP_SIZE: u32 = 8;

/// Uniforms for one integration step.
///
/// Layout matches the WGSL `Params` struct: 64 bytes, coefficients starting
/// at a 16-byte boundary.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct IntegrationUniforms {
    pub model: u32,
    pub texture_size: u32,
    pub particle_count: u32,
    pub dt: f32,
    pub time_scale: f32,
    pub _padding: [f32; 3],
    /// Model coefficients in declaration order, `dt` excluded.
    pub k: [[f32; 4]; 2],
}

impl IntegrationUniforms {
    pub fn new(
        id: AttractorId,
        params: &Params,
        particle_count: u32,
        texture_size: u32,
        time_scale: f32,
    ) -> Self {
        let c = params.coefficients();
        Self {
            model: id.index(),
            texture_size,
            particle_count,
            dt: params.dt(),
            time_scale,
            _padding: [0.0; 3],
            k: [[c[0], c[1], c[2], c[3]], [c[4], c[5], c[6], c[7]]],
        }
    }
}

/// Compute pipeline, its layout and the uniform buffer it reads.
pub(crate) struct IntegrationPipeline {
    pipeline: wgpu::ComputePipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
}

impl IntegrationPipeline {
    pub fn new(device: &wgpu::Device, uniforms: &IntegrationUniforms) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Attractor Integrate Shader"),
            source: wgpu::ShaderSource::Wgsl(INTEGRATE_SHADER.into()),
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Attractor Uniform Buffer"),
            contents: bytemuck::bytes_of(uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Attractor Integrate Bind Group Layout"),
            entries: &[
                // Params
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Current positions
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: false },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                // Next positions
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::StorageTexture {
                        access: wgpu::StorageTextureAccess::WriteOnly,
                        format: super::POSITION_FORMAT,
                        view_dimension: wgpu::TextureViewDimension::D2,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Attractor Integrate Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("Attractor Integrate Pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some("main"),
            compilation_options: Default::default(),
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
            uniform_buffer,
        }
    }

    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &IntegrationUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Bind groups for both step directions: `[A -> B, B -> A]`.
    ///
    /// Index with `read_is_b as usize`.
    pub fn create_bind_groups(
        &self,
        device: &wgpu::Device,
        textures: &PingPong<PositionTexture>,
    ) -> [wgpu::BindGroup; 2] {
        let [a, b] = textures.both();
        [
            self.create_bind_group(device, a, b, "Attractor Integrate Bind Group A->B"),
            self.create_bind_group(device, b, a, "Attractor Integrate Bind Group B->A"),
        ]
    }

    fn create_bind_group(
        &self,
        device: &wgpu::Device,
        read: &PositionTexture,
        write: &PositionTexture,
        label: &str,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&read.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&write.view),
                },
            ],
        })
    }

    /// Record one step over a `texture_size`×`texture_size` grid.
    pub fn dispatch(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        bind_group: &wgpu::BindGroup,
        texture_size: u32,
    ) {
        let groups = texture_size.div_ceil(WORKGROUP_SIZE);
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("Attractor Integrate Pass"),
            timestamp_writes: None,
        });
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, bind_group, &[]);
        pass.dispatch_workgroups(groups, groups, 1);
    }

    pub fn destroy(&self) {
        self.uniform_buffer.destroy();
    }
}

/// WGSL source of the integration step. Model indices follow
/// [`AttractorId::index`].
pub const INTEGRATE_SHADER: &str = r#"
struct Params {
    model: u32,
    texture_size: u32,
    particle_count: u32,
    dt: f32,
    time_scale: f32,
    _pad0: f32,
    _pad1: f32,
    _pad2: f32,
    k: array<vec4<f32>, 2>,
};

@group(0) @binding(0) var<uniform> params: Params;
@group(0) @binding(1) var positions_in: texture_2d<f32>;
@group(0) @binding(2) var positions_out: texture_storage_2d<rgba32float, write>;

fn velocity_at(p: vec3<f32>) -> vec3<f32> {
    let k0 = params.k[0];
    let k1 = params.k[1];
    let x = p.x;
    let y = p.y;
    let z = p.z;

    var d = vec3<f32>(0.0);
    switch params.model {
        // Thomas
        case 0u: {
            let a = k0.x;
            d = vec3<f32>(-a * x + sin(y), -a * y + sin(z), -a * z + sin(x));
        }
        // Lorenz
        case 1u: {
            let sigma = k0.x;
            let rho = k0.y;
            let beta = k0.z;
            d = vec3<f32>(sigma * (y - x), x * (rho - z) - y, x * y - beta * z);
        }
        // Rossler
        case 2u: {
            d = vec3<f32>(-(y + z), x + k0.x * y, k0.y + z * (x - k0.z));
        }
        // Aizawa
        case 3u: {
            let a = k0.x;
            let b = k0.y;
            let c = k0.z;
            let dd = k0.w;
            let e = k1.x;
            d = vec3<f32>(
                (z - b) * x - dd * y,
                dd * x + (z - b) * y,
                c + a * z - z * z * z / 3.0 - x * x * (1.0 + e * z),
            );
        }
        // Arneodo
        case 4u: {
            d = vec3<f32>(y, z, -k0.x * x - k0.y * y - z + k0.z * x * x * x);
        }
        // Chen-Lee
        case 5u: {
            d = vec3<f32>(k0.x * x - y * z, k0.y * y + x * z, k0.z * z + x * y / k0.w);
        }
        // Chua
        case 6u: {
            let m0 = k0.z;
            let m1 = k0.w;
            let g = m1 * x + (m0 - m1) * 0.5 * (abs(x + 3.0) - abs(x - 3.0));
            d = vec3<f32>(k0.x * (y - x - g), x - y + z, -k0.y * y);
        }
        // Dadras
        case 7u: {
            d = vec3<f32>(
                y - k0.x * x + k0.y * y * z,
                k0.z * y - x * z + z,
                k0.w * x * y - k1.x * z,
            );
        }
        // Dequan Li
        case 8u: {
            d = vec3<f32>(
                k0.x * (y - x) + k0.z * x * z,
                k1.x * x + k1.y * y - x * z,
                k0.y * z + x * y - k0.w * x * x,
            );
        }
        // Halvorsen
        case 9u: {
            let a = k0.x;
            let b = k0.y;
            d = vec3<f32>(
                -a * x - b * y - b * z - y * y,
                -a * y - b * z - b * x - z * z,
                -a * z - b * x - b * y - x * x,
            );
        }
        // Lorenz Mod 2
        case 10u: {
            let a = k0.x;
            let b = k0.y;
            d = vec3<f32>(
                -a * x + y * y - z * z + a * k0.z,
                x * (y - b * z) + k0.w,
                -z + x * (b * y + z),
            );
        }
        // Simone
        case 11u: {
            let a = k0.x;
            let b = k0.y;
            let scale = k0.z;
            d = vec3<f32>(scale * sin(a * y) - x, scale * sin(b * z) - y, scale * cos(a * x) - z);
        }
        // Three Scroll
        case 12u: {
            d = vec3<f32>(
                k0.x * (y - x) + k0.z * x * z,
                k1.x * y - x * z,
                k0.y * z + x * y - k0.w * x * x,
            );
        }
        // Wang-Sun
        case 13u: {
            d = vec3<f32>(
                k0.x * x + k0.z * y * z,
                k0.y * x + k0.w * y - x * z,
                k1.x * z + k1.y * x * y,
            );
        }
        default: {}
    }
    return d;
}

@compute @workgroup_size(8, 8)
fn main(@builtin(global_invocation_id) global_id: vec3<u32>) {
    let size = params.texture_size;
    if (global_id.x >= size || global_id.y >= size) {
        return;
    }

    let coord = vec2<i32>(global_id.xy);
    let index = global_id.y * size + global_id.x;
    if (index >= params.particle_count) {
        textureStore(positions_out, coord, vec4<f32>(0.0));
        return;
    }

    let p = textureLoad(positions_in, coord, 0).xyz;
    let next = p + velocity_at(p) * params.dt * params.time_scale;
    textureStore(positions_out, coord, vec4<f32>(next, 1.0));
}
"#;
