//! GPU resources for the compute engine.
//!
//! Nothing here owns a window or surface. The engine works on any
//! `wgpu::Device`; [`GpuContext`] is a convenience for headless hosts and
//! tests.

mod integrate;
mod ping_pong;
mod readback;
mod texture;

use std::sync::Arc;

use crate::error::GpuError;

pub(crate) use integrate::{IntegrationPipeline, IntegrationUniforms};
pub use integrate::INTEGRATE_SHADER;
pub use ping_pong::PingPong;
pub(crate) use readback::Readback;
pub use texture::{create_data_texture, PositionTexture, POSITION_FORMAT};

/// A device and queue without a surface.
#[derive(Clone)]
pub struct GpuContext {
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

/// Adapter requests tried in order: a hardware adapter on the primary
/// backends, then a software adapter on any backend.
const ADAPTER_ATTEMPTS: [(wgpu::Backends, bool); 2] = [
    (wgpu::Backends::PRIMARY, false),
    (wgpu::Backends::all(), true),
];

impl GpuContext {
    /// Acquire a headless adapter, blocking until ready.
    pub fn headless() -> Result<Self, GpuError> {
        pollster::block_on(Self::new_headless())
    }

    /// Acquire the default high-performance adapter, or a software adapter
    /// when no hardware one is available.
    pub async fn new_headless() -> Result<Self, GpuError> {
        let mut found = None;
        for (backends, force_fallback_adapter) in ADAPTER_ATTEMPTS {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends,
                ..Default::default()
            });
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::HighPerformance,
                    compatible_surface: None,
                    force_fallback_adapter,
                })
                .await;
            if adapter.is_some() {
                found = adapter;
                break;
            }
            log::warn!(
                "No adapter on {:?} (fallback: {})",
                backends,
                force_fallback_adapter
            );
        }
        let adapter = found.ok_or(GpuError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("SAPE Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_adapter_is_tried_first() {
        let (first_backends, first_fallback) = ADAPTER_ATTEMPTS[0];
        assert_eq!(first_backends, wgpu::Backends::PRIMARY);
        assert!(!first_fallback);

        let (last_backends, last_fallback) = ADAPTER_ATTEMPTS[ADAPTER_ATTEMPTS.len() - 1];
        assert_eq!(last_backends, wgpu::Backends::all());
        assert!(last_fallback);
    }
}
