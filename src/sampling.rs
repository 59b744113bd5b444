//! Host-side selection over read-back particle state.
//!
//! Consumers such as audio voices want a handful of representative particles
//! near a listener, not the full buffer. These helpers work on
//! [`ParticleBuffer`]s returned by
//! [`ComputeEngine::read_positions`](crate::ComputeEngine::read_positions).

use glam::Vec3;

use crate::attractor::Bounds;
use crate::layout::ParticleBuffer;

/// Minimum spacing between picks used by the default audio mapping.
pub const DEFAULT_MIN_SEPARATION: f32 = 1.5;

/// One selected particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSample {
    pub index: u32,
    pub position: Vec3,
    /// Displacement since the previous readback; zero without one.
    pub velocity: Vec3,
    /// Distance to the listener.
    pub distance: f32,
}

/// Pick up to `count` particles near `listener`, spread apart.
///
/// Candidates are visited nearest first and kept only if they are at least
/// `min_separation` away from every particle kept so far. If that leaves
/// fewer than `count`, the nearest unpicked candidates fill the rest.
/// Non-finite particles are skipped; padding texels are never considered.
pub fn select_spread(
    current: &ParticleBuffer,
    previous: Option<&ParticleBuffer>,
    count: usize,
    listener: Vec3,
    min_separation: f32,
) -> Vec<ParticleSample> {
    let mut candidates: Vec<ParticleSample> = current
        .positions()
        .enumerate()
        .filter(|(_, position)| position.is_finite())
        .map(|(i, position)| {
            let index = i as u32;
            let velocity = previous
                .and_then(|prev| prev.position(index))
                .filter(|prev| prev.is_finite())
                .map_or(Vec3::ZERO, |prev| position - prev);
            ParticleSample {
                index,
                position,
                velocity,
                distance: position.distance(listener),
            }
        })
        .collect();

    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let mut picked = vec![false; candidates.len()];
    let mut selected: Vec<ParticleSample> = Vec::with_capacity(count);

    for (candidate, taken) in candidates.iter().zip(picked.iter_mut()) {
        if selected.len() >= count {
            break;
        }
        let too_close = selected
            .iter()
            .any(|s| s.position.distance(candidate.position) < min_separation);
        if !too_close {
            selected.push(*candidate);
            *taken = true;
        }
    }

    // Not enough well-separated particles; fill with nearest
    for (candidate, taken) in candidates.iter().zip(&picked) {
        if selected.len() >= count {
            break;
        }
        if !taken {
            selected.push(*candidate);
        }
    }

    selected
}

/// Map `position` into `[0, 1]³` relative to `bounds`, clamped.
pub fn normalize_in_bounds(position: Vec3, bounds: &Bounds) -> Vec3 {
    ((position - bounds.min) / bounds.size()).clamp(Vec3::ZERO, Vec3::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(points: &[[f32; 3]], texture_size: u32) -> ParticleBuffer {
        let mut data = vec![[0.0; 4]; (texture_size * texture_size) as usize];
        for (texel, p) in data.iter_mut().zip(points) {
            *texel = [p[0], p[1], p[2], 1.0];
        }
        ParticleBuffer::from_texels(data, points.len() as u32, texture_size)
    }

    #[test]
    fn test_spread_honours_separation() {
        let current = buffer(&[[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [2.0, 0.0, 0.0]], 2);
        let picks = select_spread(&current, None, 2, Vec3::ZERO, 1.5);

        let indices: Vec<u32> = picks.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 2]);
        assert!(picks.iter().all(|s| s.velocity == Vec3::ZERO));
    }

    #[test]
    fn test_spread_fills_with_nearest() {
        let current = buffer(&[[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.2, 0.0, 0.0]], 2);
        let picks = select_spread(&current, None, 3, Vec3::ZERO, 1.5);

        let indices: Vec<u32> = picks.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_spread_skips_nan_and_padding() {
        let current = buffer(&[[f32::NAN, 0.0, 0.0], [1.0, 0.0, 0.0]], 2);
        let picks = select_spread(&current, None, 4, Vec3::ZERO, 0.0);

        // Two padding texels sit at the origin but are not live
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].index, 1);
    }

    #[test]
    fn test_velocity_from_previous() {
        let previous = buffer(&[[1.0, 1.0, 1.0]], 1);
        let current = buffer(&[[1.5, 1.0, 0.0]], 1);
        let picks = select_spread(&current, Some(&previous), 1, Vec3::ZERO, 1.5);

        assert_eq!(picks[0].velocity, Vec3::new(0.5, 0.0, -1.0));
        assert!((picks[0].distance - current.position(0).unwrap().length()).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_in_bounds() {
        let bounds = Bounds::new(Vec3::new(-25.0, -25.0, 0.0), Vec3::new(25.0, 25.0, 50.0));
        assert_eq!(normalize_in_bounds(Vec3::new(0.0, 0.0, 25.0), &bounds), Vec3::splat(0.5));
        assert_eq!(normalize_in_bounds(Vec3::new(100.0, -100.0, 0.0), &bounds), Vec3::new(1.0, 0.0, 0.0));
    }
}
