//! Initial-condition distributions for seeding particles.
//!
//! Generators receive only `(index, total)`; they never see engine state.

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// How an attractor seeds its particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialConditions {
    /// Deterministic placement on a `cbrt(total)`-per-side grid spanning
    /// `[-half_extent, half_extent)` on every axis. Reproducible coverage.
    CubeGrid { half_extent: f32 },
    /// Random point inside a small ball around `center`, denser toward the
    /// middle. For systems whose attractor lies far from the origin.
    Sphere { center: Vec3, radius: f32 },
    /// Uniform random point in a small cube around the origin. For systems
    /// that self-organize quickly.
    UniformBox { half_extent: f32 },
}

impl InitialConditions {
    /// Start position for particle `index` out of `total`.
    pub fn sample(&self, index: u32, total: u32) -> Vec3 {
        let mut ctx = SpawnContext::new(index, total);
        self.generate(&mut ctx)
    }

    /// Start position using the given context's index, count and RNG.
    pub fn generate(&self, ctx: &mut SpawnContext) -> Vec3 {
        match *self {
            InitialConditions::CubeGrid { half_extent } => ctx.cube_grid_position() * half_extent,
            InitialConditions::Sphere { center, radius } => {
                center + ctx.random_in_sphere_clustered(radius)
            }
            InitialConditions::UniformBox { half_extent } => ctx.random_in_cube(half_extent),
        }
    }

    /// Whether repeated sampling yields identical positions.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, InitialConditions::CubeGrid { .. })
    }
}

/// Per-particle context handed to a distribution.
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    rng: SmallRng,
}

impl SpawnContext {
    /// Context seeded from the clock, so stochastic distributions differ
    /// between runs.
    pub fn new(index: u32, count: u32) -> Self {
        let seed = index as u64
            ^ (std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42));
        Self::with_seed(index, count, seed)
    }

    /// Context with a fixed seed, for reproducible stochastic sampling.
    pub fn with_seed(index: u32, count: u32, seed: u64) -> Self {
        Self {
            index,
            count,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count as f32
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random point inside a sphere of given radius, centered at origin.
    ///
    /// Radius and both angles are drawn uniformly, so points cluster toward
    /// the center and the poles instead of filling the volume evenly.
    pub fn random_in_sphere_clustered(&mut self, radius: f32) -> Vec3 {
        let theta = self.rng.gen_range(0.0..TAU);
        let phi = self.rng.gen_range(0.0..PI);
        let r = radius * self.rng.gen::<f32>();

        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    /// Random point inside a cube of given half-size, centered at origin.
    pub fn random_in_cube(&mut self, half_size: f32) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(-half_size..half_size),
            self.rng.gen_range(-half_size..half_size),
            self.rng.gen_range(-half_size..half_size),
        )
    }

    /// Position on a cube grid in `[-1, 1)` with `cbrt(count)` cells per side.
    ///
    /// The side length is generally not an integer; the modulo is real-valued,
    /// so particles fill the grid row by row without gaps. Computed in f64 so
    /// large counts do not lose index precision.
    pub fn cube_grid_position(&self) -> Vec3 {
        let size = (self.count as f64).cbrt();
        let i = self.index as f64;

        let x = (i % size) / size * 2.0 - 1.0;
        let y = ((i / size).floor() % size) / size * 2.0 - 1.0;
        let z = (i / (size * size)).floor() / size * 2.0 - 1.0;

        Vec3::new(x as f32, y as f32, z as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_context_progress() {
        let ctx = SpawnContext::new(50, 100);
        assert!((ctx.progress() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_random_in_sphere_bounds() {
        let mut ctx = SpawnContext::with_seed(0, 1, 7);
        for _ in 0..100 {
            let pos = ctx.random_in_sphere_clustered(0.5);
            assert!(pos.length() <= 0.5 + 0.001);
        }
    }

    #[test]
    fn test_sphere_seeding_clusters_toward_center() {
        let sphere = InitialConditions::Sphere {
            center: Vec3::new(0.0, 0.0, 25.0),
            radius: 0.1,
        };
        let mut ctx = SpawnContext::with_seed(0, 2000, 11);
        let mut total = 0.0;
        for _ in 0..2000 {
            let d = (sphere.generate(&mut ctx) - Vec3::new(0.0, 0.0, 25.0)).length();
            assert!(d <= 0.1 + 1e-5);
            total += d;
        }
        // Linear radius gives a mean of radius / 2; uniform volume would be 3/4
        let mean = total / 2000.0;
        assert!(mean < 0.06, "mean distance {}", mean);
        assert!(mean > 0.04, "mean distance {}", mean);
    }

    #[test]
    fn test_cube_grid_first_cell() {
        let ctx = SpawnContext::new(0, 1000);
        let pos = ctx.cube_grid_position();
        assert!((pos.x - (-1.0)).abs() < 0.001);
        assert!((pos.y - (-1.0)).abs() < 0.001);
        assert!((pos.z - (-1.0)).abs() < 0.001);
    }

    #[test]
    fn test_cube_grid_is_deterministic() {
        let grid = InitialConditions::CubeGrid { half_extent: 0.5 };
        assert!(grid.is_deterministic());
        for i in [0, 17, 999] {
            assert_eq!(grid.sample(i, 1000), grid.sample(i, 1000));
        }
    }

    #[test]
    fn test_cube_grid_stays_in_extent() {
        let grid = InitialConditions::CubeGrid { half_extent: 0.5 };
        for i in 0..1000 {
            let p = grid.sample(i, 1000);
            assert!(p.is_finite());
            assert!(p.abs().max_element() <= 0.5 + 1e-6, "{} -> {:?}", i, p);
        }
    }

    #[test]
    fn test_sphere_is_offset() {
        let sphere = InitialConditions::Sphere {
            center: Vec3::new(0.0, 0.0, 25.0),
            radius: 0.1,
        };
        let mut ctx = SpawnContext::with_seed(3, 10, 99);
        let p = sphere.generate(&mut ctx);
        assert!(p.z > 24.0 && p.z < 26.0);
        assert!(p.x.abs() < 1.0 && p.y.abs() < 1.0);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let bx = InitialConditions::UniformBox { half_extent: 0.2 };
        let a = bx.generate(&mut SpawnContext::with_seed(0, 1, 1234));
        let b = bx.generate(&mut SpawnContext::with_seed(0, 1, 1234));
        assert_eq!(a, b);
        assert!(!bx.is_deterministic());
    }
}
