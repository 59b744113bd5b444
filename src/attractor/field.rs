//! CPU evaluation of the attractor vector fields.
//!
//! These are the same formulas as the WGSL integration program, with the
//! same positional coefficient packing, so host code can preview
//! trajectories and tests can check the GPU step against them.

use glam::Vec3;

use super::{AttractorId, Params, MAX_COEFFICIENTS};

impl AttractorId {
    /// Rate of change `(dx, dy, dz)` at `p`.
    ///
    /// `k` holds the model coefficients in declaration order, as produced by
    /// [`Params::coefficients`].
    pub fn derivative(self, p: Vec3, k: &[f32; MAX_COEFFICIENTS]) -> Vec3 {
        let Vec3 { x, y, z } = p;
        match self {
            AttractorId::Thomas => {
                let a = k[0];
                Vec3::new(-a * x + y.sin(), -a * y + z.sin(), -a * z + x.sin())
            }
            AttractorId::Lorenz => {
                let [sigma, rho, beta, ..] = *k;
                Vec3::new(sigma * (y - x), x * (rho - z) - y, x * y - beta * z)
            }
            AttractorId::Rossler => {
                let [a, b, c, ..] = *k;
                Vec3::new(-(y + z), x + a * y, b + z * (x - c))
            }
            AttractorId::Aizawa => {
                // Only x² in the last term, and no f·z·x³ term.
                let [a, b, c, d, e, ..] = *k;
                Vec3::new(
                    (z - b) * x - d * y,
                    d * x + (z - b) * y,
                    c + a * z - z * z * z / 3.0 - x * x * (1.0 + e * z),
                )
            }
            AttractorId::Arneodo => {
                let [a, b, d, ..] = *k;
                Vec3::new(y, z, -a * x - b * y - z + d * x * x * x)
            }
            AttractorId::ChenLee => {
                let [a, b, c, d, ..] = *k;
                Vec3::new(a * x - y * z, b * y + x * z, c * z + x * y / d)
            }
            AttractorId::Chua => {
                let [a, b, m0, m1, ..] = *k;
                let g = m1 * x + (m0 - m1) * 0.5 * ((x + 3.0).abs() - (x - 3.0).abs());
                Vec3::new(a * (y - x - g), x - y + z, -b * y)
            }
            AttractorId::Dadras => {
                let [a, b, c, d, e, ..] = *k;
                Vec3::new(y - a * x + b * y * z, c * y - x * z + z, d * x * y - e * z)
            }
            AttractorId::DequanLi => {
                let [a, b, c, d, e, f, ..] = *k;
                Vec3::new(
                    a * (y - x) + c * x * z,
                    e * x + f * y - x * z,
                    b * z + x * y - d * x * x,
                )
            }
            AttractorId::Halvorsen => {
                let [a, b, ..] = *k;
                Vec3::new(
                    -a * x - b * y - b * z - y * y,
                    -a * y - b * z - b * x - z * z,
                    -a * z - b * x - b * y - x * x,
                )
            }
            AttractorId::LorenzMod2 => {
                let [a, b, c, d, ..] = *k;
                Vec3::new(
                    -a * x + y * y - z * z + a * c,
                    x * (y - b * z) + d,
                    -z + x * (b * y + z),
                )
            }
            AttractorId::Simone => {
                let [a, b, scale, ..] = *k;
                Vec3::new(
                    scale * (a * y).sin() - x,
                    scale * (b * z).sin() - y,
                    scale * (a * x).cos() - z,
                )
            }
            AttractorId::ThreeScroll => {
                let [a, b, c, d, e, ..] = *k;
                Vec3::new(
                    a * (y - x) + c * x * z,
                    e * y - x * z,
                    b * z + x * y - d * x * x,
                )
            }
            AttractorId::WangSun => {
                let [a, b, c, d, e, f, ..] = *k;
                Vec3::new(a * x + c * y * z, b * x + d * y - x * z, e * z + f * x * y)
            }
        }
    }
}

/// One explicit forward-Euler step: `p + F(p) * dt * time_scale`.
pub fn euler_step(id: AttractorId, p: Vec3, params: &Params, time_scale: f32) -> Vec3 {
    p + id.derivative(p, &params.coefficients()) * (params.dt() * time_scale)
}
