//! Attractor definitions.
//!
//! Every model is a variant of [`AttractorId`]. A single integration routine
//! (the WGSL program in `gpu::integrate`, mirrored on the CPU by
//! [`AttractorId::derivative`]) switches on that tag, so there is no per-model
//! type hierarchy.

mod catalog;
mod field;
mod params;

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::RegistryError;
use crate::spawn::InitialConditions;

pub(crate) use catalog::DEFINITIONS;
pub use field::euler_step;
pub use params::{Params, MAX_COEFFICIENTS};

/// Identifier of a registered attractor model.
///
/// Variant order is registration order and also the model index used by the
/// integration shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttractorId {
    Thomas,
    Lorenz,
    Rossler,
    Aizawa,
    Arneodo,
    ChenLee,
    Chua,
    Dadras,
    DequanLi,
    Halvorsen,
    LorenzMod2,
    Simone,
    ThreeScroll,
    WangSun,
}

impl AttractorId {
    /// All models in registration order.
    pub const ALL: [AttractorId; 14] = [
        AttractorId::Thomas,
        AttractorId::Lorenz,
        AttractorId::Rossler,
        AttractorId::Aizawa,
        AttractorId::Arneodo,
        AttractorId::ChenLee,
        AttractorId::Chua,
        AttractorId::Dadras,
        AttractorId::DequanLi,
        AttractorId::Halvorsen,
        AttractorId::LorenzMod2,
        AttractorId::Simone,
        AttractorId::ThreeScroll,
        AttractorId::WangSun,
    ];

    /// Stable string key.
    pub const fn as_str(self) -> &'static str {
        match self {
            AttractorId::Thomas => "thomas",
            AttractorId::Lorenz => "lorenz",
            AttractorId::Rossler => "rossler",
            AttractorId::Aizawa => "aizawa",
            AttractorId::Arneodo => "arneodo",
            AttractorId::ChenLee => "chen_lee",
            AttractorId::Chua => "chua",
            AttractorId::Dadras => "dadras",
            AttractorId::DequanLi => "dequan_li",
            AttractorId::Halvorsen => "halvorsen",
            AttractorId::LorenzMod2 => "lorenz_mod2",
            AttractorId::Simone => "simone",
            AttractorId::ThreeScroll => "three_scroll",
            AttractorId::WangSun => "wang_sun",
        }
    }

    /// Model index selected in the integration shader.
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// The model's registry entry. Infallible: every variant is registered.
    pub fn definition(self) -> &'static AttractorDefinition {
        &DEFINITIONS[self as usize]
    }

    /// Next model in registration order, wrapping around.
    pub fn next(self) -> AttractorId {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Previous model in registration order, wrapping around.
    pub fn previous(self) -> AttractorId {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AttractorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttractorId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RegistryError::NotFound(s.to_string()))
    }
}

impl TryFrom<&str> for AttractorId {
    type Error = RegistryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Axis-aligned extent of an attractor's typical phase space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Cube from `-half_extent` to `half_extent` on every axis.
    pub const fn cube(half_extent: f32) -> Self {
        Self {
            min: Vec3::splat(-half_extent),
            max: Vec3::splat(half_extent),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Start and end colors used by the particle render shader. RGB, 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub start: Vec3,
    pub end: Vec3,
}

/// Suggested range for live tweaking of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl ParamRange {
    /// Map a normalized slider position (0-1) into this range.
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t.clamp(0.0, 1.0)
    }
}

/// Immutable description of one dynamical system.
#[derive(Debug)]
pub struct AttractorDefinition {
    pub id: AttractorId,
    pub name: &'static str,
    pub description: &'static str,
    /// Canonical parameters in declaration order, `dt` last.
    pub defaults: &'static [(&'static str, f32)],
    pub bounds: Bounds,
    pub initial_conditions: InitialConditions,
    pub color_scheme: ColorScheme,
    pub param_ranges: &'static [ParamRange],
}

impl AttractorDefinition {
    /// A fresh, independently mutable copy of the canonical parameters.
    pub fn params(&self) -> Params {
        Params::from_defaults(self.defaults)
    }

    /// The tuned integration timestep.
    pub fn dt(&self) -> f32 {
        self.params().dt()
    }

    /// Start position for particle `index` out of `total`.
    pub fn initial_position(&self, index: u32, total: u32) -> Vec3 {
        self.initial_conditions.sample(index, total)
    }

    /// Vector field of this model at `p`.
    pub fn derivative(&self, p: Vec3, params: &Params) -> Vec3 {
        self.id.derivative(p, &params.coefficients())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_through_str() {
        for id in AttractorId::ALL {
            assert_eq!(id.as_str().parse::<AttractorId>(), Ok(id));
        }
        assert!("Thomas".parse::<AttractorId>().is_err());
    }

    #[test]
    fn test_index_matches_registration_order() {
        for (i, id) in AttractorId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i as u32);
            assert_eq!(id.definition().id, *id);
        }
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(AttractorId::Thomas.next(), AttractorId::Lorenz);
        assert_eq!(AttractorId::WangSun.next(), AttractorId::Thomas);
        assert_eq!(AttractorId::Thomas.previous(), AttractorId::WangSun);
    }

    #[test]
    fn test_bounds_helpers() {
        let b = Bounds::new(Vec3::new(-25.0, -25.0, 0.0), Vec3::new(25.0, 25.0, 50.0));
        assert_eq!(b.center(), Vec3::new(0.0, 0.0, 25.0));
        assert!(b.contains(Vec3::new(0.0, 0.0, 25.0)));
        assert!(!b.contains(Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_param_range_lerp_clamps() {
        let range = ParamRange { name: "a", min: 0.1, max: 0.3, default: 0.19 };
        assert!((range.lerp(0.5) - 0.2).abs() < 1e-6);
        assert_eq!(range.lerp(2.0), 0.3);
    }
}
