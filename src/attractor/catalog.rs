//! The static catalog of attractor models.
//!
//! Entries are listed in registration order, which must match the variant
//! order of [`AttractorId`].

use glam::Vec3;

use super::{AttractorDefinition, AttractorId, Bounds, ColorScheme, ParamRange};
use crate::spawn::InitialConditions;

/// Small random perturbation around the origin, used by most models.
const NEAR_ORIGIN: InitialConditions = InitialConditions::UniformBox { half_extent: 0.2 };

pub(crate) static DEFINITIONS: [AttractorDefinition; 14] = [
    AttractorDefinition {
        id: AttractorId::Thomas,
        name: "Thomas",
        description: "Cyclically symmetric attractor with sinusoidal nonlinearity",
        defaults: &[("a", 0.19), ("dt", 0.015)],
        bounds: Bounds::cube(5.0),
        initial_conditions: InitialConditions::CubeGrid { half_extent: 0.5 },
        color_scheme: ColorScheme {
            start: Vec3::new(0.2, 0.4, 1.0),
            end: Vec3::new(1.0, 0.3, 0.8),
        },
        param_ranges: &[ParamRange { name: "a", min: 0.10, max: 0.30, default: 0.19 }],
    },
    AttractorDefinition {
        id: AttractorId::Lorenz,
        name: "Lorenz",
        description: "Classic butterfly attractor discovered by Edward Lorenz in 1963",
        defaults: &[("sigma", 10.0), ("rho", 28.0), ("beta", 8.0 / 3.0), ("dt", 0.005)],
        bounds: Bounds::new(Vec3::new(-25.0, -25.0, 0.0), Vec3::new(25.0, 25.0, 50.0)),
        // Centered in the attractor, far from the origin
        initial_conditions: InitialConditions::Sphere {
            center: Vec3::new(0.0, 0.0, 25.0),
            radius: 0.1,
        },
        color_scheme: ColorScheme {
            start: Vec3::new(0.3, 1.0, 0.4),
            end: Vec3::new(1.0, 0.9, 0.2),
        },
        param_ranges: &[
            ParamRange { name: "sigma", min: 5.0, max: 15.0, default: 10.0 },
            ParamRange { name: "rho", min: 20.0, max: 35.0, default: 28.0 },
            ParamRange { name: "beta", min: 1.0, max: 4.0, default: 8.0 / 3.0 },
        ],
    },
    AttractorDefinition {
        id: AttractorId::Rossler,
        name: "Rössler",
        description: "Single-banded spiral attractor with minimal nonlinearity",
        defaults: &[("a", 0.2), ("b", 0.2), ("c", 5.7), ("dt", 0.02)],
        bounds: Bounds::new(Vec3::new(-15.0, -15.0, -5.0), Vec3::new(15.0, 15.0, 25.0)),
        initial_conditions: InitialConditions::UniformBox { half_extent: 1.0 },
        color_scheme: ColorScheme {
            start: Vec3::new(1.0, 0.3, 0.2),
            end: Vec3::new(0.3, 0.8, 1.0),
        },
        param_ranges: &[
            ParamRange { name: "a", min: 0.1, max: 0.3, default: 0.2 },
            ParamRange { name: "b", min: 0.1, max: 0.3, default: 0.2 },
            ParamRange { name: "c", min: 4.0, max: 8.0, default: 5.7 },
        ],
    },
    AttractorDefinition {
        id: AttractorId::Aizawa,
        name: "Aizawa",
        description: "Five-parameter system with spherical topology",
        // Exactly five coefficients: this variant has no `f` term.
        defaults: &[("a", 0.95), ("b", 0.7), ("c", 0.6), ("d", 3.5), ("e", 0.25), ("dt", 0.01)],
        bounds: Bounds::cube(2.0),
        initial_conditions: InitialConditions::UniformBox { half_extent: 0.1 },
        color_scheme: ColorScheme {
            start: Vec3::new(0.8, 0.3, 1.0),
            end: Vec3::new(0.3, 1.0, 0.9),
        },
        param_ranges: &[
            ParamRange { name: "a", min: 0.5, max: 1.5, default: 0.95 },
            ParamRange { name: "b", min: 0.5, max: 1.0, default: 0.7 },
            ParamRange { name: "c", min: 0.3, max: 0.9, default: 0.6 },
        ],
    },
    AttractorDefinition {
        id: AttractorId::Arneodo,
        name: "Arneodo",
        description: "Third-order autonomous system with cubic nonlinearity",
        defaults: &[("a", -5.5), ("b", 3.5), ("d", -1.0), ("dt", 0.01)],
        bounds: Bounds::cube(5.0),
        initial_conditions: NEAR_ORIGIN,
        color_scheme: ColorScheme {
            start: Vec3::new(0.9, 0.2, 0.5),
            end: Vec3::new(0.2, 0.9, 0.7),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::ChenLee,
        name: "Chen-Lee",
        description: "Chaotic system with quadratic nonlinearities",
        defaults: &[("a", 5.0), ("b", -10.0), ("c", -0.38), ("d", 3.0), ("dt", 0.002)],
        bounds: Bounds::cube(50.0),
        initial_conditions: InitialConditions::UniformBox { half_extent: 0.005 },
        color_scheme: ColorScheme {
            start: Vec3::new(0.3, 0.7, 1.0),
            end: Vec3::new(1.0, 0.4, 0.6),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::Chua,
        name: "Chua's Circuit",
        description: "Electronic circuit attractor with piecewise-linear characteristic",
        defaults: &[("a", 15.6), ("b", 25.58), ("m0", -1.07), ("m1", -0.314), ("dt", 0.01)],
        bounds: Bounds::cube(5.0),
        initial_conditions: NEAR_ORIGIN,
        color_scheme: ColorScheme {
            start: Vec3::new(1.0, 0.5, 0.1),
            end: Vec3::new(0.2, 0.6, 1.0),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::Dadras,
        name: "Dadras",
        description: "Five-parameter chaotic system",
        defaults: &[("a", 3.0), ("b", 2.7), ("c", 1.7), ("d", 2.0), ("e", 9.0), ("dt", 0.01)],
        bounds: Bounds::cube(10.0),
        initial_conditions: NEAR_ORIGIN,
        color_scheme: ColorScheme {
            start: Vec3::new(0.7, 0.9, 0.3),
            end: Vec3::new(0.9, 0.3, 0.7),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::DequanLi,
        name: "Dequan Li",
        description: "Six-parameter attractor with complex dynamics",
        defaults: &[
            ("a", 40.0),
            ("b", 1.833),
            ("c", 0.16),
            ("d", 0.65),
            ("e", 55.0),
            ("f", 20.0),
            ("dt", 0.001),
        ],
        bounds: Bounds::cube(20.0),
        initial_conditions: NEAR_ORIGIN,
        color_scheme: ColorScheme {
            start: Vec3::new(1.0, 0.8, 0.2),
            end: Vec3::new(0.4, 0.2, 0.9),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::Halvorsen,
        name: "Halvorsen",
        description: "Symmetric attractor with quadratic nonlinearities",
        defaults: &[("a", 1.89), ("b", 4.0), ("dt", 0.01)],
        bounds: Bounds::cube(10.0),
        initial_conditions: InitialConditions::UniformBox { half_extent: 1.0 },
        color_scheme: ColorScheme {
            start: Vec3::new(0.5, 1.0, 0.5),
            end: Vec3::new(1.0, 0.5, 0.5),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::LorenzMod2,
        name: "Lorenz Mod 2",
        description: "Modified version of the Lorenz system",
        defaults: &[("a", 0.9), ("b", 5.0), ("c", 9.9), ("d", 1.0), ("dt", 0.01)],
        bounds: Bounds::cube(10.0),
        initial_conditions: NEAR_ORIGIN,
        color_scheme: ColorScheme {
            start: Vec3::new(0.2, 0.8, 0.9),
            end: Vec3::new(0.9, 0.8, 0.2),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::Simone,
        name: "Simone",
        description: "Trigonometric attractor with sinusoidal coupling",
        defaults: &[("a", 5.51), ("b", 4.84), ("scale", 2.0), ("dt", 0.005)],
        bounds: Bounds::cube(5.0),
        initial_conditions: NEAR_ORIGIN,
        color_scheme: ColorScheme {
            start: Vec3::new(0.9, 0.5, 0.2),
            end: Vec3::new(0.2, 0.5, 0.9),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::ThreeScroll,
        name: "Three Scroll",
        description: "Multi-scroll attractor with three distinct lobes",
        defaults: &[("a", 40.0), ("b", 0.833), ("c", 0.5), ("d", 0.65), ("e", 20.0), ("dt", 0.001)],
        bounds: Bounds::cube(20.0),
        initial_conditions: NEAR_ORIGIN,
        color_scheme: ColorScheme {
            start: Vec3::new(0.6, 0.3, 0.9),
            end: Vec3::new(0.3, 0.9, 0.6),
        },
        param_ranges: &[],
    },
    AttractorDefinition {
        id: AttractorId::WangSun,
        name: "Wang-Sun",
        description: "Six-parameter chaotic system",
        defaults: &[
            ("a", 0.2),
            ("b", -0.03),
            ("c", 0.3),
            ("d", -0.4),
            ("e", -1.5),
            ("f", -1.5),
            ("dt", 0.01),
        ],
        bounds: Bounds::cube(5.0),
        initial_conditions: NEAR_ORIGIN,
        color_scheme: ColorScheme {
            start: Vec3::new(0.8, 0.7, 0.3),
            end: Vec3::new(0.3, 0.7, 0.8),
        },
        param_ranges: &[],
    },
];
