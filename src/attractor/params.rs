//! Named scalar parameters of an attractor.

/// Maximum number of model coefficients (excluding `dt`) a single attractor
/// may carry. Matches the two `vec4<f32>` slots in the integration uniforms.
pub const MAX_COEFFICIENTS: usize = 8;

/// Ordered map from parameter name to value.
///
/// Order is the attractor's declaration order, which is also the order in
/// which coefficients are packed for the integration shader. `dt` is always
/// present and is never packed as a coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    entries: Vec<(&'static str, f32)>,
}

impl Params {
    /// Build a parameter set from static defaults.
    pub fn from_defaults(defaults: &[(&'static str, f32)]) -> Self {
        Self {
            entries: defaults.to_vec(),
        }
    }

    /// Value of a parameter, if present.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Whether a parameter with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    /// The integration timestep.
    pub fn dt(&self) -> f32 {
        self.get("dt").unwrap_or(0.0)
    }

    /// Overwrite an existing parameter. Returns `false` (and changes nothing)
    /// when the name is unknown.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => {
                entry.1 = value;
                true
            }
            None => false,
        }
    }

    /// Parameter names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of parameters, `dt` included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Model coefficients in declaration order, `dt` skipped, zero-padded.
    pub fn coefficients(&self) -> [f32; MAX_COEFFICIENTS] {
        let mut out = [0.0; MAX_COEFFICIENTS];
        for (slot, (_, value)) in out
            .iter_mut()
            .zip(self.entries.iter().filter(|(key, _)| *key != "dt"))
        {
            *slot = *value;
        }
        out
    }
}
