//! Lookup over the static attractor catalog.
//!
//! All lookups are pure and borrow from static data, so any number of
//! callers can use them without synchronization.
//!
//! ```ignore
//! use sape::registry;
//!
//! let lorenz = registry::get("lorenz")?;
//! assert_eq!(lorenz.params().get("rho"), Some(28.0));
//!
//! for id in registry::all_ids() {
//!     println!("{}: dt = {}", id, id.definition().dt());
//! }
//! ```

use crate::attractor::{AttractorDefinition, AttractorId, DEFINITIONS};
use crate::error::RegistryError;

/// Definition registered under `id`.
///
/// Ids are case-sensitive; unknown ids yield [`RegistryError::NotFound`].
pub fn get(id: &str) -> Result<&'static AttractorDefinition, RegistryError> {
    id.parse::<AttractorId>().map(AttractorId::definition)
}

/// Like [`get`], but substitutes Thomas for unknown ids.
///
/// Only for callers that explicitly want a default. The compute engine
/// never uses this.
pub fn get_or_default(id: &str) -> &'static AttractorDefinition {
    get(id).unwrap_or_else(|_| {
        log::warn!("Unknown attractor \"{}\", falling back to thomas", id);
        AttractorId::Thomas.definition()
    })
}

/// All ids in registration order.
pub fn all_ids() -> Vec<AttractorId> {
    AttractorId::ALL.to_vec()
}

/// All definitions in registration order.
pub fn all() -> &'static [AttractorDefinition] {
    &DEFINITIONS
}

/// Whether `id` names a registered attractor.
pub fn has(id: &str) -> bool {
    get(id).is_ok()
}
