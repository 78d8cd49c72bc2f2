//! Galaxy aggregate - the root of a generated celestial tree
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `GalaxyName`, `GalaxyShape` and `SystemCount` are valid by construction
//! - **No children**: systems reference their galaxy, never the other way round

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ids::{GalaxyId, UserId};
use crate::value_objects::{GalaxyName, GalaxyShape, SystemCount};

/// A galaxy owned by a user.
///
/// # Invariants
///
/// - `name` is 5-15 characters (enforced by `GalaxyName`)
/// - `shape` is one of the four supported morphologies
/// - `system_count` is within `[1, 1000]` (enforced by `SystemCount`)
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use galaxyforge_domain::{Galaxy, GalaxyName, GalaxyShape, SystemCount, UserId};
///
/// let name = GalaxyName::new("Andromeda").unwrap();
/// let count = SystemCount::clamped(12);
/// let galaxy = Galaxy::new(UserId::new(), name, GalaxyShape::Spherical, count, Utc::now());
///
/// assert_eq!(galaxy.system_count().get(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Galaxy {
    id: GalaxyId,
    owner_id: UserId,
    name: GalaxyName,
    shape: GalaxyShape,
    system_count: SystemCount,
    created_at: DateTime<Utc>,
}

impl Galaxy {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(
        owner_id: UserId,
        name: GalaxyName,
        shape: GalaxyShape,
        system_count: SystemCount,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: GalaxyId::new(),
            owner_id,
            name,
            shape,
            system_count,
            created_at: now,
        }
    }

    /// Set the galaxy's ID (used when loading from storage).
    pub fn with_id(mut self, id: GalaxyId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> GalaxyId {
        self.id
    }

    #[inline]
    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    #[inline]
    pub fn name(&self) -> &GalaxyName {
        &self.name
    }

    #[inline]
    pub fn shape(&self) -> GalaxyShape {
        self.shape
    }

    #[inline]
    pub fn system_count(&self) -> SystemCount {
        self.system_count
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn rename(&mut self, name: GalaxyName) {
        self.name = name;
    }

    /// Change morphology. Existing systems must be repositioned by the caller.
    pub fn change_shape(&mut self, shape: GalaxyShape) {
        self.shape = shape;
    }

    /// Update the requested system count; out-of-range values are clamped.
    pub fn set_system_count(&mut self, requested: i64) {
        self.system_count = SystemCount::clamped(requested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_galaxy() -> Galaxy {
        Galaxy::new(
            UserId::new(),
            GalaxyName::new("Test Galaxy").expect("valid name"),
            GalaxyShape::ThreeArmSpiral,
            SystemCount::clamped(10),
            Utc::now(),
        )
    }

    #[test]
    fn new_sets_fields() {
        let owner = UserId::new();
        let now = Utc::now();
        let galaxy = Galaxy::new(
            owner,
            GalaxyName::new("Milky Way").expect("valid name"),
            GalaxyShape::FiveArmSpiral,
            SystemCount::clamped(10),
            now,
        );
        assert_eq!(galaxy.owner_id(), owner);
        assert_eq!(galaxy.name().as_str(), "Milky Way");
        assert_eq!(galaxy.shape(), GalaxyShape::FiveArmSpiral);
        assert_eq!(galaxy.system_count().get(), 10);
        assert_eq!(galaxy.created_at(), now);
    }

    #[test]
    fn set_system_count_clamps() {
        let mut galaxy = create_test_galaxy();
        galaxy.set_system_count(0);
        assert_eq!(galaxy.system_count().get(), 1);
        galaxy.set_system_count(1_000_000);
        assert_eq!(galaxy.system_count().get(), 1000);
    }

    #[test]
    fn change_shape_and_rename() {
        let mut galaxy = create_test_galaxy();
        galaxy.change_shape(GalaxyShape::Irregular);
        galaxy.rename(GalaxyName::new("Sombrero").expect("valid name"));
        assert_eq!(galaxy.shape(), GalaxyShape::Irregular);
        assert_eq!(galaxy.name().as_str(), "Sombrero");
    }

    #[test]
    fn serialize_produces_camel_case() {
        let json = serde_json::to_string(&create_test_galaxy()).expect("serialize");
        assert!(json.contains("ownerId"));
        assert!(json.contains("systemCount"));
        assert!(json.contains("\"shape\":\"3-arm spiral\""));
    }
}
