//! Star system aggregate.

use serde::Serialize;

use crate::generation::position_system;
use crate::ids::{GalaxyId, SystemId};
use crate::random::RandomSource;
use crate::value_objects::{CelestialName, GalaxyShape, Position};

/// A system within a galaxy.
///
/// The position comes from the shape positioner at creation; afterwards it only
/// changes through [`StarSystem::reposition`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    id: SystemId,
    galaxy_id: GalaxyId,
    name: CelestialName,
    position: Position,
}

impl StarSystem {
    pub fn new(galaxy_id: GalaxyId, name: CelestialName, position: Position) -> Self {
        Self {
            id: SystemId::new(),
            galaxy_id,
            name,
            position,
        }
    }

    /// Create the `index`-th of `total` systems, placed for `shape`.
    pub fn create<R: RandomSource>(
        galaxy_id: GalaxyId,
        name: CelestialName,
        shape: GalaxyShape,
        index: u32,
        total: u32,
        rng: &mut R,
    ) -> Self {
        let position = position_system(shape, index, total, rng);
        Self::new(galaxy_id, name, position)
    }

    /// Set the system's ID (used when loading from storage).
    pub fn with_id(mut self, id: SystemId) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn id(&self) -> SystemId {
        self.id
    }

    #[inline]
    pub fn galaxy_id(&self) -> GalaxyId {
        self.galaxy_id
    }

    #[inline]
    pub fn name(&self) -> &CelestialName {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rename(&mut self, name: CelestialName) {
        self.name = name;
    }

    /// Move the system, e.g. after its galaxy changed shape.
    pub fn reposition(&mut self, position: Position) {
        self.position = position;
    }
}
