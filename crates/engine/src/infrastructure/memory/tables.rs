//! Row storage and the write operations every port funnels through.
//!
//! Bodies are stored as their persisted `*Record` rows; readers rebuild them
//! with `rehydrate`, so every load re-runs the domain derivation.

use std::collections::HashMap;

use galaxyforge_domain::*;

use crate::infrastructure::ports::RepoError;

/// A system plus its insertion sequence, so listings keep creation order.
#[derive(Debug, Clone)]
pub(super) struct Sequenced<T> {
    pub(super) seq: u64,
    pub(super) value: T,
}

/// One accepted write. Transactions journal these and replay them on commit.
#[derive(Debug, Clone)]
pub(super) enum Change {
    SaveGalaxy(Galaxy),
    DeleteGalaxy(GalaxyId),
    SaveSystem(StarSystem),
    DeleteSystem(SystemId),
    SaveStar(StarRecord),
    DeleteStar(StarId),
    SavePlanet(PlanetRecord),
    DeletePlanet(PlanetId),
    SaveMoon(MoonRecord),
    DeleteMoon(MoonId),
    SaveAsteroid(AsteroidRecord),
    DeleteAsteroid(AsteroidId),
}

#[derive(Debug, Clone, Default)]
pub(super) struct Tables {
    pub(super) galaxies: HashMap<GalaxyId, Galaxy>,
    pub(super) systems: HashMap<SystemId, Sequenced<StarSystem>>,
    pub(super) stars: HashMap<StarId, StarRecord>,
    pub(super) planets: HashMap<PlanetId, PlanetRecord>,
    pub(super) moons: HashMap<MoonId, MoonRecord>,
    pub(super) asteroids: HashMap<AsteroidId, AsteroidRecord>,
    next_seq: u64,
}

fn missing_parent(child: &'static str, parent: &'static str, id: impl ToString) -> RepoError {
    RepoError::constraint(format!(
        "cannot save {}: {} {} does not exist",
        child,
        parent,
        id.to_string()
    ))
}

fn has_children(entity: &'static str, id: impl ToString, children: &'static str) -> RepoError {
    RepoError::constraint(format!(
        "cannot delete {} {}: {} still reference it",
        entity,
        id.to_string(),
        children
    ))
}

/// Maps a row that no longer passes domain validation.
pub(super) fn corrupt_row(operation: &'static str, error: DomainError) -> RepoError {
    RepoError::database(operation, format!("stored row failed validation: {}", error))
}

impl Tables {
    /// Apply one write, enforcing parent/child ownership.
    pub(super) fn apply(&mut self, change: &Change) -> Result<(), RepoError> {
        match change {
            Change::SaveGalaxy(galaxy) => {
                self.galaxies.insert(galaxy.id(), galaxy.clone());
            }
            Change::DeleteGalaxy(id) => {
                if self.systems.values().any(|s| s.value.galaxy_id() == *id) {
                    return Err(has_children("galaxy", id, "systems"));
                }
                self.galaxies
                    .remove(id)
                    .ok_or_else(|| RepoError::not_found("Galaxy", id))?;
            }
            Change::SaveSystem(system) => {
                if !self.galaxies.contains_key(&system.galaxy_id()) {
                    return Err(missing_parent("system", "galaxy", system.galaxy_id()));
                }
                // Updates keep their original position in the listing.
                let seq = match self.systems.get(&system.id()) {
                    Some(existing) => existing.seq,
                    None => {
                        self.next_seq += 1;
                        self.next_seq
                    }
                };
                self.systems.insert(
                    system.id(),
                    Sequenced {
                        seq,
                        value: system.clone(),
                    },
                );
            }
            Change::DeleteSystem(id) => {
                let occupied = self.stars.values().any(|s| s.system_id == *id)
                    || self.planets.values().any(|p| p.system_id == *id)
                    || self.asteroids.values().any(|a| a.system_id == *id);
                if occupied {
                    return Err(has_children("system", id, "stars, planets or asteroids"));
                }
                self.systems
                    .remove(id)
                    .ok_or_else(|| RepoError::not_found("StarSystem", id))?;
            }
            Change::SaveStar(row) => {
                if !self.systems.contains_key(&row.system_id) {
                    return Err(missing_parent("star", "system", row.system_id));
                }
                self.stars.insert(row.id, row.clone());
            }
            Change::DeleteStar(id) => {
                self.stars
                    .remove(id)
                    .ok_or_else(|| RepoError::not_found("Star", id))?;
            }
            Change::SavePlanet(row) => {
                if !self.systems.contains_key(&row.system_id) {
                    return Err(missing_parent("planet", "system", row.system_id));
                }
                self.planets.insert(row.id, row.clone());
            }
            Change::DeletePlanet(id) => {
                if self.moons.values().any(|m| m.planet_id == *id) {
                    return Err(has_children("planet", id, "moons"));
                }
                self.planets
                    .remove(id)
                    .ok_or_else(|| RepoError::not_found("Planet", id))?;
            }
            Change::SaveMoon(row) => {
                if !self.planets.contains_key(&row.planet_id) {
                    return Err(missing_parent("moon", "planet", row.planet_id));
                }
                self.moons.insert(row.id, row.clone());
            }
            Change::DeleteMoon(id) => {
                self.moons
                    .remove(id)
                    .ok_or_else(|| RepoError::not_found("Moon", id))?;
            }
            Change::SaveAsteroid(row) => {
                if !self.systems.contains_key(&row.system_id) {
                    return Err(missing_parent("asteroid", "system", row.system_id));
                }
                self.asteroids.insert(row.id, row.clone());
            }
            Change::DeleteAsteroid(id) => {
                self.asteroids
                    .remove(id)
                    .ok_or_else(|| RepoError::not_found("Asteroid", id))?;
            }
        }
        Ok(())
    }

    pub(super) fn counts(&self) -> super::StoreCounts {
        super::StoreCounts {
            galaxies: self.galaxies.len(),
            systems: self.systems.len(),
            stars: self.stars.len(),
            planets: self.planets.len(),
            moons: self.moons.len(),
            asteroids: self.asteroids.len(),
        }
    }
}
