//! Port implementations over the in-memory tables.

use std::sync::Arc;

use async_trait::async_trait;
use galaxyforge_domain::*;
use tokio::sync::{Mutex, RwLock};

use super::tables::{corrupt_row, Change, Tables};
use crate::infrastructure::ports::{
    AsteroidRepo, GalaxyRepo, MoonRepo, PlanetRepo, RepoError, StarRepo, SystemRepo,
};

/// Implements every entity port over one set of tables.
pub(super) struct InMemoryRepo {
    tables: Arc<RwLock<Tables>>,
    /// Present inside a transaction: accepted writes are recorded for commit.
    journal: Option<Arc<Mutex<Vec<Change>>>>,
}

impl InMemoryRepo {
    pub(super) fn live(tables: Arc<RwLock<Tables>>) -> Self {
        Self {
            tables,
            journal: None,
        }
    }

    pub(super) fn journaled(tables: Arc<RwLock<Tables>>, journal: Arc<Mutex<Vec<Change>>>) -> Self {
        Self {
            tables,
            journal: Some(journal),
        }
    }

    async fn write(&self, changes: impl IntoIterator<Item = Change>) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        for change in changes {
            tables.apply(&change)?;
            if let Some(journal) = &self.journal {
                journal.lock().await.push(change);
            }
        }
        Ok(())
    }
}

// =============================================================================
// Galaxy
// =============================================================================

#[async_trait]
impl GalaxyRepo for InMemoryRepo {
    async fn get(&self, id: GalaxyId) -> Result<Option<Galaxy>, RepoError> {
        Ok(self.tables.read().await.galaxies.get(&id).cloned())
    }

    async fn save(&self, galaxy: &Galaxy) -> Result<(), RepoError> {
        self.write([Change::SaveGalaxy(galaxy.clone())]).await
    }

    async fn delete(&self, id: GalaxyId) -> Result<(), RepoError> {
        self.write([Change::DeleteGalaxy(id)]).await
    }

    async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<Galaxy>, RepoError> {
        let tables = self.tables.read().await;
        let mut galaxies: Vec<Galaxy> = tables
            .galaxies
            .values()
            .filter(|g| g.owner_id() == owner_id)
            .cloned()
            .collect();
        galaxies.sort_by_key(|g| g.created_at());
        Ok(galaxies)
    }
}

// =============================================================================
// System
// =============================================================================

#[async_trait]
impl SystemRepo for InMemoryRepo {
    async fn get(&self, id: SystemId) -> Result<Option<StarSystem>, RepoError> {
        Ok(self
            .tables
            .read()
            .await
            .systems
            .get(&id)
            .map(|s| s.value.clone()))
    }

    async fn save(&self, system: &StarSystem) -> Result<(), RepoError> {
        self.write([Change::SaveSystem(system.clone())]).await
    }

    async fn delete(&self, id: SystemId) -> Result<(), RepoError> {
        self.write([Change::DeleteSystem(id)]).await
    }

    async fn list_in_galaxy(&self, galaxy_id: GalaxyId) -> Result<Vec<StarSystem>, RepoError> {
        let tables = self.tables.read().await;
        let mut systems: Vec<_> = tables
            .systems
            .values()
            .filter(|s| s.value.galaxy_id() == galaxy_id)
            .collect();
        systems.sort_by_key(|s| s.seq);
        Ok(systems.into_iter().map(|s| s.value.clone()).collect())
    }
}

// =============================================================================
// Star
// =============================================================================

#[async_trait]
impl StarRepo for InMemoryRepo {
    async fn save(&self, star: &Star) -> Result<(), RepoError> {
        self.write([Change::SaveStar(star.to_record())]).await
    }

    async fn save_many(&self, stars: &[Star]) -> Result<(), RepoError> {
        self.write(stars.iter().map(|s| Change::SaveStar(s.to_record())).collect::<Vec<_>>())
            .await
    }

    async fn delete(&self, id: StarId) -> Result<(), RepoError> {
        self.write([Change::DeleteStar(id)]).await
    }

    async fn list_in_system(&self, system_id: SystemId) -> Result<Vec<Star>, RepoError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<&StarRecord> = tables
            .stars
            .values()
            .filter(|row| row.system_id == system_id)
            .collect();
        rows.sort_by_key(|row| row.orbital);
        rows.into_iter()
            .map(|row| Star::rehydrate(row.clone()).map_err(|e| corrupt_row("list_stars", e)))
            .collect()
    }
}

// =============================================================================
// Planet
// =============================================================================

#[async_trait]
impl PlanetRepo for InMemoryRepo {
    async fn save(&self, planet: &Planet) -> Result<(), RepoError> {
        self.write([Change::SavePlanet(planet.to_record())]).await
    }

    async fn save_many(&self, planets: &[Planet]) -> Result<(), RepoError> {
        self.write(planets.iter().map(|p| Change::SavePlanet(p.to_record())).collect::<Vec<_>>())
            .await
    }

    async fn delete(&self, id: PlanetId) -> Result<(), RepoError> {
        self.write([Change::DeletePlanet(id)]).await
    }

    async fn list_in_system(&self, system_id: SystemId) -> Result<Vec<Planet>, RepoError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<&PlanetRecord> = tables
            .planets
            .values()
            .filter(|row| row.system_id == system_id)
            .collect();
        rows.sort_by_key(|row| row.orbital);
        rows.into_iter()
            .map(|row| Planet::rehydrate(row.clone()).map_err(|e| corrupt_row("list_planets", e)))
            .collect()
    }
}

// =============================================================================
// Moon
// =============================================================================

#[async_trait]
impl MoonRepo for InMemoryRepo {
    async fn save(&self, moon: &Moon) -> Result<(), RepoError> {
        self.write([Change::SaveMoon(moon.to_record())]).await
    }

    async fn save_many(&self, moons: &[Moon]) -> Result<(), RepoError> {
        self.write(moons.iter().map(|m| Change::SaveMoon(m.to_record())).collect::<Vec<_>>())
            .await
    }

    async fn delete(&self, id: MoonId) -> Result<(), RepoError> {
        self.write([Change::DeleteMoon(id)]).await
    }

    async fn list_for_planet(&self, planet_id: PlanetId) -> Result<Vec<Moon>, RepoError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<&MoonRecord> = tables
            .moons
            .values()
            .filter(|row| row.planet_id == planet_id)
            .collect();
        rows.sort_by_key(|row| row.orbital);
        rows.into_iter()
            .map(|row| Moon::rehydrate(row.clone()).map_err(|e| corrupt_row("list_moons", e)))
            .collect()
    }
}

// =============================================================================
// Asteroid
// =============================================================================

#[async_trait]
impl AsteroidRepo for InMemoryRepo {
    async fn save(&self, asteroid: &Asteroid) -> Result<(), RepoError> {
        self.write([Change::SaveAsteroid(asteroid.to_record())]).await
    }

    async fn save_many(&self, asteroids: &[Asteroid]) -> Result<(), RepoError> {
        self.write(asteroids.iter().map(|a| Change::SaveAsteroid(a.to_record())).collect::<Vec<_>>())
            .await
    }

    async fn delete(&self, id: AsteroidId) -> Result<(), RepoError> {
        self.write([Change::DeleteAsteroid(id)]).await
    }

    async fn list_in_system(&self, system_id: SystemId) -> Result<Vec<Asteroid>, RepoError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<&AsteroidRecord> = tables
            .asteroids
            .values()
            .filter(|row| row.system_id == system_id)
            .collect();
        rows.sort_by(|a, b| a.orbital.total_cmp(&b.orbital));
        rows.into_iter()
            .map(|row| {
                Asteroid::rehydrate(row.clone()).map_err(|e| corrupt_row("list_asteroids", e))
            })
            .collect()
    }
}
