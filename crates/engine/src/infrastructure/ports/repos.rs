//! Repository port traits for celestial storage.

use std::sync::Arc;

use async_trait::async_trait;
use galaxyforge_domain::*;

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GalaxyRepo: Send + Sync {
    async fn get(&self, id: GalaxyId) -> Result<Option<Galaxy>, RepoError>;
    /// Insert or replace.
    async fn save(&self, galaxy: &Galaxy) -> Result<(), RepoError>;
    async fn delete(&self, id: GalaxyId) -> Result<(), RepoError>;
    async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<Galaxy>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SystemRepo: Send + Sync {
    async fn get(&self, id: SystemId) -> Result<Option<StarSystem>, RepoError>;
    async fn save(&self, system: &StarSystem) -> Result<(), RepoError>;
    async fn delete(&self, id: SystemId) -> Result<(), RepoError>;
    /// Systems of a galaxy in creation order.
    async fn list_in_galaxy(&self, galaxy_id: GalaxyId) -> Result<Vec<StarSystem>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StarRepo: Send + Sync {
    async fn save(&self, star: &Star) -> Result<(), RepoError>;
    async fn save_many(&self, stars: &[Star]) -> Result<(), RepoError>;
    async fn delete(&self, id: StarId) -> Result<(), RepoError>;
    async fn list_in_system(&self, system_id: SystemId) -> Result<Vec<Star>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepo: Send + Sync {
    async fn save(&self, planet: &Planet) -> Result<(), RepoError>;
    async fn save_many(&self, planets: &[Planet]) -> Result<(), RepoError>;
    async fn delete(&self, id: PlanetId) -> Result<(), RepoError>;
    async fn list_in_system(&self, system_id: SystemId) -> Result<Vec<Planet>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoonRepo: Send + Sync {
    async fn save(&self, moon: &Moon) -> Result<(), RepoError>;
    async fn save_many(&self, moons: &[Moon]) -> Result<(), RepoError>;
    async fn delete(&self, id: MoonId) -> Result<(), RepoError>;
    async fn list_for_planet(&self, planet_id: PlanetId) -> Result<Vec<Moon>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AsteroidRepo: Send + Sync {
    async fn save(&self, asteroid: &Asteroid) -> Result<(), RepoError>;
    async fn save_many(&self, asteroids: &[Asteroid]) -> Result<(), RepoError>;
    async fn delete(&self, id: AsteroidId) -> Result<(), RepoError>;
    async fn list_in_system(&self, system_id: SystemId) -> Result<Vec<Asteroid>, RepoError>;
}

/// The six entity ports, bound to one transactional scope.
#[derive(Clone)]
pub struct GalaxyRepos {
    pub galaxies: Arc<dyn GalaxyRepo>,
    pub systems: Arc<dyn SystemRepo>,
    pub stars: Arc<dyn StarRepo>,
    pub planets: Arc<dyn PlanetRepo>,
    pub moons: Arc<dyn MoonRepo>,
    pub asteroids: Arc<dyn AsteroidRepo>,
}

// =============================================================================
// Unit of Work
// =============================================================================

/// An open transaction. Writes through `repos()` become visible to other
/// readers only after `commit`.
#[async_trait]
pub trait Transaction: Send {
    fn repos(&self) -> GalaxyRepos;
    async fn commit(self: Box<Self>) -> Result<(), RepoError>;
    async fn rollback(self: Box<Self>) -> Result<(), RepoError>;
}

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError>;
}
