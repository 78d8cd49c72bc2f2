//! Galaxy tree teardown.
//!
//! Deletes bottom-up so no child ever outlives its parent: moons, then
//! planets, asteroids and stars, then each system, then the galaxy. Systems
//! are swept even when the galaxy row is already gone.

use galaxyforge_domain::{GalaxyId, StarSystem};

use crate::infrastructure::ports::GalaxyRepos;

use super::{GalaxyTreeError, GalaxyTreeSummary};

#[derive(Debug, Default)]
pub struct DeleteGalaxyTree;

impl DeleteGalaxyTree {
    pub fn new() -> Self {
        Self
    }

    /// Returns how many entities of each kind were deleted.
    ///
    /// A missing galaxy row is reported as `GalaxyNotFound`, after any
    /// systems still pointing at it have been deleted.
    pub async fn execute(
        &self,
        galaxy_id: GalaxyId,
        repos: &GalaxyRepos,
    ) -> Result<GalaxyTreeSummary, GalaxyTreeError> {
        let systems = repos.systems.list_in_galaxy(galaxy_id).await?;
        tracing::info!(
            galaxy_id = %galaxy_id,
            systems = systems.len(),
            "Deleting galaxy tree"
        );

        let mut summary = GalaxyTreeSummary::new(galaxy_id);
        for system in &systems {
            delete_system(repos, system, &mut summary).await?;
        }

        if repos.galaxies.get(galaxy_id).await?.is_none() {
            if summary.systems > 0 {
                tracing::warn!(
                    galaxy_id = %galaxy_id,
                    systems = summary.systems,
                    "Deleted orphaned systems of a missing galaxy"
                );
            }
            return Err(GalaxyTreeError::GalaxyNotFound(galaxy_id));
        }
        repos.galaxies.delete(galaxy_id).await?;

        tracing::info!(
            galaxy_id = %galaxy_id,
            systems = summary.systems,
            stars = summary.stars,
            planets = summary.planets,
            moons = summary.moons,
            asteroids = summary.asteroids,
            "Galaxy tree deleted"
        );
        Ok(summary)
    }
}

async fn delete_system(
    repos: &GalaxyRepos,
    system: &StarSystem,
    summary: &mut GalaxyTreeSummary,
) -> Result<(), GalaxyTreeError> {
    let system_id = system.id();
    let (planets, asteroids, stars) = tokio::try_join!(
        repos.planets.list_in_system(system_id),
        repos.asteroids.list_in_system(system_id),
        repos.stars.list_in_system(system_id),
    )?;

    for planet in &planets {
        let moons = repos.moons.list_for_planet(planet.id()).await?;
        for moon in &moons {
            repos.moons.delete(moon.id()).await?;
        }
        summary.moons += moons.len();
        repos.planets.delete(planet.id()).await?;
    }
    summary.planets += planets.len();

    for asteroid in &asteroids {
        repos.asteroids.delete(asteroid.id()).await?;
    }
    summary.asteroids += asteroids.len();

    for star in &stars {
        repos.stars.delete(star.id()).await?;
    }
    summary.stars += stars.len();

    repos.systems.delete(system_id).await?;
    summary.systems += 1;

    tracing::debug!(system_id = %system_id, "Deleted system");
    Ok(())
}
