//! Reposition a galaxy's systems for a new shape.
//!
//! Only positions change. System IDs, names and everything below the systems
//! stay as they are.

use galaxyforge_domain::{position_system, Galaxy, GalaxyId, GalaxyShape, RandomSource};

use crate::infrastructure::ports::GalaxyRepos;

use super::GalaxyTreeError;

#[derive(Debug, Default)]
pub struct RepositionSystems;

impl RepositionSystems {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute<R: RandomSource + Send>(
        &self,
        galaxy_id: GalaxyId,
        shape: GalaxyShape,
        repos: &GalaxyRepos,
        rng: &mut R,
    ) -> Result<Galaxy, GalaxyTreeError> {
        let mut galaxy = repos
            .galaxies
            .get(galaxy_id)
            .await?
            .ok_or(GalaxyTreeError::GalaxyNotFound(galaxy_id))?;
        let previous = galaxy.shape();
        galaxy.change_shape(shape);

        let systems = repos.systems.list_in_galaxy(galaxy_id).await?;
        let total = u32::try_from(systems.len()).unwrap_or(u32::MAX);
        for (index, mut system) in systems.into_iter().enumerate() {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            system.reposition(position_system(shape, index, total, rng));
            repos.systems.save(&system).await?;
        }
        repos.galaxies.save(&galaxy).await?;

        tracing::info!(
            galaxy_id = %galaxy_id,
            from = %previous,
            to = %shape,
            systems = total,
            "Repositioned galaxy systems"
        );
        Ok(galaxy)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::infrastructure::memory::InMemoryStore;
    use crate::infrastructure::random::SeededRandom;
    use crate::use_cases::galaxy::test_support::{galaxy, Mocks};
    use crate::use_cases::galaxy::CreateGalaxyTree;

    #[tokio::test]
    async fn moves_systems_without_touching_identity() {
        let store = InMemoryStore::new();
        let repos = store.repos();
        let galaxy = galaxy(GalaxyShape::Spherical, 25);
        let mut rng = SeededRandom::from_seed(21);

        CreateGalaxyTree::default()
            .execute(&galaxy, &repos, &mut rng)
            .await
            .expect("create tree");
        let before_counts = store.counts().await;
        let before = repos.systems.list_in_galaxy(galaxy.id()).await.expect("list");

        let updated = RepositionSystems::new()
            .execute(galaxy.id(), GalaxyShape::ThreeArmSpiral, &repos, &mut rng)
            .await
            .expect("reposition");
        assert_eq!(updated.shape(), GalaxyShape::ThreeArmSpiral);

        let after = repos.systems.list_in_galaxy(galaxy.id()).await.expect("list");
        let ids = |systems: &[galaxyforge_domain::StarSystem]| -> Vec<_> {
            systems.iter().map(|s| s.id()).collect()
        };
        assert_eq!(ids(&before), ids(&after));
        assert_eq!(store.counts().await, before_counts);

        for system in &after {
            assert!(system.position().z().abs() <= 60.0);
        }
        let distinct: HashSet<String> = after.iter().map(|s| s.position().to_string()).collect();
        assert!(distinct.len() > 1);

        let stored = repos
            .galaxies
            .get(galaxy.id())
            .await
            .expect("get")
            .expect("galaxy exists");
        assert_eq!(stored.shape(), GalaxyShape::ThreeArmSpiral);
    }

    #[tokio::test]
    async fn missing_galaxy_is_reported() {
        let mut mocks = Mocks::new();
        mocks.galaxies.expect_get().returning(|_| Ok(None));
        mocks.systems.expect_save().times(0);

        let err = RepositionSystems::new()
            .execute(
                GalaxyId::new(),
                GalaxyShape::Irregular,
                &mocks.into_repos(),
                &mut SeededRandom::from_seed(22),
            )
            .await
            .expect_err("galaxy is missing");

        assert!(matches!(err, GalaxyTreeError::GalaxyNotFound(_)));
    }
}
