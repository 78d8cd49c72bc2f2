//! Galaxy tree population.
//!
//! For each of the galaxy's systems: place it for the galaxy's shape, give it
//! one to three stars, derive its orbital budget from the main star and fill
//! the planet, moon and asteroid slots that budget allows.

use galaxyforge_domain::{
    generate_system_stars, Asteroid, AsteroidSpec, DomainError, Galaxy, Moon, MoonSpec,
    NameGenerator, OrbitalSlotAllocator, Planet, PlanetSpec, RandomSource, Star, StarSystem,
};

use crate::infrastructure::ports::{GalaxyRepos, UnitOfWork};

use super::{GalaxyTreeError, GalaxyTreeSummary};

/// How a generated system reaches the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    /// Each entity is written as soon as it is generated.
    Sequential,
    /// The whole system is generated first, then written with one `save_many`
    /// call per entity kind.
    Batched,
}

/// Every entity of one system.
#[derive(Default)]
struct SystemTree {
    stars: Vec<Star>,
    planets: Vec<Planet>,
    moons: Vec<Moon>,
    asteroids: Vec<Asteroid>,
}

pub struct CreateGalaxyTree {
    names: NameGenerator,
}

impl Default for CreateGalaxyTree {
    fn default() -> Self {
        Self::new(NameGenerator::default())
    }
}

impl CreateGalaxyTree {
    pub fn new(names: NameGenerator) -> Self {
        Self { names }
    }

    /// Persist `galaxy` and its whole tree, one entity at a time. Each entity
    /// is written as soon as it is generated.
    ///
    /// A failure leaves whatever was already written in place; use
    /// [`execute_atomic`](Self::execute_atomic) when that matters.
    pub async fn execute<R: RandomSource + Send>(
        &self,
        galaxy: &Galaxy,
        repos: &GalaxyRepos,
        rng: &mut R,
    ) -> Result<GalaxyTreeSummary, GalaxyTreeError> {
        self.build(galaxy, repos, rng, WriteMode::Sequential).await
    }

    /// Persist `galaxy` and its tree inside one unit of work. Sibling writes
    /// are batched per system; any failure rolls everything back.
    pub async fn execute_atomic<R: RandomSource + Send>(
        &self,
        galaxy: &Galaxy,
        unit_of_work: &dyn UnitOfWork,
        rng: &mut R,
    ) -> Result<GalaxyTreeSummary, GalaxyTreeError> {
        let tx = unit_of_work.begin().await?;
        let repos = tx.repos();

        match self.build(galaxy, &repos, rng, WriteMode::Batched).await {
            Ok(summary) => {
                tx.commit().await?;
                Ok(summary)
            }
            Err(e) => {
                tracing::warn!(
                    galaxy_id = %galaxy.id(),
                    error = %e,
                    "Galaxy tree build failed, rolling back"
                );
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(
                        galaxy_id = %galaxy.id(),
                        error = %rollback_err,
                        "Rollback failed"
                    );
                }
                Err(e)
            }
        }
    }

    async fn build<R: RandomSource + Send>(
        &self,
        galaxy: &Galaxy,
        repos: &GalaxyRepos,
        rng: &mut R,
        mode: WriteMode,
    ) -> Result<GalaxyTreeSummary, GalaxyTreeError> {
        let total = galaxy.system_count().get();
        tracing::info!(
            galaxy_id = %galaxy.id(),
            shape = %galaxy.shape(),
            systems = total,
            "Building galaxy tree"
        );

        repos.galaxies.save(galaxy).await?;

        let mut summary = GalaxyTreeSummary::new(galaxy.id());
        for index in 0..total {
            let (system, tree) = self.build_system(galaxy, index, total, repos, rng, mode).await?;
            if mode == WriteMode::Batched {
                persist_batched(repos, &system, &tree).await?;
            }
            tracing::debug!(
                system_id = %system.id(),
                name = %system.name(),
                position = %system.position(),
                stars = tree.stars.len(),
                planets = tree.planets.len(),
                moons = tree.moons.len(),
                asteroids = tree.asteroids.len(),
                "Built system"
            );

            summary.systems += 1;
            summary.stars += tree.stars.len();
            summary.planets += tree.planets.len();
            summary.moons += tree.moons.len();
            summary.asteroids += tree.asteroids.len();
        }

        tracing::info!(
            galaxy_id = %galaxy.id(),
            systems = summary.systems,
            stars = summary.stars,
            planets = summary.planets,
            moons = summary.moons,
            asteroids = summary.asteroids,
            "Galaxy tree built"
        );
        Ok(summary)
    }

    /// Generate one system. In sequential mode every entity is saved right
    /// after it is created, so the write order matches the creation order.
    async fn build_system<R: RandomSource + Send>(
        &self,
        galaxy: &Galaxy,
        index: u32,
        total: u32,
        repos: &GalaxyRepos,
        rng: &mut R,
        mode: WriteMode,
    ) -> Result<(StarSystem, SystemTree), GalaxyTreeError> {
        let sequential = mode == WriteMode::Sequential;
        let mut tree = SystemTree::default();

        let name = self.names.generate(rng);
        let system = StarSystem::create(galaxy.id(), name, galaxy.shape(), index, total, rng);
        if sequential {
            repos.systems.save(&system).await?;
        }

        tree.stars = generate_system_stars(system.id(), &self.names, rng)?;
        if sequential {
            for star in &tree.stars {
                repos.stars.save(star).await?;
            }
        }
        let starter = tree
            .stars
            .first()
            .map(Star::orbital_starter)
            .ok_or_else(|| DomainError::constraint("system generated without a main star"))?;
        let plan = OrbitalSlotAllocator::new(starter).allocate(rng);

        for slot in plan.planets() {
            let name = self.names.generate(rng);
            let planet =
                Planet::create(system.id(), name, slot.ring(), PlanetSpec::default(), rng)?;
            if sequential {
                repos.planets.save(&planet).await?;
            }
            for ring in slot.moon_rings() {
                let name = self.names.generate(rng);
                let moon = Moon::create(planet.id(), name, *ring, MoonSpec::default(), rng)?;
                if sequential {
                    repos.moons.save(&moon).await?;
                }
                tree.moons.push(moon);
            }
            tree.planets.push(planet);
        }

        for ring in plan.asteroids() {
            let name = self.names.generate(rng);
            let asteroid =
                Asteroid::create(system.id(), name, *ring, AsteroidSpec::default(), rng)?;
            if sequential {
                repos.asteroids.save(&asteroid).await?;
            }
            tree.asteroids.push(asteroid);
        }

        Ok((system, tree))
    }
}

async fn persist_batched(
    repos: &GalaxyRepos,
    system: &StarSystem,
    tree: &SystemTree,
) -> Result<(), GalaxyTreeError> {
    repos.systems.save(system).await?;
    repos.stars.save_many(&tree.stars).await?;
    repos.planets.save_many(&tree.planets).await?;
    repos.moons.save_many(&tree.moons).await?;
    repos.asteroids.save_many(&tree.asteroids).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use galaxyforge_domain::{GalaxyShape, StarType};

    use super::*;
    use crate::infrastructure::memory::InMemoryStore;
    use crate::infrastructure::ports::{
        MockStarRepo, RepoError, StarRepo, Transaction, UnitOfWork,
    };
    use crate::infrastructure::random::SeededRandom;
    use crate::use_cases::galaxy::test_support::{galaxy, Mocks};

    #[tokio::test]
    async fn builds_requested_number_of_systems() {
        let store = InMemoryStore::new();
        let repos = store.repos();
        let galaxy = galaxy(GalaxyShape::FiveArmSpiral, 10);
        let mut rng = SeededRandom::from_seed(1);

        let summary = CreateGalaxyTree::default()
            .execute(&galaxy, &repos, &mut rng)
            .await
            .expect("CreateGalaxyTree should succeed");

        assert_eq!(summary.systems, 10);
        assert!(summary.stars >= 10 && summary.stars <= 30);

        let counts = store.counts().await;
        assert_eq!(counts.galaxies, 1);
        assert_eq!(counts.systems, summary.systems);
        assert_eq!(counts.stars, summary.stars);
        assert_eq!(counts.planets, summary.planets);
        assert_eq!(counts.moons, summary.moons);
        assert_eq!(counts.asteroids, summary.asteroids);
    }

    #[tokio::test]
    async fn every_system_respects_star_and_orbital_rules() {
        let store = InMemoryStore::new();
        let repos = store.repos();
        let galaxy = galaxy(GalaxyShape::Spherical, 40);
        let mut rng = SeededRandom::from_seed(2);

        CreateGalaxyTree::default()
            .execute(&galaxy, &repos, &mut rng)
            .await
            .expect("CreateGalaxyTree should succeed");

        let systems = repos.systems.list_in_galaxy(galaxy.id()).await.expect("systems");
        assert_eq!(systems.len(), 40);

        for system in systems {
            let stars = repos.stars.list_in_system(system.id()).await.expect("stars");
            assert!((1..=3).contains(&stars.len()));
            let mains: Vec<&Star> = stars.iter().filter(|s| s.is_main()).collect();
            assert_eq!(mains.len(), 1);
            assert_eq!(mains[0].orbital(), 0);
            if stars.iter().any(|s| {
                matches!(s.star_type(), StarType::BlackHole | StarType::NeutronStar)
            }) {
                assert_eq!(stars.len(), 1);
            }
            for companion in stars.iter().filter(|s| !s.is_main()) {
                assert_eq!(companion.orbital(), 1);
                assert!(companion.relative_mass() <= mains[0].relative_mass());
            }

            let s = mains[0].orbital_starter().get();
            let planets = repos.planets.list_in_system(system.id()).await.expect("planets");
            assert!(planets.len() as u32 <= 9 - s);
            let rings: HashSet<u32> = planets.iter().map(|p| p.orbital().get()).collect();
            assert_eq!(rings.len(), planets.len());
            for planet in &planets {
                let ring = planet.orbital().get();
                assert!(ring >= s && ring <= 8);

                let moons = repos.moons.list_for_planet(planet.id()).await.expect("moons");
                let budget = 6_i64 - i64::from(s);
                assert!(moons.len() as i64 <= budget.clamp(0, 5));
                for moon in moons {
                    assert!((1..=5).contains(&moon.orbital().get()));
                }
            }

            let asteroids = repos.asteroids.list_in_system(system.id()).await.expect("asteroids");
            for asteroid in asteroids {
                let k = asteroid.orbital().value() - f64::from(s) - 0.5;
                assert!(k >= 0.0 && k.fract() == 0.0);
                assert!(asteroid.orbital().value() <= 8.5);
            }
        }
    }

    #[tokio::test]
    async fn same_seed_builds_same_tree() {
        let galaxy = galaxy(GalaxyShape::Irregular, 15);
        let use_case = CreateGalaxyTree::default();

        let first = InMemoryStore::new();
        let second = InMemoryStore::new();
        let a = use_case
            .execute(&galaxy, &first.repos(), &mut SeededRandom::from_seed(99))
            .await
            .expect("first build");
        let b = use_case
            .execute(&galaxy, &second.repos(), &mut SeededRandom::from_seed(99))
            .await
            .expect("second build");
        assert_eq!(a, b);

        let names = |systems: Vec<StarSystem>| -> Vec<String> {
            systems.iter().map(|s| s.name().to_string()).collect()
        };
        let first_systems = first.repos().systems.list_in_galaxy(galaxy.id()).await;
        let second_systems = second.repos().systems.list_in_galaxy(galaxy.id()).await;
        let first_names = names(first_systems.expect("list"));
        let second_names = names(second_systems.expect("list"));
        assert_eq!(first_names, second_names);
    }

    /// Counts draws so tests can see when writes happen relative to generation.
    struct CountingRandom {
        inner: SeededRandom,
        draws: Arc<AtomicUsize>,
    }

    impl RandomSource for CountingRandom {
        fn next_unit(&mut self) -> f64 {
            self.draws.fetch_add(1, Ordering::SeqCst);
            self.inner.next_unit()
        }
    }

    #[tokio::test]
    async fn sequential_writes_follow_generation() {
        let galaxy = galaxy(GalaxyShape::Spherical, 1);
        let draws = Arc::new(AtomicUsize::new(0));
        let system_saved_at = Arc::new(Mutex::new(Vec::new()));
        let stars_saved_at = Arc::new(Mutex::new(Vec::new()));

        let mut mocks = Mocks::new();
        mocks.galaxies.expect_save().returning(|_| Ok(()));
        let (seen, counter) = (system_saved_at.clone(), draws.clone());
        mocks.systems.expect_save().times(1).returning(move |_| {
            seen.lock().expect("lock").push(counter.load(Ordering::SeqCst));
            Ok(())
        });
        let (seen, counter) = (stars_saved_at.clone(), draws.clone());
        mocks.stars.expect_save().returning(move |_| {
            seen.lock().expect("lock").push(counter.load(Ordering::SeqCst));
            Ok(())
        });
        mocks.planets.expect_save().returning(|_| Ok(()));
        mocks.moons.expect_save().returning(|_| Ok(()));
        mocks.asteroids.expect_save().returning(|_| Ok(()));

        let mut rng = CountingRandom {
            inner: SeededRandom::from_seed(21),
            draws: draws.clone(),
        };
        CreateGalaxyTree::default()
            .execute(&galaxy, &mocks.into_repos(), &mut rng)
            .await
            .expect("build");

        let system_at = system_saved_at.lock().expect("lock")[0];
        let stars_at = stars_saved_at.lock().expect("lock").clone();
        assert!(!stars_at.is_empty());
        // Stars are generated only after the system row is written.
        assert!(stars_at[0] > system_at, "system={} star={}", system_at, stars_at[0]);
    }

    #[tokio::test]
    async fn sequential_and_atomic_builds_agree() {
        let galaxy = galaxy(GalaxyShape::FiveArmSpiral, 8);
        let use_case = CreateGalaxyTree::default();

        let sequential = InMemoryStore::new();
        let atomic = InMemoryStore::new();
        let a = use_case
            .execute(&galaxy, &sequential.repos(), &mut SeededRandom::from_seed(42))
            .await
            .expect("sequential build");
        let b = use_case
            .execute_atomic(&galaxy, &atomic, &mut SeededRandom::from_seed(42))
            .await
            .expect("atomic build");

        assert_eq!(a, b);
        assert_eq!(sequential.counts().await, atomic.counts().await);
    }

    #[tokio::test]
    async fn repository_failure_propagates() {
        let galaxy = galaxy(GalaxyShape::Spherical, 3);

        let mut mocks = Mocks::new();
        mocks.galaxies.expect_save().times(1).returning(|_| Ok(()));
        mocks
            .systems
            .expect_save()
            .times(1)
            .returning(|_| Err(RepoError::database("save_system", "connection reset")));

        let err = CreateGalaxyTree::default()
            .execute(&galaxy, &mocks.into_repos(), &mut SeededRandom::from_seed(3))
            .await
            .expect_err("use case should fail");

        assert!(matches!(
            err,
            GalaxyTreeError::Repo(RepoError::Database { operation: "save_system", .. })
        ));
    }

    #[tokio::test]
    async fn atomic_build_commits_everything() {
        let store = InMemoryStore::new();
        let galaxy = galaxy(GalaxyShape::ThreeArmSpiral, 12);

        let summary = CreateGalaxyTree::default()
            .execute_atomic(&galaxy, &store, &mut SeededRandom::from_seed(4))
            .await
            .expect("atomic build");

        let counts = store.counts().await;
        assert_eq!(counts.systems, 12);
        assert_eq!(counts.stars, summary.stars);
        assert_eq!(counts.moons, summary.moons);
    }

    /// Wraps the in-memory store with a star port that always fails.
    struct FailingStars(InMemoryStore);

    struct FailingStarsTransaction(Box<dyn Transaction>);

    #[async_trait]
    impl UnitOfWork for FailingStars {
        async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError> {
            Ok(Box::new(FailingStarsTransaction(self.0.begin().await?)))
        }
    }

    #[async_trait]
    impl Transaction for FailingStarsTransaction {
        fn repos(&self) -> GalaxyRepos {
            let mut stars = MockStarRepo::new();
            stars
                .expect_save_many()
                .returning(|_| Err(RepoError::database("save_stars", "disk full")));
            let mut repos = self.0.repos();
            repos.stars = Arc::new(stars) as Arc<dyn StarRepo>;
            repos
        }

        async fn commit(self: Box<Self>) -> Result<(), RepoError> {
            self.0.commit().await
        }

        async fn rollback(self: Box<Self>) -> Result<(), RepoError> {
            self.0.rollback().await
        }
    }

    #[tokio::test]
    async fn atomic_build_rolls_back_on_failure() {
        let store = InMemoryStore::new();
        let faulty = FailingStars(store.clone());
        let galaxy = galaxy(GalaxyShape::Spherical, 5);

        let err = CreateGalaxyTree::default()
            .execute_atomic(&galaxy, &faulty, &mut SeededRandom::from_seed(5))
            .await
            .expect_err("use case should fail");

        assert!(matches!(err, GalaxyTreeError::Repo(_)));
        assert!(store.counts().await.is_empty());
    }
}
