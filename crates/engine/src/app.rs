//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    memory::InMemoryStore,
    ports::{ClockPort, GalaxyRepos, UnitOfWork},
};
use crate::use_cases;
use crate::use_cases::galaxy::{CreateGalaxy, CreateGalaxyTree, DeleteGalaxyTree, RepositionSystems};

/// Main application state.
///
/// Holds the repository ports, the unit of work that scopes atomic builds, and
/// the use cases wired over them.
pub struct App {
    pub repositories: GalaxyRepos,
    pub unit_of_work: Arc<dyn UnitOfWork>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub galaxy: use_cases::GalaxyUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repositories: GalaxyRepos,
        unit_of_work: Arc<dyn UnitOfWork>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let galaxy = use_cases::GalaxyUseCases::new(
            Arc::new(CreateGalaxy::new(repositories.galaxies.clone(), clock)),
            Arc::new(CreateGalaxyTree::default()),
            Arc::new(DeleteGalaxyTree::new()),
            Arc::new(RepositionSystems::new()),
        );

        Self {
            repositories,
            unit_of_work,
            use_cases: UseCases { galaxy },
        }
    }

    /// Wire the app over an in-memory store and the system clock.
    pub fn in_memory(store: &InMemoryStore) -> Self {
        Self::new(
            store.repos(),
            Arc::new(store.clone()),
            Arc::new(SystemClock::new()),
        )
    }
}
