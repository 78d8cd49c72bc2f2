//! In-memory persistence adapter.
//!
//! One table per entity behind a single `tokio::sync::RwLock`. Writes enforce
//! the parent/child ownership rules a relational store would: children need an
//! existing parent, and parents cannot be deleted while children remain.

mod repos;
mod tables;
mod unit_of_work;

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::infrastructure::ports::GalaxyRepos;

pub use unit_of_work::InMemoryTransaction;

use repos::InMemoryRepo;
use tables::Tables;

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub galaxies: usize,
    pub systems: usize,
    pub stars: usize,
    pub planets: usize,
    pub moons: usize,
    pub asteroids: usize,
}

impl StoreCounts {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Shared in-memory store. Cloning shares the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ports that read and write the live tables directly.
    pub fn repos(&self) -> GalaxyRepos {
        into_repos(InMemoryRepo::live(self.tables.clone()))
    }

    pub async fn counts(&self) -> StoreCounts {
        self.tables.read().await.counts()
    }
}

fn into_repos(repo: InMemoryRepo) -> GalaxyRepos {
    let repo = Arc::new(repo);
    GalaxyRepos {
        galaxies: repo.clone(),
        systems: repo.clone(),
        stars: repo.clone(),
        planets: repo.clone(),
        moons: repo.clone(),
        asteroids: repo,
    }
}
