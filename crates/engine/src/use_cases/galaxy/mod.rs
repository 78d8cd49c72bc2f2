//! Galaxy lifecycle use cases.
//!
//! Handles:
//! - Creating a galaxy record from raw input
//! - Populating a galaxy's full tree (systems, stars, planets, moons, asteroids)
//! - Tearing a tree down, children before parents
//! - Repositioning systems after a shape change

use std::sync::Arc;

use galaxyforge_domain::{DomainError, GalaxyId};
use serde::Serialize;

use crate::infrastructure::ports::RepoError;

mod create_galaxy;
mod create_tree;
mod delete_tree;
mod reposition;

pub use create_galaxy::{CreateGalaxy, CreateGalaxyInput};
pub use create_tree::CreateGalaxyTree;
pub use delete_tree::DeleteGalaxyTree;
pub use reposition::RepositionSystems;

/// Container for galaxy use cases.
pub struct GalaxyUseCases {
    pub create: Arc<CreateGalaxy>,
    pub create_tree: Arc<CreateGalaxyTree>,
    pub delete_tree: Arc<DeleteGalaxyTree>,
    pub reposition: Arc<RepositionSystems>,
}

impl GalaxyUseCases {
    pub fn new(
        create: Arc<CreateGalaxy>,
        create_tree: Arc<CreateGalaxyTree>,
        delete_tree: Arc<DeleteGalaxyTree>,
        reposition: Arc<RepositionSystems>,
    ) -> Self {
        Self {
            create,
            create_tree,
            delete_tree,
            reposition,
        }
    }
}

/// Shared error type for galaxy use cases.
#[derive(Debug, thiserror::Error)]
pub enum GalaxyTreeError {
    #[error("Galaxy not found: {0}")]
    GalaxyNotFound(GalaxyId),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Entity counts of one galaxy tree, created or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyTreeSummary {
    pub galaxy_id: GalaxyId,
    pub systems: usize,
    pub stars: usize,
    pub planets: usize,
    pub moons: usize,
    pub asteroids: usize,
}

impl GalaxyTreeSummary {
    pub fn new(galaxy_id: GalaxyId) -> Self {
        Self {
            galaxy_id,
            systems: 0,
            stars: 0,
            planets: 0,
            moons: 0,
            asteroids: 0,
        }
    }

    /// Every entity below the galaxy.
    pub fn bodies(&self) -> usize {
        self.systems + self.stars + self.planets + self.moons + self.asteroids
    }
}
