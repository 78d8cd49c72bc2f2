//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Storage of each celestial entity (in-memory today, SQL or graph later)
//! - Transaction scoping through a unit of work
//! - Clock (for testing)
//!
//! Randomness is not a port here: the domain's `RandomSource` is passed
//! straight down the generation call chain.

mod error;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{
    AsteroidRepo, GalaxyRepo, GalaxyRepos, MoonRepo, PlanetRepo, StarRepo, SystemRepo,
    Transaction, UnitOfWork,
};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{
    MockAsteroidRepo, MockGalaxyRepo, MockMoonRepo, MockPlanetRepo, MockStarRepo, MockSystemRepo,
};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
