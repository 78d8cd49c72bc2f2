//! Aggregate roots of the celestial hierarchy
//!
//! Each aggregate:
//! - Has a unique identity
//! - Validates and derives its physical attributes at creation
//! - Exposes behavior through methods, not public fields
//! - References its parent by ID; parents never hold their children
//!
//! Loading from storage goes through each aggregate's `rehydrate`, which
//! re-runs validation and recomputes every derived quantity.

pub mod asteroid;
pub mod body;
pub mod galaxy;
pub mod moon;
pub mod planet;
pub mod star;
pub mod system;

pub use asteroid::{asteroid_mass, Asteroid, AsteroidRecord, AsteroidSpec};
pub use body::{Physique, ReferenceBody, EARTH, LUNA};
pub use galaxy::Galaxy;
pub use moon::{Moon, MoonRecord, MoonSpec};
pub use planet::{Planet, PlanetRecord, PlanetSpec};
pub use star::{
    neutron_star_radius, schwarzschild_radius, surface_gravity, Star, StarRecord, StarSpec,
};
pub use system::StarSystem;
