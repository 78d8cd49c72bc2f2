//! Celestial domain model and procedural generation.
//!
//! Pure synchronous code: no I/O, no clock, no global randomness. Every
//! sampler takes a [`RandomSource`], so a seeded source reproduces a galaxy.

pub mod aggregates;
pub mod classification;
pub mod constants;
pub mod error;
pub mod generation;
pub mod ids;
pub mod random;
pub mod value_objects;

pub use aggregates::{
    Asteroid, AsteroidRecord, AsteroidSpec, Galaxy, Moon, MoonRecord, MoonSpec, Physique, Planet,
    PlanetRecord, PlanetSpec, Star, StarRecord, StarSpec, StarSystem,
};
pub use classification::{
    AsteroidSize, AsteroidType, Biome, MoonSize, PlanetSize, PlanetType, StarClass, StarColor,
    StarType,
};
pub use error::{codes, DomainError};
pub use generation::{
    arrange_stars, generate_system_stars, position_system, NameGenerator, OrbitalPlan,
    OrbitalSlotAllocator, PlanetSlot,
};
pub use ids::{AsteroidId, GalaxyId, MoonId, PlanetId, StarId, SystemId, UserId};
pub use random::RandomSource;
pub use value_objects::{
    CelestialName, GalaxyName, GalaxyShape, HalfRing, OrbitalStarter, Position, Ring, SystemCount,
};
