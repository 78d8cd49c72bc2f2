//! Value objects - Immutable objects defined by their attributes

mod names;
mod orbital;
mod position;
mod shape;

pub use names::{is_valid_celestial_name, CelestialName, GalaxyName};
pub use orbital::{HalfRing, OrbitalStarter, Ring};
pub use position::Position;
pub use shape::{GalaxyShape, SystemCount};
