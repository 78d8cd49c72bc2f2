//! Procedural generation: names, positions, star groups and orbital slots.

mod names;
mod orbital;
mod positioner;
mod stars;

pub use names::NameGenerator;
pub use orbital::{OrbitalPlan, OrbitalSlotAllocator, PlanetSlot, SlotAssignment, SlotKind};
pub use positioner::{arm_index, arm_offset, position_system};
pub use stars::{arrange_stars, generate_system_stars, sample_companion_type, COMPANION_ORBITAL};
