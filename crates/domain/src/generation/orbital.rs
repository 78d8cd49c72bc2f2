//! Orbital slot allocation.
//!
//! A system's population is bounded by its main star's orbital starter `s`:
//!
//! - planets: `0..=max(0, 9 - s)` of them on rings `s, s+1, ...`, never past 8
//! - asteroids: same cap, on half rings `s + 0.5, s + 1.5, ...`, never past 8.5
//! - moons per planet: `0..=min(5, 6 - s)` on local rings `1..=5`
//!
//! Slots are handed out as arithmetic progressions, so two bodies of the same
//! kind can never share a ring.

use serde::Serialize;

use crate::constants::{MAX_MOONS_PER_PLANET, MAX_PLANET_RING, MOON_BUDGET_BASE};
use crate::random::RandomSource;
use crate::value_objects::{HalfRing, OrbitalStarter, Ring};

/// Kind of body occupying a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Planet,
    Asteroid,
    Moon,
}

/// One planet slot together with the local rings of its moons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSlot {
    ring: Ring,
    moon_rings: Vec<Ring>,
}

impl PlanetSlot {
    pub fn ring(&self) -> Ring {
        self.ring
    }

    pub fn moon_rings(&self) -> &[Ring] {
        &self.moon_rings
    }
}

/// A single `(kind, ring)` assignment, flattened for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotAssignment {
    pub kind: SlotKind,
    pub ring: f64,
}

/// The collision-free layout of one system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalPlan {
    starter: OrbitalStarter,
    planets: Vec<PlanetSlot>,
    asteroids: Vec<HalfRing>,
}

impl OrbitalPlan {
    pub fn starter(&self) -> OrbitalStarter {
        self.starter
    }

    pub fn planets(&self) -> &[PlanetSlot] {
        &self.planets
    }

    pub fn asteroids(&self) -> &[HalfRing] {
        &self.asteroids
    }

    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(|p| p.moon_rings.len()).sum()
    }

    /// Every planet and asteroid slot, planets first. Moon rings are local to
    /// their planet and are not included.
    pub fn assignments(&self) -> Vec<SlotAssignment> {
        let planets = self.planets.iter().map(|p| SlotAssignment {
            kind: SlotKind::Planet,
            ring: f64::from(p.ring.get()),
        });
        let asteroids = self.asteroids.iter().map(|a| SlotAssignment {
            kind: SlotKind::Asteroid,
            ring: a.value(),
        });
        planets.chain(asteroids).collect()
    }
}

/// Bounds and assigns the planet, asteroid and moon slots of one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitalSlotAllocator {
    starter: OrbitalStarter,
}

impl OrbitalSlotAllocator {
    pub fn new(starter: OrbitalStarter) -> Self {
        Self { starter }
    }

    /// Largest planet count the starter allows: `max(0, 9 - s)`.
    pub fn max_planets(&self) -> u32 {
        (MAX_PLANET_RING + 1).saturating_sub(self.starter.get())
    }

    /// Asteroids share the planet cap.
    pub fn max_asteroids(&self) -> u32 {
        self.max_planets()
    }

    /// Largest moon count per planet: `min(5, 6 - s)`, floored at 0.
    pub fn max_moons(&self) -> u32 {
        let budget = MOON_BUDGET_BASE - i64::from(self.starter.get());
        budget.clamp(0, i64::from(MAX_MOONS_PER_PLANET)) as u32
    }

    /// Rings for `count` planets, stopping before ring 8 is exceeded.
    pub fn planet_rings(&self, count: u32) -> Vec<Ring> {
        let s = self.starter.get();
        (0..count)
            .map(|p| s + p)
            .take_while(|ring| *ring <= MAX_PLANET_RING)
            .filter_map(|ring| Ring::new(ring).ok())
            .collect()
    }

    /// Half rings for `count` asteroids, stopping before 8.5 is exceeded.
    pub fn asteroid_rings(&self, count: u32) -> Vec<HalfRing> {
        let s = self.starter.get();
        (0..count)
            .map(|a| s + a)
            .take_while(|base| *base <= MAX_PLANET_RING)
            .map(HalfRing::after)
            .collect()
    }

    /// Local moon rings `1..=count`, capped at the moon budget.
    pub fn moon_rings(&self, count: u32) -> Vec<Ring> {
        (1..=count.min(self.max_moons()))
            .filter_map(|ring| Ring::new(ring).ok())
            .collect()
    }

    /// Draws counts uniformly within the bounds and lays out every slot.
    pub fn allocate<R: RandomSource>(&self, rng: &mut R) -> OrbitalPlan {
        let planet_count = rng.range_inclusive(0, self.max_planets());
        let planets = self
            .planet_rings(planet_count)
            .into_iter()
            .map(|ring| {
                let moon_count = rng.range_inclusive(0, self.max_moons());
                PlanetSlot {
                    ring,
                    moon_rings: self.moon_rings(moon_count),
                }
            })
            .collect();

        let asteroid_count = rng.range_inclusive(0, self.max_asteroids());
        let asteroids = self.asteroid_rings(asteroid_count);

        OrbitalPlan {
            starter: self.starter,
            planets,
            asteroids,
        }
    }
}
