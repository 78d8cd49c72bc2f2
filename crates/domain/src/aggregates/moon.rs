//! Moon aggregate. Same derivation as a planet, scaled to lunar constants.

use serde::Serialize;

use super::body::{Physique, LUNA};
use crate::classification::planetary::MOON_TEMPERATURE_RANGE;
use crate::classification::MoonSize;
use crate::error::DomainError;
use crate::ids::{MoonId, PlanetId};
use crate::random::RandomSource;
use crate::value_objects::{CelestialName, Ring};

/// Optional overrides for [`Moon::create`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoonSpec {
    pub size: Option<MoonSize>,
    /// Lunar masses
    pub relative_mass: Option<f64>,
    /// Lunar radii
    pub relative_radius: Option<f64>,
    pub temperature: Option<f64>,
}

/// Persisted moon fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonRecord {
    pub id: MoonId,
    pub planet_id: PlanetId,
    pub name: String,
    pub size: MoonSize,
    pub orbital: u32,
    pub relative_mass: f64,
    pub relative_radius: f64,
    pub temperature: f64,
}

/// A moon. Its orbital ring is local to the parent planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    id: MoonId,
    planet_id: PlanetId,
    name: CelestialName,
    size: MoonSize,
    orbital: Ring,
    #[serde(flatten)]
    physique: Physique,
}

impl Moon {
    pub fn create<R: RandomSource>(
        planet_id: PlanetId,
        name: CelestialName,
        orbital: Ring,
        spec: MoonSpec,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        let size = spec.size.unwrap_or_else(|| MoonSize::sample(rng));
        let profile = size.profile();
        let physique = Physique::sample_or_supplied(
            LUNA,
            profile.mass,
            profile.radius,
            MOON_TEMPERATURE_RANGE,
            [spec.relative_mass, spec.relative_radius, spec.temperature],
            rng,
        )?;

        Ok(Self {
            id: MoonId::new(),
            planet_id,
            name,
            size,
            orbital,
            physique,
        })
    }

    pub fn rehydrate(record: MoonRecord) -> Result<Self, DomainError> {
        let physique = Physique::derive(
            LUNA,
            record.relative_mass,
            record.relative_radius,
            record.temperature,
        )?;
        Ok(Self {
            id: record.id,
            planet_id: record.planet_id,
            name: CelestialName::new(record.name)?,
            size: record.size,
            orbital: Ring::new(record.orbital)?,
            physique,
        })
    }

    pub fn to_record(&self) -> MoonRecord {
        MoonRecord {
            id: self.id,
            planet_id: self.planet_id,
            name: self.name.to_string(),
            size: self.size,
            orbital: self.orbital.get(),
            relative_mass: self.physique.relative_mass,
            relative_radius: self.physique.relative_radius,
            temperature: self.physique.temperature,
        }
    }

    #[inline]
    pub fn id(&self) -> MoonId {
        self.id
    }

    #[inline]
    pub fn planet_id(&self) -> PlanetId {
        self.planet_id
    }

    #[inline]
    pub fn name(&self) -> &CelestialName {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> MoonSize {
        self.size
    }

    #[inline]
    pub fn orbital(&self) -> Ring {
        self.orbital
    }

    #[inline]
    pub fn physique(&self) -> &Physique {
        &self.physique
    }

    pub fn gravity(&self) -> f64 {
        self.physique.gravity
    }
}
