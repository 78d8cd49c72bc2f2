//! Planet aggregate.
//!
//! Type fixes the allowed sizes and biomes; size fixes the mass and radius
//! ranges; biome fixes the temperature range.

use serde::Serialize;

use super::body::{Physique, EARTH};
use crate::classification::{Biome, PlanetSize, PlanetType};
use crate::error::{codes, DomainError};
use crate::ids::{PlanetId, SystemId};
use crate::random::RandomSource;
use crate::value_objects::{CelestialName, Ring};

/// Optional overrides for [`Planet::create`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetSpec {
    pub planet_type: Option<PlanetType>,
    pub size: Option<PlanetSize>,
    pub biome: Option<Biome>,
    /// Earth masses
    pub relative_mass: Option<f64>,
    /// Earth radii
    pub relative_radius: Option<f64>,
    pub temperature: Option<f64>,
}

/// Persisted planet fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRecord {
    pub id: PlanetId,
    pub system_id: SystemId,
    pub name: String,
    pub planet_type: PlanetType,
    pub size: PlanetSize,
    pub biome: Biome,
    pub orbital: u32,
    pub relative_mass: f64,
    pub relative_radius: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    id: PlanetId,
    system_id: SystemId,
    name: CelestialName,
    planet_type: PlanetType,
    size: PlanetSize,
    biome: Biome,
    orbital: Ring,
    #[serde(flatten)]
    physique: Physique,
}

fn check_compatibility(
    planet_type: PlanetType,
    size: PlanetSize,
    biome: Biome,
) -> Result<(), DomainError> {
    if !planet_type.allowed_sizes().contains(&size) {
        return Err(DomainError::invalid(
            codes::INVALID_PLANET_SIZE,
            "size",
            format!("{} planets cannot be {}", planet_type, size),
        ));
    }
    if !planet_type.allowed_biomes().contains(&biome) {
        return Err(DomainError::invalid(
            codes::INVALID_BIOME,
            "biome",
            format!("{} planets cannot be {}", planet_type, biome),
        ));
    }
    Ok(())
}

impl Planet {
    /// Create a planet on `orbital`, sampling whatever `spec` leaves open.
    pub fn create<R: RandomSource>(
        system_id: SystemId,
        name: CelestialName,
        orbital: Ring,
        spec: PlanetSpec,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        let planet_type = match spec.planet_type {
            Some(planet_type) => planet_type,
            None => {
                // A supplied size or biome may already decide the type.
                let fitting: Vec<PlanetType> = PlanetType::ALL
                    .iter()
                    .copied()
                    .filter(|t| spec.size.map_or(true, |s| t.allowed_sizes().contains(&s)))
                    .filter(|t| spec.biome.map_or(true, |b| t.allowed_biomes().contains(&b)))
                    .collect();
                match fitting.as_slice() {
                    [only] => *only,
                    _ => PlanetType::sample(rng),
                }
            }
        };
        let size = match spec.size {
            Some(size) => size,
            None => rng
                .pick(planet_type.allowed_sizes())
                .copied()
                .unwrap_or(PlanetSize::Large),
        };
        let biome = match spec.biome {
            Some(biome) => biome,
            None => rng
                .pick(planet_type.allowed_biomes())
                .copied()
                .unwrap_or(Biome::Icy),
        };
        check_compatibility(planet_type, size, biome)?;

        let profile = size.profile(planet_type);
        let physique = Physique::sample_or_supplied(
            EARTH,
            profile.mass,
            profile.radius,
            biome.temperature_range(),
            [spec.relative_mass, spec.relative_radius, spec.temperature],
            rng,
        )?;

        Ok(Self {
            id: PlanetId::new(),
            system_id,
            name,
            planet_type,
            size,
            biome,
            orbital,
            physique,
        })
    }

    pub fn rehydrate(record: PlanetRecord) -> Result<Self, DomainError> {
        check_compatibility(record.planet_type, record.size, record.biome)?;
        let physique = Physique::derive(
            EARTH,
            record.relative_mass,
            record.relative_radius,
            record.temperature,
        )?;
        Ok(Self {
            id: record.id,
            system_id: record.system_id,
            name: CelestialName::new(record.name)?,
            planet_type: record.planet_type,
            size: record.size,
            biome: record.biome,
            orbital: Ring::new(record.orbital)?,
            physique,
        })
    }

    pub fn to_record(&self) -> PlanetRecord {
        PlanetRecord {
            id: self.id,
            system_id: self.system_id,
            name: self.name.to_string(),
            planet_type: self.planet_type,
            size: self.size,
            biome: self.biome,
            orbital: self.orbital.get(),
            relative_mass: self.physique.relative_mass,
            relative_radius: self.physique.relative_radius,
            temperature: self.physique.temperature,
        }
    }

    #[inline]
    pub fn id(&self) -> PlanetId {
        self.id
    }

    #[inline]
    pub fn system_id(&self) -> SystemId {
        self.system_id
    }

    #[inline]
    pub fn name(&self) -> &CelestialName {
        &self.name
    }

    #[inline]
    pub fn planet_type(&self) -> PlanetType {
        self.planet_type
    }

    #[inline]
    pub fn size(&self) -> PlanetSize {
        self.size
    }

    #[inline]
    pub fn biome(&self) -> Biome {
        self.biome
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

    pub fn temperature(&self) -> f64 {
        self.physique.temperature
    }
}
