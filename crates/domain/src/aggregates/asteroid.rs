//! Asteroid aggregate.
//!
//! Asteroids sit on half rings between the planets. Mass follows from the
//! family's bulk density and a spherical volume of the sampled diameter.

use serde::Serialize;
use std::f64::consts::PI;

use crate::classification::{AsteroidSize, AsteroidType};
use crate::error::{codes, ensure_positive, DomainError};
use crate::ids::{AsteroidId, SystemId};
use crate::random::RandomSource;
use crate::value_objects::{CelestialName, HalfRing};

/// Optional overrides for [`Asteroid::create`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsteroidSpec {
    pub asteroid_type: Option<AsteroidType>,
    pub size: Option<AsteroidSize>,
    /// Kilometres
    pub diameter: Option<f64>,
}

/// Persisted asteroid fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidRecord {
    pub id: AsteroidId,
    pub system_id: SystemId,
    pub name: String,
    pub asteroid_type: AsteroidType,
    pub size: AsteroidSize,
    pub orbital: f64,
    pub diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asteroid {
    id: AsteroidId,
    system_id: SystemId,
    name: CelestialName,
    asteroid_type: AsteroidType,
    size: AsteroidSize,
    orbital: HalfRing,
    /// km
    diameter: f64,
    /// kg
    mass: f64,
}

/// Mass in kilograms of a sphere of `diameter_km` at `density` kg/m³.
pub fn asteroid_mass(diameter_km: f64, density: f64) -> f64 {
    let radius_m = diameter_km * 1_000.0 / 2.0;
    density * (4.0 / 3.0) * PI * radius_m.powi(3)
}

impl Asteroid {
    pub fn create<R: RandomSource>(
        system_id: SystemId,
        name: CelestialName,
        orbital: HalfRing,
        spec: AsteroidSpec,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        let asteroid_type = spec
            .asteroid_type
            .unwrap_or_else(|| AsteroidType::sample(rng));
        let size = spec.size.unwrap_or_else(|| AsteroidSize::sample(rng));
        let diameter = match spec.diameter {
            Some(d) => d,
            None => {
                let (min, max) = size.diameter_range();
                rng.range_f64(min, max)
            }
        };
        Self::assemble(
            AsteroidId::new(),
            system_id,
            name,
            asteroid_type,
            size,
            orbital,
            diameter,
        )
    }

    pub fn rehydrate(record: AsteroidRecord) -> Result<Self, DomainError> {
        Self::assemble(
            record.id,
            record.system_id,
            CelestialName::new(record.name)?,
            record.asteroid_type,
            record.size,
            HalfRing::from_value(record.orbital)?,
            record.diameter,
        )
    }

    fn assemble(
        id: AsteroidId,
        system_id: SystemId,
        name: CelestialName,
        asteroid_type: AsteroidType,
        size: AsteroidSize,
        orbital: HalfRing,
        diameter: f64,
    ) -> Result<Self, DomainError> {
        let diameter = ensure_positive(diameter, codes::INVALID_ASTEROID_SIZE, "diameter")?;
        let (min, max) = size.diameter_range();
        if diameter < min || diameter > max {
            return Err(DomainError::invalid(
                codes::INVALID_ASTEROID_SIZE,
                "diameter",
                format!("{} asteroids span {}-{} km, got {}", size, min, max, diameter),
            ));
        }
        Ok(Self {
            id,
            system_id,
            name,
            asteroid_type,
            size,
            orbital,
            diameter,
            mass: asteroid_mass(diameter, asteroid_type.profile().density),
        })
    }

    pub fn to_record(&self) -> AsteroidRecord {
        AsteroidRecord {
            id: self.id,
            system_id: self.system_id,
            name: self.name.to_string(),
            asteroid_type: self.asteroid_type,
            size: self.size,
            orbital: self.orbital.value(),
            diameter: self.diameter,
        }
    }

    #[inline]
    pub fn id(&self) -> AsteroidId {
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
    pub fn asteroid_type(&self) -> AsteroidType {
        self.asteroid_type
    }

    #[inline]
    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    #[inline]
    pub fn orbital(&self) -> HalfRing {
        self.orbital
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::TestRng;

    fn name() -> CelestialName {
        CelestialName::new("Ceres").expect("valid name")
    }

    #[test]
    fn mass_of_one_km_water_ice_ball() {
        let m = asteroid_mass(1.0, 1_000.0);
        let expected = 1_000.0 * 4.0 / 3.0 * PI * 500.0_f64.powi(3);
        assert!((m - expected).abs() < 1.0);
    }

    #[test]
    fn sampled_diameters_follow_size_class() {
        let mut rng = TestRng::seeded(41);
        for _ in 0..200 {
            let asteroid = Asteroid::create(
                SystemId::new(),
                name(),
                HalfRing::after(2),
                AsteroidSpec::default(),
                &mut rng,
            )
            .expect("valid asteroid");
            let (min, max) = asteroid.size().diameter_range();
            assert!(asteroid.diameter() >= min && asteroid.diameter() <= max);
            assert!(asteroid.mass() > 0.0);
            assert_eq!(asteroid.orbital().value(), 2.5);
        }
    }

    #[test]
    fn metallic_is_denser_than_icy() {
        let mut rng = TestRng::seeded(42);
        let make = |t: AsteroidType, rng: &mut TestRng| {
            Asteroid::create(
                SystemId::new(),
                name(),
                HalfRing::after(1),
                AsteroidSpec {
                    asteroid_type: Some(t),
                    size: Some(AsteroidSize::Medium),
                    diameter: Some(10.0),
                },
                rng,
            )
            .expect("valid asteroid")
        };
        let metal = make(AsteroidType::Metallic, &mut rng);
        let ice = make(AsteroidType::Icy, &mut rng);
        assert!(metal.mass() > ice.mass());
    }

    #[test]
    fn diameter_outside_size_class_is_rejected() {
        let mut rng = TestRng::seeded(43);
        let spec = AsteroidSpec {
            size: Some(AsteroidSize::Small),
            diameter: Some(100.0),
            ..AsteroidSpec::default()
        };
        let err = Asteroid::create(SystemId::new(), name(), HalfRing::after(1), spec, &mut rng)
            .unwrap_err();
        assert_eq!(err.code(), Some(codes::INVALID_ASTEROID_SIZE));
    }

    #[test]
    fn rehydrate_rejects_whole_ring() {
        let mut rng = TestRng::seeded(44);
        let asteroid = Asteroid::create(
            SystemId::new(),
            name(),
            HalfRing::after(3),
            AsteroidSpec::default(),
            &mut rng,
        )
        .expect("valid asteroid");
        let mut record = asteroid.to_record();
        record.orbital = 4.0;
        let err = Asteroid::rehydrate(record).unwrap_err();
        assert_eq!(err.code(), Some(codes::INVALID_ORBITAL));
    }
}
