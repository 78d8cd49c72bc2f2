//! Shared mass/radius/gravity derivation for planets and moons.

use serde::Serialize;

use crate::constants::{
    EARTH_GRAVITY, EARTH_MASS, EARTH_RADIUS, MOON_GRAVITY, MOON_MASS, MOON_RADIUS,
};
use crate::error::{codes, ensure_positive, DomainError};
use crate::random::RandomSource;

/// Reference body that relative quantities are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBody {
    pub mass: f64,
    pub radius: f64,
    pub gravity: f64,
}

pub const EARTH: ReferenceBody = ReferenceBody {
    mass: EARTH_MASS,
    radius: EARTH_RADIUS,
    gravity: EARTH_GRAVITY,
};

pub const LUNA: ReferenceBody = ReferenceBody {
    mass: MOON_MASS,
    radius: MOON_RADIUS,
    gravity: MOON_GRAVITY,
};

/// Relative and absolute bulk quantities of a body.
///
/// `gravity == reference.gravity * relative_mass / relative_radius²`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Physique {
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub temperature: f64,
}

impl Physique {
    /// Validate supplied values and derive the rest.
    pub fn derive(
        reference: ReferenceBody,
        relative_mass: f64,
        relative_radius: f64,
        temperature: f64,
    ) -> Result<Self, DomainError> {
        let relative_mass = ensure_positive(relative_mass, codes::INVALID_MASS, "relativeMass")?;
        let relative_radius =
            ensure_positive(relative_radius, codes::INVALID_RADIUS, "relativeRadius")?;
        let temperature = ensure_positive(temperature, codes::INVALID_TEMPERATURE, "temperature")?;
        Ok(Self {
            relative_mass,
            absolute_mass: relative_mass * reference.mass,
            relative_radius,
            absolute_radius: relative_radius * reference.radius,
            gravity: reference.gravity * relative_mass / (relative_radius * relative_radius),
            temperature,
        })
    }

    /// Fill in missing values from the given ranges, then derive.
    pub fn sample_or_supplied<R: RandomSource>(
        reference: ReferenceBody,
        mass: (f64, f64),
        radius: (f64, f64),
        temperature: (f64, f64),
        supplied: [Option<f64>; 3],
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        let [m, r, t] = supplied;
        let relative_mass = m.unwrap_or_else(|| rng.range_f64(mass.0, mass.1));
        let relative_radius = r.unwrap_or_else(|| rng.range_f64(radius.0, radius.1));
        let temperature = t.unwrap_or_else(|| rng.range_f64(temperature.0, temperature.1));
        Self::derive(reference, relative_mass, relative_radius, temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_is_one_g() {
        let p = Physique::derive(EARTH, 1.0, 1.0, 288.0).expect("valid");
        assert_eq!(p.gravity, EARTH_GRAVITY);
        assert_eq!(p.absolute_mass, EARTH_MASS);
        assert_eq!(p.absolute_radius, EARTH_RADIUS);
    }

    #[test]
    fn gravity_follows_inverse_square() {
        let p = Physique::derive(LUNA, 2.0, 2.0, 100.0).expect("valid");
        assert!((p.gravity - MOON_GRAVITY / 2.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let err = Physique::derive(EARTH, 1.0, 0.0, 288.0).unwrap_err();
        assert_eq!(err.code(), Some(codes::INVALID_RADIUS));
        let err = Physique::derive(EARTH, 1.0, 1.0, f64::NAN).unwrap_err();
        assert_eq!(err.code(), Some(codes::INVALID_TEMPERATURE));
    }
}
