//! Orbital slot value objects.
//!
//! Planets and moons sit on whole-number rings; asteroids sit on half rings
//! (`k + 0.5`) so belts interleave with planets instead of sharing their slots.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_ORBITAL_STARTER;
use crate::error::{codes, DomainError};

/// A whole-number orbital ring, always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Ring(u32);

impl Ring {
    pub fn new(ring: u32) -> Result<Self, DomainError> {
        if ring == 0 {
            return Err(DomainError::invalid(
                codes::INVALID_ORBITAL,
                "orbital",
                "ring must be greater than zero",
            ));
        }
        Ok(Self(ring))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Ring {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ring> for u32 {
    fn from(ring: Ring) -> u32 {
        ring.0
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-integer asteroid ring (`0.5`, `1.5`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct HalfRing(u32);

impl HalfRing {
    /// Half ring just outside whole ring `base` (`base + 0.5`).
    pub fn after(base: u32) -> Self {
        Self(base)
    }

    /// Validate a stored ring value.
    pub fn from_value(value: f64) -> Result<Self, DomainError> {
        let base = value - 0.5;
        if !value.is_finite() || base < 0.0 || base.fract() != 0.0 || base > f64::from(u32::MAX) {
            return Err(DomainError::invalid(
                codes::INVALID_ORBITAL,
                "orbital",
                format!("asteroid ring must be a positive half-integer, got {}", value),
            ));
        }
        Ok(Self(base as u32))
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) + 0.5
    }
}

impl TryFrom<f64> for HalfRing {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<HalfRing> for f64 {
    fn from(ring: HalfRing) -> f64 {
        ring.value()
    }
}

impl fmt::Display for HalfRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

/// Orbital capacity consumed by a system's dominant star, `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct OrbitalStarter(u32);

impl OrbitalStarter {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 || value > i64::from(MAX_ORBITAL_STARTER) {
            return Err(DomainError::invalid(
                codes::INVALID_ORBITAL_STARTER,
                "orbitalStarter",
                format!("must be between 1 and {}, got {}", MAX_ORBITAL_STARTER, value),
            ));
        }
        Ok(Self(value as u32))
    }

    /// Saturating constructor used when companions push capacity past the cap.
    pub fn saturating(value: u32) -> Self {
        Self(value.clamp(1, MAX_ORBITAL_STARTER))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for OrbitalStarter {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrbitalStarter> for u32 {
    fn from(starter: OrbitalStarter) -> u32 {
        starter.0
    }
}

impl fmt::Display for OrbitalStarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
