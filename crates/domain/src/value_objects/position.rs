//! 3-D placement of a system within its galaxy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{codes, DomainError};

/// Cartesian coordinates in galactic units. All components are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
    z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, DomainError> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(DomainError::invalid(
                codes::INVALID_POSITION,
                "position",
                format!("coordinates must be finite, got ({}, {}, {})", x, y, z),
            ));
        }
        Ok(Self { x, y, z })
    }

    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Distance from the galactic centre.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance from the galactic centre in the disk plane.
    pub fn planar_radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}
