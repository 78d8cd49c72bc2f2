//! Galaxy morphology and system-count value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_SYSTEMS_PER_GALAXY;
use crate::error::{codes, DomainError};

/// Morphology of a galaxy, which drives where its systems are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GalaxyShape {
    Spherical,
    ThreeArmSpiral,
    FiveArmSpiral,
    Irregular,
}

impl GalaxyShape {
    pub const ALL: [GalaxyShape; 4] = [
        GalaxyShape::Spherical,
        GalaxyShape::ThreeArmSpiral,
        GalaxyShape::FiveArmSpiral,
        GalaxyShape::Irregular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spherical => "spherical",
            Self::ThreeArmSpiral => "3-arm spiral",
            Self::FiveArmSpiral => "5-arm spiral",
            Self::Irregular => "irregular",
        }
    }

    /// Number of spiral arms, or `None` for non-spiral shapes.
    pub fn arm_count(&self) -> Option<u32> {
        match self {
            Self::ThreeArmSpiral => Some(3),
            Self::FiveArmSpiral => Some(5),
            Self::Spherical | Self::Irregular => None,
        }
    }
}

impl fmt::Display for GalaxyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GalaxyShape {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spherical" => Ok(Self::Spherical),
            "3-arm spiral" => Ok(Self::ThreeArmSpiral),
            "5-arm spiral" => Ok(Self::FiveArmSpiral),
            "irregular" => Ok(Self::Irregular),
            _ => Err(DomainError::invalid(
                codes::INVALID_SHAPE,
                "shape",
                format!("unknown galaxy shape '{}'", s),
            )),
        }
    }
}

impl TryFrom<String> for GalaxyShape {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GalaxyShape> for String {
    fn from(shape: GalaxyShape) -> String {
        shape.as_str().to_string()
    }
}

/// Number of systems in a galaxy, clamped to `[1, MAX_SYSTEMS_PER_GALAXY]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct SystemCount(u32);

impl SystemCount {
    /// Clamp any requested count into the supported range.
    pub fn clamped(requested: i64) -> Self {
        let bounded = requested.clamp(1, i64::from(MAX_SYSTEMS_PER_GALAXY));
        Self(bounded as u32)
    }

    /// Strict constructor for counts that must already be in range.
    pub fn new(count: u32) -> Result<Self, DomainError> {
        if count == 0 || count > MAX_SYSTEMS_PER_GALAXY {
            return Err(DomainError::invalid(
                codes::INVALID_SYSTEM_COUNT,
                "systemCount",
                format!("must be between 1 and {}", MAX_SYSTEMS_PER_GALAXY),
            ));
        }
        Ok(Self(count))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<i64> for SystemCount {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<SystemCount> for u32 {
    fn from(count: SystemCount) -> u32 {
        count.0
    }
}

impl fmt::Display for SystemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
