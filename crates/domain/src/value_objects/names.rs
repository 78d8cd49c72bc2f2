//! Validated name newtypes for celestial entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Trimmed of leading/trailing whitespace
//! - Within the length limits of their entity
//! - Start with an uppercase ASCII letter
//! - Use only letters, digits, single spaces, hyphens and apostrophes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{codes, DomainError};

/// Length limits for galaxy names
const MIN_GALAXY_NAME_LENGTH: usize = 5;
const MAX_GALAXY_NAME_LENGTH: usize = 15;

/// Length limits for every other celestial body
const MIN_CELESTIAL_NAME_LENGTH: usize = 2;
const MAX_CELESTIAL_NAME_LENGTH: usize = 30;

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '\'')
}

/// Checks the shared name format, returning a reason on failure.
fn check_format(name: &str, min: usize, max: usize) -> Result<(), String> {
    let len = name.chars().count();
    if len < min || len > max {
        return Err(format!(
            "must be between {} and {} characters, got {}",
            min, max, len
        ));
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return Err("must start with an uppercase letter".to_string()),
    }

    let mut previous_was_separator = false;
    for c in name.chars().skip(1) {
        if is_separator(c) {
            if previous_was_separator {
                return Err("must not contain consecutive separators".to_string());
            }
            previous_was_separator = true;
        } else if c.is_ascii_alphanumeric() {
            previous_was_separator = false;
        } else {
            return Err(format!("contains invalid character '{}'", c));
        }
    }

    if previous_was_separator {
        return Err("must not end with a separator".to_string());
    }
    Ok(())
}

/// Returns `true` when `name` would be accepted by [`CelestialName::new`].
pub fn is_valid_celestial_name(name: &str) -> bool {
    check_format(name, MIN_CELESTIAL_NAME_LENGTH, MAX_CELESTIAL_NAME_LENGTH).is_ok()
}

// ============================================================================
// GalaxyName
// ============================================================================

/// A validated galaxy name (5-15 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GalaxyName(String);

impl GalaxyName {
    /// Create a new validated galaxy name.
    ///
    /// # Errors
    ///
    /// Returns `DOMAIN.INVALID_NAME` if the trimmed name is not 5-15 characters
    /// or breaks the shared name format.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        check_format(trimmed, MIN_GALAXY_NAME_LENGTH, MAX_GALAXY_NAME_LENGTH)
            .map_err(|reason| DomainError::invalid(codes::INVALID_NAME, "name", reason))?;
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GalaxyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GalaxyName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GalaxyName> for String {
    fn from(name: GalaxyName) -> String {
        name.0
    }
}

// ============================================================================
// CelestialName
// ============================================================================

/// A validated name for a system, star, planet, moon or asteroid (2-30 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CelestialName(String);

impl CelestialName {
    /// Create a new validated celestial name.
    ///
    /// # Errors
    ///
    /// Returns `DOMAIN.INVALID_NAME` if the trimmed name is not 2-30 characters
    /// or breaks the shared name format.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        check_format(trimmed, MIN_CELESTIAL_NAME_LENGTH, MAX_CELESTIAL_NAME_LENGTH)
            .map_err(|reason| DomainError::invalid(codes::INVALID_NAME, "name", reason))?;
        Ok(Self(trimmed.to_string()))
    }

    /// Catalog designation such as `Body-0042`.
    ///
    /// `prefix` must be a capitalised ASCII word; every caller passes a literal.
    pub(crate) fn designation(prefix: &'static str, number: u32) -> Self {
        Self(format!("{}-{:04}", prefix, number % 10_000))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CelestialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CelestialName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CelestialName> for String {
    fn from(name: CelestialName) -> String {
        name.0
    }
}
