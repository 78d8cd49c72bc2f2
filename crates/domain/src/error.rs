//! Unified error types for the domain layer
//!
//! Every validation failure carries a stable machine code (see [`codes`]) and the
//! name of the offending field, so callers can map errors onto their own
//! surfaces without parsing messages.

use thiserror::Error;

/// Machine-readable error codes raised by aggregate factories and value objects.
pub mod codes {
    pub const INVALID_NAME: &str = "DOMAIN.INVALID_NAME";
    pub const INVALID_SHAPE: &str = "DOMAIN.INVALID_SHAPE";
    pub const INVALID_SYSTEM_COUNT: &str = "DOMAIN.INVALID_SYSTEM_COUNT";
    pub const INVALID_POSITION: &str = "DOMAIN.INVALID_POSITION";

    pub const INVALID_STAR_TYPE: &str = "DOMAIN.INVALID_STAR_TYPE";
    pub const INVALID_STAR_CLASS: &str = "DOMAIN.INVALID_STAR_CLASS";
    pub const INVALID_STAR_COLOR: &str = "DOMAIN.INVALID_STAR_COLOR";

    pub const INVALID_PLANET_TYPE: &str = "DOMAIN.INVALID_PLANET_TYPE";
    pub const INVALID_PLANET_SIZE: &str = "DOMAIN.INVALID_PLANET_SIZE";
    pub const INVALID_BIOME: &str = "DOMAIN.INVALID_BIOME";
    pub const INVALID_MOON_SIZE: &str = "DOMAIN.INVALID_MOON_SIZE";
    pub const INVALID_ASTEROID_TYPE: &str = "DOMAIN.INVALID_ASTEROID_TYPE";
    pub const INVALID_ASTEROID_SIZE: &str = "DOMAIN.INVALID_ASTEROID_SIZE";

    pub const INVALID_MASS: &str = "DOMAIN.INVALID_MASS";
    pub const INVALID_RADIUS: &str = "DOMAIN.INVALID_RADIUS";
    pub const INVALID_TEMPERATURE: &str = "DOMAIN.INVALID_TEMPERATURE";
    pub const INVALID_ORBITAL: &str = "DOMAIN.INVALID_ORBITAL";
    pub const INVALID_ORBITAL_STARTER: &str = "DOMAIN.INVALID_ORBITAL_STARTER";
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A field failed validation (format, range, or unknown enumerated value)
    #[error("{code}: invalid {field}: {message}")]
    Invalid {
        code: &'static str,
        field: &'static str,
        message: String,
    },

    /// A supplied value disagrees with the value derived from another field
    #[error("{code}: {field} must be '{expected}' but was '{actual}'")]
    Mismatch {
        code: &'static str,
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// Business rule violation spanning more than one field
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Creates a validation error for a single field.
    ///
    /// # Example
    /// ```ignore
    /// if mass <= 0.0 {
    ///     let reason = "must be positive";
    ///     return Err(DomainError::invalid(codes::INVALID_MASS, "relativeMass", reason));
    /// }
    /// ```
    pub fn invalid(code: &'static str, field: &'static str, msg: impl Into<String>) -> Self {
        Self::Invalid {
            code,
            field,
            message: msg.into(),
        }
    }

    /// Creates a classification-consistency error.
    pub fn mismatch(
        code: &'static str,
        field: &'static str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::Mismatch {
            code,
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Machine code for this error, if it originates from a field check.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { code, .. } | Self::Mismatch { code, .. } => Some(code),
            Self::Constraint(_) => None,
        }
    }

    /// Name of the offending field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { field, .. } | Self::Mismatch { field, .. } => Some(field),
            Self::Constraint(_) => None,
        }
    }
}

/// Rejects non-finite or non-positive numbers.
pub(crate) fn ensure_positive(
    value: f64,
    code: &'static str,
    field: &'static str,
) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::invalid(
            code,
            field,
            format!("must be a positive number, got {}", value),
        ))
    }
}
