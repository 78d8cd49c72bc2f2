//! Closed classification enums and their lookup tables.
//!
//! Each enum parses from and displays as its wire string; unknown strings
//! fail with the field's `DOMAIN.INVALID_*` code.

/// Declares a closed enum with string conversions and serde support.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, code = $code:expr, field = $field:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        $crate::error::DomainError::invalid(
                            $code,
                            $field,
                            format!("unknown value '{}'", s),
                        )
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }
    };
}

pub mod planetary;
pub mod stellar;

pub use planetary::{
    AsteroidProfile, AsteroidSize, AsteroidType, Biome, BodyProfile, MoonSize, PlanetSize,
    PlanetType,
};
pub use stellar::{
    sample_star_type, stellar_table, RadiusModel, StarClass, StarColor, StarType,
    StellarProfile,
};
