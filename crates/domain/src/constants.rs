//! Physical reference constants and generation limits.
//!
//! SI units throughout: kilograms, metres, metres per second squared, kelvin.

// ── Universal ────────────────────────────────────────────────────────────────

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

// ── Solar reference ──────────────────────────────────────────────────────────

pub const SUN_MASS: f64 = 1.988_92e30;
pub const SUN_RADIUS: f64 = 6.957e8;
/// Surface gravity of the Sun (m/s²).
pub const SUN_GRAVITY: f64 = 274.0;

// ── Terrestrial reference ────────────────────────────────────────────────────

pub const EARTH_MASS: f64 = 5.972_2e24;
pub const EARTH_RADIUS: f64 = 6.371e6;
pub const EARTH_GRAVITY: f64 = 9.806_65;

// ── Lunar reference ──────────────────────────────────────────────────────────

pub const MOON_MASS: f64 = 7.342e22;
pub const MOON_RADIUS: f64 = 1.737_4e6;
pub const MOON_GRAVITY: f64 = 1.62;

// ── Compact objects ──────────────────────────────────────────────────────────

/// Neutron star radius bounds (m).
pub const NEUTRON_STAR_MIN_RADIUS: f64 = 10_000.0;
pub const NEUTRON_STAR_MAX_RADIUS: f64 = 14_000.0;
/// Radius of a canonical 1.4 M☉ neutron star (m).
pub const NEUTRON_STAR_REFERENCE_RADIUS: f64 = 12_000.0;
pub const NEUTRON_STAR_REFERENCE_MASS: f64 = 1.4;

// ── Generation limits ────────────────────────────────────────────────────────

/// Upper bound for systems in one galaxy; larger requests are clamped.
pub const MAX_SYSTEMS_PER_GALAXY: u32 = 1000;

/// Highest integer orbital ring a planet may occupy.
pub const MAX_PLANET_RING: u32 = 8;
/// Highest ring a system's capacity can start from.
pub const MAX_ORBITAL_STARTER: u32 = 8;
/// Most moons a single planet may host.
pub const MAX_MOONS_PER_PLANET: u32 = 5;
/// Moon budget is `MOON_BUDGET_BASE - starter`, capped at `MAX_MOONS_PER_PLANET`.
pub const MOON_BUDGET_BASE: i64 = 6;

/// Stars per ordinary system.
pub const MIN_STARS_PER_SYSTEM: u32 = 1;
pub const MAX_STARS_PER_SYSTEM: u32 = 3;

/// Attempts the name generator makes before falling back.
pub const NAME_GENERATION_ATTEMPTS: u32 = 30;
/// Probability of a catalog-style designation instead of syllables.
pub const SPECIAL_NAME_PROBABILITY: f64 = 0.05;
