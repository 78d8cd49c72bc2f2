//! Planet, moon and asteroid classifications.
//!
//! Ranges are relative to the body's reference constant: Earth for planets,
//! the Moon for moons. Temperatures are in kelvin, diameters in kilometres.

use crate::error::codes;
use crate::random::RandomSource;

/// Relative mass and radius sampling ranges for a size class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    pub mass: (f64, f64),
    pub radius: (f64, f64),
}

// ============================================================================
// Planets
// ============================================================================

string_enum! {
    /// Bulk composition of a planet.
    PlanetType, code = codes::INVALID_PLANET_TYPE, field = "planetType" {
        Solid => "solid",
        Gas => "gas",
    }
}

string_enum! {
    PlanetSize, code = codes::INVALID_PLANET_SIZE, field = "size" {
        Small => "small",
        Medium => "medium",
        Large => "large",
        Giant => "giant",
    }
}

string_enum! {
    /// Dominant surface (or cloud-deck) environment.
    Biome, code = codes::INVALID_BIOME, field = "biome" {
        Barren => "barren",
        Desert => "desert",
        Ocean => "ocean",
        Temperate => "temperate",
        Tundra => "tundra",
        Volcanic => "volcanic",
        Toxic => "toxic",
        Gaseous => "gaseous",
        Icy => "icy",
    }
}

const SOLID_SIZES: [PlanetSize; 3] = [PlanetSize::Small, PlanetSize::Medium, PlanetSize::Large];
const GAS_SIZES: [PlanetSize; 2] = [PlanetSize::Large, PlanetSize::Giant];

const SOLID_BIOMES: [Biome; 8] = [
    Biome::Barren,
    Biome::Desert,
    Biome::Ocean,
    Biome::Temperate,
    Biome::Tundra,
    Biome::Volcanic,
    Biome::Toxic,
    Biome::Icy,
];
const GAS_BIOMES: [Biome; 2] = [Biome::Gaseous, Biome::Icy];

const PLANET_TYPE_WEIGHTS: [(PlanetType, f64); 2] =
    [(PlanetType::Solid, 0.6), (PlanetType::Gas, 0.4)];

impl PlanetType {
    pub fn sample<R: RandomSource>(rng: &mut R) -> Self {
        rng.pick_weighted(&PLANET_TYPE_WEIGHTS)
            .copied()
            .unwrap_or(PlanetType::Solid)
    }

    pub fn allowed_sizes(&self) -> &'static [PlanetSize] {
        match self {
            Self::Solid => &SOLID_SIZES,
            Self::Gas => &GAS_SIZES,
        }
    }

    pub fn allowed_biomes(&self) -> &'static [Biome] {
        match self {
            Self::Solid => &SOLID_BIOMES,
            Self::Gas => &GAS_BIOMES,
        }
    }
}

impl PlanetSize {
    /// Earth-relative ranges. Large gas planets are ice giants, not super-Earths.
    pub fn profile(&self, planet_type: PlanetType) -> BodyProfile {
        match (self, planet_type) {
            (Self::Small, _) => BodyProfile {
                mass: (0.05, 0.5),
                radius: (0.3, 0.8),
            },
            (Self::Medium, _) => BodyProfile {
                mass: (0.5, 2.0),
                radius: (0.8, 1.3),
            },
            (Self::Large, PlanetType::Solid) => BodyProfile {
                mass: (2.0, 10.0),
                radius: (1.3, 2.0),
            },
            (Self::Large, PlanetType::Gas) => BodyProfile {
                mass: (10.0, 50.0),
                radius: (3.0, 6.0),
            },
            (Self::Giant, _) => BodyProfile {
                mass: (50.0, 4_000.0),
                radius: (6.0, 15.0),
            },
        }
    }
}

impl Biome {
    pub fn temperature_range(&self) -> (f64, f64) {
        match self {
            Self::Barren => (100.0, 700.0),
            Self::Desert => (300.0, 450.0),
            Self::Ocean => (273.0, 320.0),
            Self::Temperate => (260.0, 310.0),
            Self::Tundra => (180.0, 260.0),
            Self::Volcanic => (600.0, 1_500.0),
            Self::Toxic => (400.0, 750.0),
            Self::Gaseous => (70.0, 200.0),
            Self::Icy => (40.0, 120.0),
        }
    }
}

// ============================================================================
// Moons
// ============================================================================

string_enum! {
    MoonSize, code = codes::INVALID_MOON_SIZE, field = "size" {
        Dwarf => "dwarf",
        Medium => "medium",
        Giant => "giant",
    }
}

const MOON_SIZE_WEIGHTS: [(MoonSize, f64); 3] = [
    (MoonSize::Dwarf, 0.6),
    (MoonSize::Medium, 0.3),
    (MoonSize::Giant, 0.1),
];

/// Surface temperature range for any moon (K).
pub const MOON_TEMPERATURE_RANGE: (f64, f64) = (40.0, 400.0);

impl MoonSize {
    pub fn sample<R: RandomSource>(rng: &mut R) -> Self {
        rng.pick_weighted(&MOON_SIZE_WEIGHTS)
            .copied()
            .unwrap_or(MoonSize::Dwarf)
    }

    /// Moon-relative ranges.
    pub fn profile(&self) -> BodyProfile {
        match self {
            Self::Dwarf => BodyProfile {
                mass: (0.001, 0.1),
                radius: (0.05, 0.4),
            },
            Self::Medium => BodyProfile {
                mass: (0.1, 1.0),
                radius: (0.4, 1.0),
            },
            Self::Giant => BodyProfile {
                mass: (1.0, 2.5),
                radius: (1.0, 1.6),
            },
        }
    }
}

// ============================================================================
// Asteroids
// ============================================================================

string_enum! {
    /// Spectral family of an asteroid, which fixes its bulk density.
    AsteroidType, code = codes::INVALID_ASTEROID_TYPE, field = "asteroidType" {
        Carbonaceous => "carbonaceous",
        Silicaceous => "silicaceous",
        Metallic => "metallic",
        Icy => "icy",
    }
}

string_enum! {
    AsteroidSize, code = codes::INVALID_ASTEROID_SIZE, field = "size" {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

/// Sampling weight and bulk density of an asteroid family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidProfile {
    pub weight: f64,
    /// kg/m³
    pub density: f64,
}

const ASTEROID_TYPE_WEIGHTS: [(AsteroidType, f64); 4] = [
    (AsteroidType::Carbonaceous, 0.6),
    (AsteroidType::Silicaceous, 0.2),
    (AsteroidType::Icy, 0.12),
    (AsteroidType::Metallic, 0.08),
];

const ASTEROID_SIZE_WEIGHTS: [(AsteroidSize, f64); 3] = [
    (AsteroidSize::Small, 0.7),
    (AsteroidSize::Medium, 0.25),
    (AsteroidSize::Large, 0.05),
];

impl AsteroidType {
    pub fn sample<R: RandomSource>(rng: &mut R) -> Self {
        rng.pick_weighted(&ASTEROID_TYPE_WEIGHTS)
            .copied()
            .unwrap_or(AsteroidType::Carbonaceous)
    }

    pub fn profile(&self) -> AsteroidProfile {
        let weight = ASTEROID_TYPE_WEIGHTS
            .iter()
            .find(|(t, _)| t == self)
            .map(|(_, w)| *w)
            .unwrap_or(0.0);
        let density = match self {
            Self::Carbonaceous => 1_380.0,
            Self::Silicaceous => 2_710.0,
            Self::Metallic => 5_320.0,
            Self::Icy => 1_000.0,
        };
        AsteroidProfile { weight, density }
    }
}

impl AsteroidSize {
    pub fn sample<R: RandomSource>(rng: &mut R) -> Self {
        rng.pick_weighted(&ASTEROID_SIZE_WEIGHTS)
            .copied()
            .unwrap_or(AsteroidSize::Small)
    }

    /// Diameter range in kilometres.
    pub fn diameter_range(&self) -> (f64, f64) {
        match self {
            Self::Small => (0.01, 1.0),
            Self::Medium => (1.0, 50.0),
            Self::Large => (50.0, 950.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::TestRng;

    #[test]
    fn planet_strings_round_trip() {
        for t in PlanetType::ALL {
            assert_eq!(t.to_string().parse::<PlanetType>(), Ok(*t));
        }
        for b in Biome::ALL {
            assert_eq!(b.as_str().parse::<Biome>(), Ok(*b));
        }
    }

    #[test]
    fn unknown_biome_reports_field() {
        let err = "lava".parse::<Biome>().unwrap_err();
        assert_eq!(err.code(), Some(codes::INVALID_BIOME));
        assert_eq!(err.field(), Some("biome"));
    }

    #[test]
    fn gas_planets_are_never_small() {
        assert!(!PlanetType::Gas.allowed_sizes().contains(&PlanetSize::Small));
        assert!(!PlanetType::Solid.allowed_sizes().contains(&PlanetSize::Giant));
        assert!(!PlanetType::Solid.allowed_biomes().contains(&Biome::Gaseous));
        assert!(PlanetType::Gas.allowed_biomes().contains(&Biome::Gaseous));
    }

    #[test]
    fn profiles_have_ordered_ranges() {
        for t in PlanetType::ALL {
            for size in t.allowed_sizes() {
                let p = size.profile(*t);
                assert!(p.mass.0 > 0.0 && p.mass.0 < p.mass.1);
                assert!(p.radius.0 > 0.0 && p.radius.0 < p.radius.1);
            }
        }
        for size in MoonSize::ALL {
            let p = size.profile();
            assert!(p.mass.0 > 0.0 && p.mass.0 < p.mass.1);
        }
        for b in Biome::ALL {
            let (lo, hi) = b.temperature_range();
            assert!(lo > 0.0 && lo < hi);
        }
    }

    #[test]
    fn asteroid_weights_sum_to_one() {
        let total: f64 = AsteroidType::ALL.iter().map(|t| t.profile().weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn samplers_return_known_variants() {
        let mut rng = TestRng::seeded(11);
        for _ in 0..200 {
            assert!(PlanetType::ALL.contains(&PlanetType::sample(&mut rng)));
            assert!(MoonSize::ALL.contains(&MoonSize::sample(&mut rng)));
            assert!(AsteroidType::ALL.contains(&AsteroidType::sample(&mut rng)));
            assert!(AsteroidSize::ALL.contains(&AsteroidSize::sample(&mut rng)));
        }
    }
}
