//! Stellar classification tables.
//!
//! One table row per star type. The type fixes the class, the class fixes the
//! color, and the class fixes the sampling ranges, so a `(type, class, color)`
//! triple is always one of the nine rows below.

use crate::error::codes;
use crate::random::RandomSource;

/// How a class obtains its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiusModel {
    /// Sampled uniformly from a relative (solar) radius range.
    Sampled { min: f64, max: f64 },
    /// Event horizon: `2GM / c²`.
    Schwarzschild,
    /// Empirical mass-scaled radius clamped to 10-14 km.
    NeutronStar,
}

/// Sampling ranges and bookkeeping for one stellar class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarProfile {
    pub star_type: StarType,
    pub class: StarClass,
    pub color: StarColor,
    /// Probability of sampling this type; the column sums to 1.0.
    pub weight: f64,
    /// Relative (solar) mass range.
    pub mass: (f64, f64),
    pub radius: RadiusModel,
    /// Surface temperature range in kelvin.
    pub temperature: (f64, f64),
    /// Orbital capacity consumed by a lone star of this class.
    pub orbital_starter: u32,
}

impl StellarProfile {
    /// Black holes and neutron stars never share their system.
    pub fn is_compact(&self) -> bool {
        matches!(self.class, StarClass::BH | StarClass::NS)
    }
}

const STELLAR_TABLE: [StellarProfile; 9] = [
    StellarProfile {
        star_type: StarType::RedDwarf,
        class: StarClass::M,
        color: StarColor::Red,
        weight: 0.33,
        mass: (0.08, 0.45),
        radius: RadiusModel::Sampled { min: 0.1, max: 0.7 },
        temperature: (2_400.0, 3_700.0),
        orbital_starter: 1,
    },
    StellarProfile {
        star_type: StarType::YellowDwarf,
        class: StarClass::G,
        color: StarColor::Yellow,
        weight: 0.25,
        mass: (0.8, 1.04),
        radius: RadiusModel::Sampled {
            min: 0.96,
            max: 1.15,
        },
        temperature: (5_200.0, 6_000.0),
        orbital_starter: 2,
    },
    StellarProfile {
        star_type: StarType::OrangeDwarf,
        class: StarClass::K,
        color: StarColor::Orange,
        weight: 0.15,
        mass: (0.45, 0.8),
        radius: RadiusModel::Sampled {
            min: 0.7,
            max: 0.96,
        },
        temperature: (3_700.0, 5_200.0),
        orbital_starter: 2,
    },
    StellarProfile {
        star_type: StarType::YellowWhiteDwarf,
        class: StarClass::F,
        color: StarColor::YellowWhite,
        weight: 0.10,
        mass: (1.04, 1.4),
        radius: RadiusModel::Sampled {
            min: 1.15,
            max: 1.4,
        },
        temperature: (6_000.0, 7_500.0),
        orbital_starter: 3,
    },
    StellarProfile {
        star_type: StarType::WhiteDwarf,
        class: StarClass::D,
        color: StarColor::White,
        weight: 0.06,
        mass: (0.17, 1.33),
        radius: RadiusModel::Sampled {
            min: 0.008,
            max: 0.02,
        },
        temperature: (8_000.0, 40_000.0),
        orbital_starter: 1,
    },
    StellarProfile {
        star_type: StarType::BlueGiant,
        class: StarClass::B,
        color: StarColor::BlueWhite,
        weight: 0.05,
        mass: (2.1, 16.0),
        radius: RadiusModel::Sampled { min: 1.8, max: 6.6 },
        temperature: (10_000.0, 30_000.0),
        orbital_starter: 5,
    },
    StellarProfile {
        star_type: StarType::BlueSupergiant,
        class: StarClass::O,
        color: StarColor::Blue,
        weight: 0.03,
        mass: (16.0, 90.0),
        radius: RadiusModel::Sampled {
            min: 6.6,
            max: 20.0,
        },
        temperature: (30_000.0, 50_000.0),
        orbital_starter: 7,
    },
    StellarProfile {
        star_type: StarType::NeutronStar,
        class: StarClass::NS,
        color: StarColor::Violet,
        weight: 0.02,
        mass: (1.1, 2.3),
        radius: RadiusModel::NeutronStar,
        temperature: (600_000.0, 1_000_000.0),
        orbital_starter: 4,
    },
    StellarProfile {
        star_type: StarType::BlackHole,
        class: StarClass::BH,
        color: StarColor::Black,
        weight: 0.01,
        mass: (3.0, 50.0),
        radius: RadiusModel::Schwarzschild,
        // Hawking temperatures are far below anything measurable; the surface
        // value is the accretion-free background floor.
        temperature: (2.7, 10.0),
        orbital_starter: 6,
    },
];

/// Every row of the classification table, most common type first.
pub fn stellar_table() -> &'static [StellarProfile] {
    &STELLAR_TABLE
}

/// Sample a star type from the weighted table.
pub fn sample_star_type<R: RandomSource>(rng: &mut R) -> StarType {
    let weights: [(StarType, f64); 9] = STELLAR_TABLE.map(|row| (row.star_type, row.weight));
    rng.pick_weighted(&weights)
        .copied()
        .unwrap_or(StarType::RedDwarf)
}

fn row_for_type(star_type: StarType) -> &'static StellarProfile {
    // The table holds exactly one row per variant.
    let index = match star_type {
        StarType::RedDwarf => 0,
        StarType::YellowDwarf => 1,
        StarType::OrangeDwarf => 2,
        StarType::YellowWhiteDwarf => 3,
        StarType::WhiteDwarf => 4,
        StarType::BlueGiant => 5,
        StarType::BlueSupergiant => 6,
        StarType::NeutronStar => 7,
        StarType::BlackHole => 8,
    };
    &STELLAR_TABLE[index]
}

// ============================================================================
// StarType
// ============================================================================

string_enum! {
    StarType, code = codes::INVALID_STAR_TYPE, field = "starType" {
        RedDwarf => "Red dwarf",
        OrangeDwarf => "Orange dwarf",
        YellowDwarf => "Yellow dwarf",
        YellowWhiteDwarf => "Yellow-white dwarf",
        WhiteDwarf => "White dwarf",
        BlueGiant => "Blue giant",
        BlueSupergiant => "Blue supergiant",
        NeutronStar => "Neutron star",
        BlackHole => "Black hole",
    }
}

impl StarType {
    pub fn profile(&self) -> &'static StellarProfile {
        row_for_type(*self)
    }

    pub fn class(&self) -> StarClass {
        self.profile().class
    }

    pub fn color(&self) -> StarColor {
        self.class().color()
    }

    pub fn is_compact(&self) -> bool {
        self.profile().is_compact()
    }
}

// ============================================================================
// StarClass
// ============================================================================

string_enum! {
    StarClass, code = codes::INVALID_STAR_CLASS, field = "starClass" {
        O => "O",
        B => "B",
        F => "F",
        G => "G",
        K => "K",
        M => "M",
        D => "D",
        NS => "NS",
        BH => "BH",
    }
}

impl StarClass {
    pub fn profile(&self) -> &'static StellarProfile {
        STELLAR_TABLE
            .iter()
            .find(|row| row.class == *self)
            .unwrap_or(&STELLAR_TABLE[0])
    }

    /// The unique star type of this class.
    pub fn star_type(&self) -> StarType {
        self.profile().star_type
    }

    pub fn color(&self) -> StarColor {
        self.profile().color
    }
}

// ============================================================================
// StarColor
// ============================================================================

string_enum! {
    StarColor, code = codes::INVALID_STAR_COLOR, field = "color" {
        Blue => "blue",
        BlueWhite => "blue-white",
        YellowWhite => "yellow-white",
        Yellow => "yellow",
        Orange => "orange",
        Red => "red",
        White => "white",
        Violet => "violet",
        Black => "black",
    }
}

impl StarColor {
    /// The unique class that glows in this color.
    pub fn class(&self) -> StarClass {
        STELLAR_TABLE
            .iter()
            .find(|row| row.color == *self)
            .map(|row| row.class)
            .unwrap_or(StarClass::M)
    }
}
