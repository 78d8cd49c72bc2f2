//! Celestial name generation with bounded retry.

use crate::constants::{NAME_GENERATION_ATTEMPTS, SPECIAL_NAME_PROBABILITY};
use crate::random::RandomSource;
use crate::value_objects::CelestialName;

const DEFAULT_SYLLABLES: &[&str] = &[
    "ka", "zor", "vel", "tha", "rin", "ae", "lo", "mir", "xen", "dra", "qua", "sol", "ny", "ri",
    "ban", "tor", "el", "is", "um", "pho", "ce", "ly", "gar", "syl", "va", "ne", "ox", "tri", "an",
    "or", "bel", "cor", "dun", "eth", "fal", "hyr", "jo", "kes",
];

const CATALOG_PREFIXES: &[&str] = &["NOVA", "KEP", "HD", "GJ", "PSR", "TOI", "WISE", "XO"];

const FALLBACK_PREFIX: &str = "Body";

/// Produces validated names for any celestial body.
///
/// With probability [`SPECIAL_NAME_PROBABILITY`] a candidate is a catalog
/// designation (`NOVA-042`); otherwise it joins one to four syllables. Each
/// candidate is validated; after [`NAME_GENERATION_ATTEMPTS`] rejected
/// candidates the generator returns a synthetic designation, so it never fails.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    syllables: &'static [&'static str],
    prefixes: &'static [&'static str],
    attempts: u32,
    special_probability: f64,
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self {
            syllables: DEFAULT_SYLLABLES,
            prefixes: CATALOG_PREFIXES,
            attempts: NAME_GENERATION_ATTEMPTS,
            special_probability: SPECIAL_NAME_PROBABILITY,
        }
    }
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the syllable inventory.
    pub fn with_syllables(mut self, syllables: &'static [&'static str]) -> Self {
        self.syllables = syllables;
        self
    }

    /// Override the probability of catalog designations.
    pub fn with_special_probability(mut self, probability: f64) -> Self {
        self.special_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> CelestialName {
        for _ in 0..self.attempts {
            let candidate = if rng.chance(self.special_probability) {
                self.special_candidate(rng)
            } else {
                self.syllable_candidate(rng)
            };
            if let Ok(name) = CelestialName::new(candidate) {
                return name;
            }
        }
        CelestialName::designation(FALLBACK_PREFIX, rng.roll(10_000))
    }

    fn special_candidate<R: RandomSource>(&self, rng: &mut R) -> String {
        let prefix = rng.pick(self.prefixes).copied().unwrap_or("NOVA");
        format!("{}-{:03}", prefix, rng.roll(1_000))
    }

    fn syllable_candidate<R: RandomSource>(&self, rng: &mut R) -> String {
        let count = rng.range_inclusive(1, 4);
        let joined: String = (0..count)
            .filter_map(|_| rng.pick(self.syllables).copied())
            .collect();
        capitalize(&joined)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
