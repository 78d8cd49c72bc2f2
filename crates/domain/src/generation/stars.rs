//! Star group generation for one system.
//!
//! A system holds one to three stars. Black holes and neutron stars always
//! stand alone. Otherwise the most massive star is main at orbital 0 and the
//! rest are companions at orbital 1; each companion consumes one more unit of
//! the main star's orbital starter so planets begin outside the companions.

use std::cmp::Ordering;

use crate::aggregates::{Star, StarSpec};
use crate::classification::{stellar_table, StarType};
use crate::constants::{MAX_STARS_PER_SYSTEM, MIN_STARS_PER_SYSTEM};
use crate::error::DomainError;
use crate::ids::SystemId;
use crate::random::RandomSource;
use crate::value_objects::OrbitalStarter;

use super::names::NameGenerator;

/// Orbital ring shared by all companion stars.
pub const COMPANION_ORBITAL: u32 = 1;

/// Sample from the non-compact rows, re-weighted.
pub fn sample_companion_type<R: RandomSource>(rng: &mut R) -> StarType {
    let weights: Vec<(StarType, f64)> = stellar_table()
        .iter()
        .filter(|row| !row.is_compact())
        .map(|row| (row.star_type, row.weight))
        .collect();
    rng.pick_weighted(&weights)
        .copied()
        .unwrap_or(StarType::RedDwarf)
}

/// Order stars by mass, promote the heaviest to main and demote the rest.
///
/// # Errors
///
/// A constraint violation if `stars` is empty or mixes a compact object with
/// other stars.
pub fn arrange_stars(mut stars: Vec<Star>) -> Result<Vec<Star>, DomainError> {
    if stars.is_empty() {
        return Err(DomainError::constraint("a system needs at least one star"));
    }
    if stars.len() > 1 && stars.iter().any(Star::is_compact) {
        return Err(DomainError::constraint(
            "black holes and neutron stars cannot share their system",
        ));
    }

    stars.sort_by(|a, b| {
        b.relative_mass()
            .partial_cmp(&a.relative_mass())
            .unwrap_or(Ordering::Equal)
    });

    let companions = (stars.len() - 1) as u32;
    for (index, star) in stars.iter_mut().enumerate() {
        if index == 0 {
            star.mark_main();
            let base = star.star_type().profile().orbital_starter;
            star.set_orbital_starter(OrbitalStarter::saturating(base + companions));
        } else {
            star.mark_companion(COMPANION_ORBITAL)?;
        }
    }
    Ok(stars)
}

/// Generate and arrange the stars of one system. The main star comes first.
pub fn generate_system_stars<R: RandomSource>(
    system_id: SystemId,
    names: &NameGenerator,
    rng: &mut R,
) -> Result<Vec<Star>, DomainError> {
    let first = Star::create(system_id, names.generate(rng), StarSpec::default(), rng)?;
    if first.is_compact() {
        return arrange_stars(vec![first]);
    }

    let count = rng.range_inclusive(MIN_STARS_PER_SYSTEM, MAX_STARS_PER_SYSTEM);
    let mut stars = Vec::with_capacity(count as usize);
    stars.push(first);
    for _ in 1..count {
        let spec = StarSpec::of_type(sample_companion_type(rng));
        stars.push(Star::create(system_id, names.generate(rng), spec, rng)?);
    }
    arrange_stars(stars)
}
