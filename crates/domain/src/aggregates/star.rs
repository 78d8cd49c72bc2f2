//! Star aggregate - stellar classification and physical derivation
//!
//! A star's type fixes its class and color. Mass and temperature are drawn
//! from the class's ranges unless supplied; radius is sampled for ordinary
//! stars and derived from mass for black holes and neutron stars. Gravity is
//! always derived, never stored on its own.

use serde::Serialize;

use crate::classification::{sample_star_type, RadiusModel, StarClass, StarColor, StarType};
use crate::constants::{
    GRAVITATIONAL_CONSTANT, NEUTRON_STAR_MAX_RADIUS, NEUTRON_STAR_MIN_RADIUS,
    NEUTRON_STAR_REFERENCE_MASS, NEUTRON_STAR_REFERENCE_RADIUS, SPEED_OF_LIGHT, SUN_GRAVITY,
    SUN_MASS, SUN_RADIUS,
};
use crate::error::{codes, ensure_positive, DomainError};
use crate::ids::{StarId, SystemId};
use crate::random::RandomSource;
use crate::value_objects::{CelestialName, OrbitalStarter};

/// Optional overrides for [`Star::create`]. Anything left `None` is derived
/// or sampled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarSpec {
    pub star_type: Option<StarType>,
    pub star_class: Option<StarClass>,
    pub color: Option<StarColor>,
    /// Solar masses
    pub relative_mass: Option<f64>,
    /// Solar radii; ignored for black holes and neutron stars
    pub relative_radius: Option<f64>,
    /// Kelvin
    pub temperature: Option<f64>,
    pub orbital_starter: Option<i64>,
}

impl StarSpec {
    pub fn of_type(star_type: StarType) -> Self {
        Self {
            star_type: Some(star_type),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, star_class: StarClass) -> Self {
        self.star_class = Some(star_class);
        self
    }

    pub fn with_color(mut self, color: StarColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_relative_mass(mut self, relative_mass: f64) -> Self {
        self.relative_mass = Some(relative_mass);
        self
    }

    pub fn with_relative_radius(mut self, relative_radius: f64) -> Self {
        self.relative_radius = Some(relative_radius);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Persisted star fields, as a storage adapter reads them back.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    pub id: StarId,
    pub system_id: SystemId,
    pub name: String,
    pub star_type: StarType,
    pub star_class: StarClass,
    pub color: StarColor,
    pub temperature: f64,
    pub relative_mass: f64,
    pub relative_radius: f64,
    pub is_main: bool,
    pub orbital: u32,
    pub orbital_starter: i64,
}

/// A star within a system.
///
/// # Invariants
///
/// - `(star_type, star_class, color)` is one of the classification table's rows
/// - `absolute_mass == relative_mass * SUN_MASS`
/// - `absolute_radius == relative_radius * SUN_RADIUS`
/// - `gravity == SUN_GRAVITY * relative_mass / relative_radius²`
/// - the main star has `orbital == 0`; companions have `orbital >= 1`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    id: StarId,
    system_id: SystemId,
    name: CelestialName,
    star_type: StarType,
    star_class: StarClass,
    color: StarColor,
    temperature: f64,
    relative_mass: f64,
    absolute_mass: f64,
    relative_radius: f64,
    absolute_radius: f64,
    gravity: f64,
    is_main: bool,
    orbital: u32,
    orbital_starter: OrbitalStarter,
}

/// Mass-derived physical quantities shared by `create` and `rehydrate`.
struct Physique {
    relative_mass: f64,
    absolute_mass: f64,
    relative_radius: f64,
    absolute_radius: f64,
    gravity: f64,
}

impl Physique {
    fn derive(model: RadiusModel, relative_mass: f64, relative_radius: f64) -> Self {
        let absolute_mass = relative_mass * SUN_MASS;
        let (relative_radius, absolute_radius) = match model {
            RadiusModel::Sampled { .. } => (relative_radius, relative_radius * SUN_RADIUS),
            RadiusModel::Schwarzschild => {
                let r = schwarzschild_radius(absolute_mass);
                (r / SUN_RADIUS, r)
            }
            RadiusModel::NeutronStar => {
                let r = neutron_star_radius(relative_mass);
                (r / SUN_RADIUS, r)
            }
        };
        Self {
            relative_mass,
            absolute_mass,
            relative_radius,
            absolute_radius,
            gravity: surface_gravity(relative_mass, relative_radius),
        }
    }
}

/// Event-horizon radius in metres for an absolute mass in kilograms.
pub fn schwarzschild_radius(absolute_mass: f64) -> f64 {
    2.0 * GRAVITATIONAL_CONSTANT * absolute_mass / (SPEED_OF_LIGHT * SPEED_OF_LIGHT)
}

/// Empirical neutron star radius in metres, `R ∝ M^(-1/3)`, clamped to 10-14 km.
pub fn neutron_star_radius(relative_mass: f64) -> f64 {
    let scaled = NEUTRON_STAR_REFERENCE_RADIUS
        * (relative_mass / NEUTRON_STAR_REFERENCE_MASS).powf(-1.0 / 3.0);
    scaled.clamp(NEUTRON_STAR_MIN_RADIUS, NEUTRON_STAR_MAX_RADIUS)
}

/// `G_sun * m / r²` in m/s² for solar-relative mass and radius.
pub fn surface_gravity(relative_mass: f64, relative_radius: f64) -> f64 {
    SUN_GRAVITY * (relative_mass / (relative_radius * relative_radius))
}

/// Resolve the star type from whatever the caller pinned down.
fn resolve_type<R: RandomSource>(spec: &StarSpec, rng: &mut R) -> StarType {
    spec.star_type
        .or_else(|| spec.star_class.map(|c| c.star_type()))
        .or_else(|| spec.color.map(|c| c.class().star_type()))
        .unwrap_or_else(|| sample_star_type(rng))
}

fn check_classification(
    star_type: StarType,
    star_class: Option<StarClass>,
    color: Option<StarColor>,
) -> Result<(StarClass, StarColor), DomainError> {
    let derived_class = star_type.class();
    if let Some(supplied) = star_class {
        if supplied != derived_class {
            return Err(DomainError::mismatch(
                codes::INVALID_STAR_CLASS,
                "starClass",
                derived_class,
                supplied,
            ));
        }
    }
    let derived_color = derived_class.color();
    if let Some(supplied) = color {
        if supplied != derived_color {
            return Err(DomainError::mismatch(
                codes::INVALID_STAR_COLOR,
                "color",
                derived_color,
                supplied,
            ));
        }
    }
    Ok((derived_class, derived_color))
}

impl Star {
    // =========================================================================
    // Factories
    // =========================================================================

    /// Create a fully derived star. New stars start as their system's main
    /// star at orbital 0 until [`Star::mark_companion`] demotes them.
    ///
    /// # Errors
    ///
    /// - `DOMAIN.INVALID_STAR_CLASS` / `DOMAIN.INVALID_STAR_COLOR` when a
    ///   supplied class or color disagrees with the type
    /// - `DOMAIN.INVALID_MASS`, `DOMAIN.INVALID_RADIUS`,
    ///   `DOMAIN.INVALID_TEMPERATURE` for non-positive supplied values
    /// - `DOMAIN.INVALID_ORBITAL_STARTER` for a starter outside `1..=8`
    pub fn create<R: RandomSource>(
        system_id: SystemId,
        name: CelestialName,
        spec: StarSpec,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        let star_type = resolve_type(&spec, rng);
        let (star_class, color) = check_classification(star_type, spec.star_class, spec.color)?;
        let profile = star_type.profile();

        let relative_mass = match spec.relative_mass {
            Some(mass) => ensure_positive(mass, codes::INVALID_MASS, "relativeMass")?,
            None => rng.range_f64(profile.mass.0, profile.mass.1),
        };
        let temperature = match spec.temperature {
            Some(t) => ensure_positive(t, codes::INVALID_TEMPERATURE, "temperature")?,
            None => rng.range_f64(profile.temperature.0, profile.temperature.1),
        };
        let relative_radius = match (profile.radius, spec.relative_radius) {
            (RadiusModel::Sampled { .. }, Some(r)) => {
                ensure_positive(r, codes::INVALID_RADIUS, "relativeRadius")?
            }
            (RadiusModel::Sampled { min, max }, None) => rng.range_f64(min, max),
            // Compact objects derive radius from mass.
            (RadiusModel::Schwarzschild | RadiusModel::NeutronStar, _) => 0.0,
        };
        let orbital_starter = match spec.orbital_starter {
            Some(value) => OrbitalStarter::new(value)?,
            None => OrbitalStarter::saturating(profile.orbital_starter),
        };

        let physique = Physique::derive(profile.radius, relative_mass, relative_radius);

        Ok(Self {
            id: StarId::new(),
            system_id,
            name,
            star_type,
            star_class,
            color,
            temperature,
            relative_mass: physique.relative_mass,
            absolute_mass: physique.absolute_mass,
            relative_radius: physique.relative_radius,
            absolute_radius: physique.absolute_radius,
            gravity: physique.gravity,
            is_main: true,
            orbital: 0,
            orbital_starter,
        })
    }

    /// Rebuild a persisted star, re-deriving every dependent quantity from the
    /// stored relative mass and radius.
    pub fn rehydrate(record: StarRecord) -> Result<Self, DomainError> {
        let name = CelestialName::new(record.name)?;
        let (star_class, color) = check_classification(
            record.star_type,
            Some(record.star_class),
            Some(record.color),
        )?;
        let relative_mass =
            ensure_positive(record.relative_mass, codes::INVALID_MASS, "relativeMass")?;
        let temperature =
            ensure_positive(record.temperature, codes::INVALID_TEMPERATURE, "temperature")?;
        let profile = record.star_type.profile();
        let relative_radius = match profile.radius {
            RadiusModel::Sampled { .. } => {
                ensure_positive(record.relative_radius, codes::INVALID_RADIUS, "relativeRadius")?
            }
            RadiusModel::Schwarzschild | RadiusModel::NeutronStar => 0.0,
        };
        let orbital_starter = OrbitalStarter::new(record.orbital_starter)?;
        if record.is_main != (record.orbital == 0) {
            return Err(DomainError::invalid(
                codes::INVALID_ORBITAL,
                "orbital",
                "the main star orbits at 0 and companions at 1 or more",
            ));
        }

        let physique = Physique::derive(profile.radius, relative_mass, relative_radius);

        Ok(Self {
            id: record.id,
            system_id: record.system_id,
            name,
            star_type: record.star_type,
            star_class,
            color,
            temperature,
            relative_mass: physique.relative_mass,
            absolute_mass: physique.absolute_mass,
            relative_radius: physique.relative_radius,
            absolute_radius: physique.absolute_radius,
            gravity: physique.gravity,
            is_main: record.is_main,
            orbital: record.orbital,
            orbital_starter,
        })
    }

    /// Flatten into the fields a storage adapter persists.
    pub fn to_record(&self) -> StarRecord {
        StarRecord {
            id: self.id,
            system_id: self.system_id,
            name: self.name.to_string(),
            star_type: self.star_type,
            star_class: self.star_class,
            color: self.color,
            temperature: self.temperature,
            relative_mass: self.relative_mass,
            relative_radius: self.relative_radius,
            is_main: self.is_main,
            orbital: self.orbital,
            orbital_starter: i64::from(self.orbital_starter.get()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> StarId {
        self.id
    }

    #[inline]
    pub fn system_id(&self) -> SystemId {
        self.system_id
    }

    #[inline]
    pub fn name(&self) -> &CelestialName {
        &self.name
    }

    #[inline]
    pub fn star_type(&self) -> StarType {
        self.star_type
    }

    #[inline]
    pub fn star_class(&self) -> StarClass {
        self.star_class
    }

    #[inline]
    pub fn color(&self) -> StarColor {
        self.color
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[inline]
    pub fn relative_mass(&self) -> f64 {
        self.relative_mass
    }

    #[inline]
    pub fn absolute_mass(&self) -> f64 {
        self.absolute_mass
    }

    #[inline]
    pub fn relative_radius(&self) -> f64 {
        self.relative_radius
    }

    #[inline]
    pub fn absolute_radius(&self) -> f64 {
        self.absolute_radius
    }

    #[inline]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    #[inline]
    pub fn is_main(&self) -> bool {
        self.is_main
    }

    #[inline]
    pub fn orbital(&self) -> u32 {
        self.orbital
    }

    #[inline]
    pub fn orbital_starter(&self) -> OrbitalStarter {
        self.orbital_starter
    }

    pub fn is_compact(&self) -> bool {
        self.star_type.is_compact()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Make this star its system's gravitational anchor.
    pub fn mark_main(&mut self) {
        self.is_main = true;
        self.orbital = 0;
    }

    /// Demote this star to a companion on `orbital`.
    ///
    /// # Errors
    ///
    /// - `DOMAIN.INVALID_ORBITAL` if `orbital` is 0
    /// - a constraint violation for black holes and neutron stars, which
    ///   never share their system
    pub fn mark_companion(&mut self, orbital: u32) -> Result<(), DomainError> {
        if self.is_compact() {
            return Err(DomainError::constraint(format!(
                "{} cannot be a companion star",
                self.star_type
            )));
        }
        if orbital == 0 {
            return Err(DomainError::invalid(
                codes::INVALID_ORBITAL,
                "orbital",
                "companion stars orbit at 1 or more",
            ));
        }
        self.is_main = false;
        self.orbital = orbital;
        Ok(())
    }

    pub fn set_orbital_starter(&mut self, starter: OrbitalStarter) {
        self.orbital_starter = starter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::TestRng;

    fn name() -> CelestialName {
        CelestialName::new("Sol").expect("valid name")
    }

    fn close(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-12
    }

    mod create {
        use super::*;

        #[test]
        fn derived_quantities_hold_for_every_type() {
            let mut rng = TestRng::seeded(1);
            for row in crate::classification::stellar_table() {
                for _ in 0..20 {
                    let star = Star::create(
                        SystemId::new(),
                        name(),
                        StarSpec::of_type(row.star_type),
                        &mut rng,
                    )
                    .expect("valid star");
                    assert!(close(star.absolute_mass(), star.relative_mass() * SUN_MASS));
                    assert!(close(star.absolute_radius(), star.relative_radius() * SUN_RADIUS));
                    let g = SUN_GRAVITY * star.relative_mass() / star.relative_radius().powi(2);
                    assert!(close(star.gravity(), g));
                    assert_eq!(star.star_class(), row.class);
                    assert_eq!(star.color(), row.color);
                    let mass = star.relative_mass();
                    assert!(mass >= row.mass.0 && mass <= row.mass.1);
                    assert!(
                        star.temperature() >= row.temperature.0
                            && star.temperature() <= row.temperature.1
                    );
                }
            }
        }

        #[test]
        fn sampled_radius_stays_in_class_range() {
            let mut rng = TestRng::seeded(2);
            for _ in 0..100 {
                let star = Star::create(
                    SystemId::new(),
                    name(),
                    StarSpec::of_type(StarType::YellowDwarf),
                    &mut rng,
                )
                .expect("valid star");
                assert!((0.96..=1.15).contains(&star.relative_radius()));
            }
        }

        #[test]
        fn black_hole_is_bh_black_and_tiny() {
            let mut rng = TestRng::seeded(3);
            let star = Star::create(
                SystemId::new(),
                name(),
                StarSpec::of_type(StarType::BlackHole),
                &mut rng,
            )
            .expect("valid star");
            assert_eq!(star.star_class(), StarClass::BH);
            assert_eq!(star.color(), StarColor::Black);
            assert!(star.is_main());
            // Smallest sampled radius in the table is 0.008 R☉.
            assert!(star.relative_radius() < 0.008 / 10.0);
            assert!(close(
                star.absolute_radius(),
                schwarzschild_radius(star.absolute_mass())
            ));
        }

        #[test]
        fn schwarzschild_radius_of_the_sun_is_about_three_km() {
            let r = schwarzschild_radius(SUN_MASS);
            assert!((2_900.0..3_000.0).contains(&r), "r = {}", r);
        }

        #[test]
        fn neutron_star_radius_is_clamped() {
            assert_eq!(neutron_star_radius(1.4), NEUTRON_STAR_REFERENCE_RADIUS);
            assert_eq!(neutron_star_radius(0.01), NEUTRON_STAR_MAX_RADIUS);
            assert_eq!(neutron_star_radius(100.0), NEUTRON_STAR_MIN_RADIUS);

            let mut rng = TestRng::seeded(4);
            for _ in 0..50 {
                let star = Star::create(
                    SystemId::new(),
                    name(),
                    StarSpec::of_type(StarType::NeutronStar),
                    &mut rng,
                )
                .expect("valid star");
                assert!(star.absolute_radius() >= NEUTRON_STAR_MIN_RADIUS);
                assert!(star.absolute_radius() <= NEUTRON_STAR_MAX_RADIUS);
            }
        }

        #[test]
        fn supplied_values_are_kept() {
            let mut rng = TestRng::seeded(5);
            let spec = StarSpec::of_type(StarType::YellowDwarf)
                .with_relative_mass(1.0)
                .with_relative_radius(1.0)
                .with_temperature(5_772.0);
            let star = Star::create(SystemId::new(), name(), spec, &mut rng).expect("valid star");
            assert_eq!(star.relative_mass(), 1.0);
            assert_eq!(star.relative_radius(), 1.0);
            assert_eq!(star.temperature(), 5_772.0);
            assert!(close(star.gravity(), SUN_GRAVITY));
        }

        #[test]
        fn class_alone_selects_type() {
            let mut rng = TestRng::seeded(6);
            let spec = StarSpec {
                star_class: Some(StarClass::K),
                ..StarSpec::default()
            };
            let star = Star::create(SystemId::new(), name(), spec, &mut rng).expect("valid star");
            assert_eq!(star.star_type(), StarType::OrangeDwarf);
            assert_eq!(star.color(), StarColor::Orange);
        }

        #[test]
        fn mismatched_class_is_rejected() {
            let mut rng = TestRng::seeded(7);
            let spec = StarSpec::of_type(StarType::BlackHole).with_class(StarClass::G);
            let err = Star::create(SystemId::new(), name(), spec, &mut rng).unwrap_err();
            assert_eq!(err.code(), Some(codes::INVALID_STAR_CLASS));
            assert_eq!(err.field(), Some("starClass"));
        }

        #[test]
        fn mismatched_color_is_rejected() {
            let mut rng = TestRng::seeded(8);
            let spec = StarSpec::of_type(StarType::RedDwarf)
                .with_class(StarClass::M)
                .with_color(StarColor::Blue);
            let err = Star::create(SystemId::new(), name(), spec, &mut rng).unwrap_err();
            assert_eq!(err.code(), Some(codes::INVALID_STAR_COLOR));
        }

        #[test]
        fn non_positive_values_are_rejected() {
            let mut rng = TestRng::seeded(9);
            let cases = [
                (
                    StarSpec::of_type(StarType::RedDwarf).with_relative_mass(0.0),
                    codes::INVALID_MASS,
                ),
                (
                    StarSpec::of_type(StarType::RedDwarf).with_relative_radius(-1.0),
                    codes::INVALID_RADIUS,
                ),
                (
                    StarSpec::of_type(StarType::RedDwarf).with_temperature(0.0),
                    codes::INVALID_TEMPERATURE,
                ),
                (
                    StarSpec {
                        orbital_starter: Some(-1),
                        ..StarSpec::of_type(StarType::RedDwarf)
                    },
                    codes::INVALID_ORBITAL_STARTER,
                ),
            ];
            for (spec, code) in cases {
                let err = Star::create(SystemId::new(), name(), spec, &mut rng).unwrap_err();
                assert_eq!(err.code(), Some(code));
            }
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn companions_cannot_orbit_at_zero() {
            let mut rng = TestRng::seeded(10);
            let mut star = Star::create(
                SystemId::new(),
                name(),
                StarSpec::of_type(StarType::RedDwarf),
                &mut rng,
            )
            .expect("valid star");
            assert!(star.mark_companion(0).is_err());
            star.mark_companion(1).expect("orbital 1");
            assert!(!star.is_main());
            assert_eq!(star.orbital(), 1);
            star.mark_main();
            assert!(star.is_main());
            assert_eq!(star.orbital(), 0);
        }

        #[test]
        fn compact_stars_cannot_be_companions() {
            let mut rng = TestRng::seeded(11);
            let mut star = Star::create(
                SystemId::new(),
                name(),
                StarSpec::of_type(StarType::NeutronStar),
                &mut rng,
            )
            .expect("valid star");
            let err = star.mark_companion(1).unwrap_err();
            assert!(matches!(err, DomainError::Constraint(_)));
        }
    }

    mod rehydrate {
        use super::*;

        #[test]
        fn rederives_from_stored_relative_values() {
            let mut rng = TestRng::seeded(12);
            let star = Star::create(
                SystemId::new(),
                name(),
                StarSpec::of_type(StarType::BlueGiant),
                &mut rng,
            )
            .expect("valid star");
            let loaded = Star::rehydrate(star.to_record()).expect("valid record");
            assert_eq!(loaded.id(), star.id());
            assert!(close(loaded.gravity(), star.gravity()));
            assert!(close(loaded.absolute_radius(), star.absolute_radius()));
        }

        #[test]
        fn rejects_inconsistent_triple() {
            let mut rng = TestRng::seeded(13);
            let star = Star::create(
                SystemId::new(),
                name(),
                StarSpec::of_type(StarType::WhiteDwarf),
                &mut rng,
            )
            .expect("valid star");
            let mut record = star.to_record();
            record.color = StarColor::Red;
            let err = Star::rehydrate(record).unwrap_err();
            assert_eq!(err.code(), Some(codes::INVALID_STAR_COLOR));
        }

        #[test]
        fn compact_radius_ignores_stored_value() {
            let mut rng = TestRng::seeded(14);
            let star = Star::create(
                SystemId::new(),
                name(),
                StarSpec::of_type(StarType::BlackHole),
                &mut rng,
            )
            .expect("valid star");
            let mut record = star.to_record();
            record.relative_radius = 5.0;
            let loaded = Star::rehydrate(record).expect("valid record");
            assert!(close(loaded.relative_radius(), star.relative_radius()));
        }

        #[test]
        fn rejects_main_flag_off_orbital_zero() {
            let mut rng = TestRng::seeded(15);
            let star = Star::create(
                SystemId::new(),
                name(),
                StarSpec::of_type(StarType::RedDwarf),
                &mut rng,
            )
            .expect("valid star");
            let mut record = star.to_record();
            record.is_main = true;
            record.orbital = 1;
            assert!(Star::rehydrate(record).is_err());
        }
    }
}
