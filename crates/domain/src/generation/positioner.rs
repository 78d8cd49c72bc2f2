//! Galaxy shape positioning.
//!
//! Maps a system's zero-based index among its siblings to 3-D coordinates
//! consistent with the galaxy's morphology. Every shape adds per-axis jitter so
//! systems sharing an index-derived angle never sit on the same ray.

use std::f64::consts::{PI, TAU};

use crate::random::RandomSource;
use crate::value_objects::{GalaxyShape, Position};

/// Base radius of the spherical shell.
const SPHERE_BASE_RADIUS: f64 = 4_000.0;
/// Radial growth per system index (sphere and spiral).
const RADIUS_STEP: f64 = 6.0;
/// Radial jitter added to the spherical shell radius.
const SPHERE_RADIUS_JITTER: f64 = 200.0;
/// Extra radial jitter applied after the angular placement.
const SPHERE_SECONDARY_JITTER: f64 = 40.0;

/// Innermost radius of a spiral arm.
const SPIRAL_CORE_RADIUS: f64 = 300.0;
/// Radius gained per step along an arm.
const SPIRAL_ARM_STEP: f64 = 120.0;
/// Curl of the arms in radians per unit radius.
const SPIRAL_SPIN: f64 = 0.0025;
/// Angular advance per step along an arm.
const SPIRAL_BASE_STEP: f64 = 0.05;
const SPIRAL_XY_JITTER: f64 = 25.0;
const SPIRAL_Z_JITTER: f64 = 60.0;

/// Half-width of the irregular galaxy's bounding cube on x/y.
const IRREGULAR_HALF_EXTENT: f64 = 5_000.0;
const IRREGULAR_Z_JITTER: f64 = 500.0;

/// Symmetric jitter in `[-amplitude, amplitude)`.
fn jitter<R: RandomSource>(rng: &mut R, amplitude: f64) -> f64 {
    rng.range_f64(-amplitude, amplitude)
}

/// Arm that a system at `index` belongs to.
pub fn arm_index(index: u32, arms: u32) -> u32 {
    if arms == 0 {
        return 0;
    }
    index % arms
}

/// Angular offset of an arm: `2π / arms · arm`.
pub fn arm_offset(arm: u32, arms: u32) -> f64 {
    if arms == 0 {
        return 0.0;
    }
    TAU / f64::from(arms) * f64::from(arm)
}

/// Computes the position of the `index`-th of `total` systems.
pub fn position_system<R: RandomSource>(
    shape: GalaxyShape,
    index: u32,
    total: u32,
    rng: &mut R,
) -> Position {
    let (x, y, z) = match shape {
        GalaxyShape::Spherical => spherical(index, total, rng),
        GalaxyShape::ThreeArmSpiral | GalaxyShape::FiveArmSpiral => {
            let arms = shape.arm_count().unwrap_or(3);
            spiral(index, arms, rng)
        }
        GalaxyShape::Irregular => irregular(rng),
    };
    // Every branch yields finite values for finite inputs.
    Position::new(x, y, z).unwrap_or_else(|_| Position::origin())
}

fn spherical<R: RandomSource>(index: u32, total: u32, rng: &mut R) -> (f64, f64, f64) {
    let radius = SPHERE_BASE_RADIUS
        + RADIUS_STEP * f64::from(index)
        + rng.roll_float(SPHERE_RADIUS_JITTER);
    // acos(2u - 1) keeps latitude area-uniform.
    let phi = (2.0 * rng.next_unit() - 1.0).clamp(-1.0, 1.0).acos();
    let theta = TAU * f64::from(index) / f64::from(total.max(1));
    let r = radius + jitter(rng, SPHERE_SECONDARY_JITTER);

    (
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

fn spiral<R: RandomSource>(index: u32, arms: u32, rng: &mut R) -> (f64, f64, f64) {
    let arm = arm_index(index, arms);
    let step = f64::from(index / arms.max(1));
    let radius = SPIRAL_CORE_RADIUS + SPIRAL_ARM_STEP * step + RADIUS_STEP * f64::from(index);
    let angle = SPIRAL_BASE_STEP * step * PI + arm_offset(arm, arms) + radius * SPIRAL_SPIN;

    (
        radius * angle.cos() + jitter(rng, SPIRAL_XY_JITTER),
        radius * angle.sin() + jitter(rng, SPIRAL_XY_JITTER),
        jitter(rng, SPIRAL_Z_JITTER),
    )
}

fn irregular<R: RandomSource>(rng: &mut R) -> (f64, f64, f64) {
    (
        jitter(rng, IRREGULAR_HALF_EXTENT),
        jitter(rng, IRREGULAR_HALF_EXTENT),
        jitter(rng, IRREGULAR_Z_JITTER),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::TestRng;

    fn angle_of(p: &Position) -> f64 {
        p.y().atan2(p.x())
    }

    #[test]
    fn arm_assignment_wraps_by_arm_count() {
        let arms: Vec<u32> = (0..10).map(|i| arm_index(i, 5)).collect();
        assert_eq!(arms, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
        assert_eq!(arm_offset(arm_index(0, 5), 5), 0.0);
        assert_eq!(arm_offset(arm_index(5, 5), 5), 0.0);
        assert!((arm_offset(1, 3) - TAU / 3.0).abs() < 1e-12);
    }

    #[test]
    fn spherical_points_lie_near_the_shell() {
        let mut rng = TestRng::seeded(8);
        let total = 50;
        for index in 0..total {
            let p = position_system(GalaxyShape::Spherical, index, total, &mut rng);
            let min = SPHERE_BASE_RADIUS + RADIUS_STEP * f64::from(index) - SPHERE_SECONDARY_JITTER;
            let max = min + SPHERE_RADIUS_JITTER + 2.0 * SPHERE_SECONDARY_JITTER;
            let r = p.magnitude();
            assert!(r >= min - 1e-6 && r <= max + 1e-6, "index {} r {}", index, r);
        }
    }

    #[test]
    fn spherical_latitudes_cover_both_hemispheres() {
        let mut rng = TestRng::seeded(21);
        let points: Vec<Position> = (0..200)
            .map(|i| position_system(GalaxyShape::Spherical, i, 200, &mut rng))
            .collect();
        let north = points.iter().filter(|p| p.z() > 0.0).count();
        assert!((60..140).contains(&north), "north={}", north);
    }

    #[test]
    fn spiral_systems_stay_in_a_thin_disk() {
        let mut rng = TestRng::seeded(4);
        for index in 0..100 {
            let p = position_system(GalaxyShape::ThreeArmSpiral, index, 100, &mut rng);
            assert!(p.z().abs() <= SPIRAL_Z_JITTER);
            assert!(p.planar_radius() >= SPIRAL_CORE_RADIUS - 2.0 * SPIRAL_XY_JITTER);
        }
    }

    #[test]
    fn five_arm_systems_sharing_an_arm_share_its_offset() {
        // Systems 0 and 5 both sit on arm 0; their angles differ only by the
        // base step and curl, never by an arm offset.
        let mut rng = TestRng::seeded(10);
        let p0 = position_system(GalaxyShape::FiveArmSpiral, 0, 10, &mut rng);
        let p1 = position_system(GalaxyShape::FiveArmSpiral, 1, 10, &mut rng);
        let expected_first = SPIRAL_CORE_RADIUS * SPIRAL_SPIN;
        assert!((angle_of(&p0) - expected_first).abs() < 0.2);
        let expected_second = arm_offset(1, 5) + (SPIRAL_CORE_RADIUS + RADIUS_STEP) * SPIRAL_SPIN;
        assert!((angle_of(&p1) - expected_second).abs() < 0.2);
    }

    #[test]
    fn radius_grows_with_index_along_an_arm() {
        let mut rng = TestRng::seeded(33);
        let inner = position_system(GalaxyShape::FiveArmSpiral, 0, 20, &mut rng);
        let outer = position_system(GalaxyShape::FiveArmSpiral, 15, 20, &mut rng);
        assert!(outer.planar_radius() > inner.planar_radius());
    }

    #[test]
    fn irregular_systems_fill_the_cube() {
        let mut rng = TestRng::seeded(77);
        for index in 0..200 {
            let p = position_system(GalaxyShape::Irregular, index, 200, &mut rng);
            assert!(p.x().abs() <= IRREGULAR_HALF_EXTENT);
            assert!(p.y().abs() <= IRREGULAR_HALF_EXTENT);
            assert!(p.z().abs() <= IRREGULAR_Z_JITTER);
        }
    }

    #[test]
    fn identical_indices_do_not_collide() {
        let mut rng = TestRng::seeded(2);
        for shape in GalaxyShape::ALL {
            let a = position_system(shape, 3, 10, &mut rng);
            let b = position_system(shape, 3, 10, &mut rng);
            assert_ne!(a, b, "{}", shape);
        }
    }
}
