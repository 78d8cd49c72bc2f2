//! Galaxy record creation.

use std::sync::Arc;

use galaxyforge_domain::{Galaxy, GalaxyName, GalaxyShape, SystemCount, UserId};

use crate::infrastructure::ports::{ClockPort, GalaxyRepo};

use super::GalaxyTreeError;

/// Raw galaxy request, as it arrives from a caller.
#[derive(Debug, Clone)]
pub struct CreateGalaxyInput {
    pub owner_id: UserId,
    pub name: String,
    pub shape: String,
    /// Out-of-range counts are clamped to `1..=1000`.
    pub system_count: i64,
}

/// Validates and stores a galaxy without populating it.
///
/// Populating the tree is a separate step ([`super::CreateGalaxyTree`]).
pub struct CreateGalaxy {
    galaxies: Arc<dyn GalaxyRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateGalaxy {
    pub fn new(galaxies: Arc<dyn GalaxyRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { galaxies, clock }
    }

    pub async fn execute(&self, input: CreateGalaxyInput) -> Result<Galaxy, GalaxyTreeError> {
        let name = GalaxyName::new(input.name)?;
        let shape: GalaxyShape = input.shape.parse()?;
        let galaxy = Galaxy::new(
            input.owner_id,
            name,
            shape,
            SystemCount::clamped(input.system_count),
            self.clock.now(),
        );

        self.galaxies.save(&galaxy).await?;
        tracing::info!(
            galaxy_id = %galaxy.id(),
            shape = %galaxy.shape(),
            system_count = galaxy.system_count().get(),
            "Galaxy created"
        );
        Ok(galaxy)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use galaxyforge_domain::codes;

    use super::*;
    use crate::infrastructure::ports::{MockClockPort, MockGalaxyRepo};

    fn input(name: &str, shape: &str, system_count: i64) -> CreateGalaxyInput {
        CreateGalaxyInput {
            owner_id: UserId::new(),
            name: name.to_string(),
            shape: shape.to_string(),
            system_count,
        }
    }

    #[tokio::test]
    async fn stores_validated_galaxy_with_clock_time() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid time");

        let mut clock = MockClockPort::new();
        clock.expect_now().return_const(now);

        let mut galaxies = MockGalaxyRepo::new();
        galaxies
            .expect_save()
            .withf(|g| g.name().as_str() == "Andromeda" && g.system_count().get() == 1000)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateGalaxy::new(Arc::new(galaxies), Arc::new(clock));
        let galaxy = use_case
            .execute(input("Andromeda", "5-Arm Spiral", 5_000))
            .await
            .expect("CreateGalaxy should succeed");

        assert_eq!(galaxy.shape(), GalaxyShape::FiveArmSpiral);
        assert_eq!(galaxy.created_at(), now);
    }

    #[tokio::test]
    async fn unknown_shape_is_rejected_before_saving() {
        let mut clock = MockClockPort::new();
        clock.expect_now().return_const(Utc::now());
        let mut galaxies = MockGalaxyRepo::new();
        galaxies.expect_save().times(0);

        let use_case = CreateGalaxy::new(Arc::new(galaxies), Arc::new(clock));
        let err = use_case
            .execute(input("Andromeda", "ring", 10))
            .await
            .expect_err("use case should fail");

        match err {
            GalaxyTreeError::Domain(e) => assert_eq!(e.code(), Some(codes::INVALID_SHAPE)),
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn short_name_is_rejected() {
        let clock = MockClockPort::new();
        let galaxies = MockGalaxyRepo::new();

        let use_case = CreateGalaxy::new(Arc::new(galaxies), Arc::new(clock));
        let err = use_case
            .execute(input("Io", "spherical", 10))
            .await
            .expect_err("use case should fail");

        assert!(matches!(err, GalaxyTreeError::Domain(_)));
    }
}
