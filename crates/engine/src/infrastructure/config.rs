//! Engine configuration from the environment.

use galaxyforge_domain::{GalaxyName, GalaxyShape};

pub const SEED_VAR: &str = "GALAXYFORGE_SEED";
pub const DEMO_NAME_VAR: &str = "GALAXYFORGE_DEMO_NAME";
pub const DEMO_SHAPE_VAR: &str = "GALAXYFORGE_DEMO_SHAPE";
pub const DEMO_SYSTEMS_VAR: &str = "GALAXYFORGE_DEMO_SYSTEMS";

const DEFAULT_DEMO_NAME: &str = "Andromeda";
const DEFAULT_DEMO_SHAPE: GalaxyShape = GalaxyShape::FiveArmSpiral;
const DEFAULT_DEMO_SYSTEMS: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Present = deterministic generation.
    pub seed: Option<u64>,
    pub demo_name: String,
    pub demo_shape: GalaxyShape,
    /// Requested system count; clamped by the domain.
    pub demo_systems: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            demo_name: DEFAULT_DEMO_NAME.to_string(),
            demo_shape: DEFAULT_DEMO_SHAPE,
            demo_systems: DEFAULT_DEMO_SYSTEMS,
        }
    }
}

impl EngineConfig {
    /// Read from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`. Malformed values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = value(SEED_VAR).and_then(|raw| match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(
                    var = SEED_VAR,
                    value = %raw,
                    error = %e,
                    "Ignoring malformed seed"
                );
                None
            }
        });

        let demo_shape = match value(DEMO_SHAPE_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(var = DEMO_SHAPE_VAR, error = %e, "Using default galaxy shape");
                defaults.demo_shape
            }),
            None => defaults.demo_shape,
        };

        let demo_name = match value(DEMO_NAME_VAR) {
            Some(raw) => match GalaxyName::new(raw.as_str()) {
                Ok(name) => name.to_string(),
                Err(e) => {
                    tracing::warn!(
                        var = DEMO_NAME_VAR,
                        value = %raw,
                        error = %e,
                        "Using default galaxy name"
                    );
                    defaults.demo_name
                }
            },
            None => defaults.demo_name,
        };

        let demo_systems = match value(DEMO_SYSTEMS_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    var = DEMO_SYSTEMS_VAR,
                    value = %raw,
                    error = %e,
                    "Using default system count"
                );
                defaults.demo_systems
            }),
            None => defaults.demo_systems,
        };

        Self {
            seed,
            demo_name,
            demo_shape,
            demo_systems,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), EngineConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            (SEED_VAR, "1234"),
            (DEMO_NAME_VAR, "Sombrero"),
            (DEMO_SHAPE_VAR, "Spherical"),
            (DEMO_SYSTEMS_VAR, "25"),
        ]);
        assert_eq!(cfg.seed, Some(1234));
        assert_eq!(cfg.demo_name, "Sombrero");
        assert_eq!(cfg.demo_shape, GalaxyShape::Spherical);
        assert_eq!(cfg.demo_systems, 25);
    }

    #[test]
    fn malformed_values_fall_back() {
        let cfg = config(&[
            (SEED_VAR, "not-a-seed"),
            (DEMO_SHAPE_VAR, "donut"),
            (DEMO_SYSTEMS_VAR, "many"),
            (DEMO_NAME_VAR, "   "),
        ]);
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn invalid_demo_name_falls_back() {
        let cfg = config(&[(DEMO_NAME_VAR, "Io")]);
        assert_eq!(cfg.demo_name, "Andromeda");

        let cfg = config(&[(DEMO_NAME_VAR, "lowercase galaxy")]);
        assert_eq!(cfg.demo_name, "Andromeda");
    }
}
