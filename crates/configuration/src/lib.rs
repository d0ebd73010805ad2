use crate::error::ConfigError;
use std::collections::HashSet;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    default_scenarios, Config, CostProportions, FinancialModelParams, InputDefaults,
    InvestmentParams, ModelConstants, Report, RiskModelParams, ScenarioDefinition,
    SensitivityGrid, Simulation,
};

/// The file read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ztroi.toml";

/// Prefix of environment variables that override file settings,
/// e.g. `ZTROI__SIMULATION__TRIALS=5000`.
pub const ENV_PREFIX: &str = "ZTROI";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the TOML file, then `ZTROI__*`
/// environment variables. An explicit `path` must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(
        scenarios = config.scenarios.len(),
        trials = config.simulation.trials,
        "Configuration loaded"
    );
    Ok(config)
}

/// Parses a configuration from an in-memory TOML document.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Structural checks that serde cannot express.
    ///
    /// Numeric model constants are checked by the models that consume them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.label.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "scenario labels must not be empty".to_string(),
                ));
            }
            if !seen.insert(scenario.label.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate scenario label '{}'",
                    scenario.label
                )));
            }
        }

        if let Some(grid) = &self.grid {
            let empty_axis = [
                ("attack_surface_size", grid.attack_surface_size.as_ref().map(Vec::len)),
                ("zero_trust_effectiveness", grid.zero_trust_effectiveness.as_ref().map(Vec::len)),
                ("asset_criticality", grid.asset_criticality.as_ref().map(Vec::len)),
            ]
            .into_iter()
            .find(|(_, len)| *len == Some(0));

            if let Some((axis, _)) = empty_axis {
                return Err(ConfigError::ValidationError(format!(
                    "grid axis '{}' must list at least one value",
                    axis
                )));
            }
        }

        if self.report.projection_months == 0 {
            return Err(ConfigError::ValidationError(
                "report.projection_months must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.parameters.attack_surface_size, 2500);
        assert_eq!(config.simulation.trials, 1_000);
        assert_eq!(config.model.financial.proportions.sum(), dec!(1));
        let labels: Vec<_> = config.scenarios.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Conservative", "Current Baseline", "Optimistic"]);
    }

    #[test]
    fn sections_override_defaults() {
        let config = load_config_from_str(
            r#"
            [parameters]
            attack_surface_size = 800
            zero_trust_effectiveness = 0.5

            [simulation]
            trials = 250
            seed = 7

            [model.financial]
            benchmark_breach_cost = 5000000

            [[scenarios]]
            label = "Only"
            attack_surface_size = 100
            zero_trust_effectiveness = 0.9
            asset_criticality = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(config.parameters.attack_surface_size, 800);
        assert!(config.parameters.breach_cost.is_none());
        assert_eq!(config.simulation.trials, 250);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.lower_percentile, 10.0);
        assert_eq!(config.model.financial.benchmark_breach_cost, dec!(5000000));
        assert_eq!(config.model.parameter_defaults().breach_cost, dec!(5000000));
        assert_eq!(config.scenarios.len(), 1);
        assert_eq!(config.scenarios[0].asset_criticality, Some(3.0));
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let err = load_config_from_str(
            r#"
            [[scenarios]]
            label = "A"
            attack_surface_size = 1
            zero_trust_effectiveness = 0.1

            [[scenarios]]
            label = "A"
            attack_surface_size = 2
            zero_trust_effectiveness = 0.2
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn empty_grid_axis_is_rejected() {
        let err = load_config_from_str(
            r#"
            [grid]
            attack_surface_size = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(msg) if msg.contains("attack_surface_size")));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[report]\nprojection_months = 12").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.report.projection_months, 12);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/ztroi.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
