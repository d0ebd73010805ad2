use crate::settings::Config;
use clap::Args;
use rust_decimal::Decimal;

/// Command-line overrides layered on top of the loaded configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct ParameterOverrides {
    /// Number of critical assets/endpoints.
    #[arg(long, allow_negative_numbers = true)]
    pub attack_surface_size: Option<i64>,

    /// Fractional risk reduction from Zero Trust (0.0 - 1.0).
    #[arg(long = "effectiveness")]
    pub zero_trust_effectiveness: Option<f64>,

    /// Cost of a single breach in dollars. Defaults to the industry benchmark.
    #[arg(long)]
    pub breach_cost: Option<Decimal>,

    /// Consequence multiplier for compromised assets (1.0 - 3.0).
    #[arg(long)]
    pub asset_criticality: Option<f64>,

    /// Expected outage per breach, in hours.
    #[arg(long, allow_negative_numbers = true)]
    pub downtime_hours: Option<i64>,

    /// Number of Monte Carlo trials.
    #[arg(long)]
    pub trials: Option<usize>,

    /// Seed for reproducible confidence intervals.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ParameterOverrides {
    /// Writes every supplied override into `config`.
    pub fn apply(&self, config: &mut Config) {
        let params = &mut config.parameters;
        if let Some(size) = self.attack_surface_size {
            params.attack_surface_size = size;
        }
        if let Some(effectiveness) = self.zero_trust_effectiveness {
            params.zero_trust_effectiveness = effectiveness;
        }
        if self.breach_cost.is_some() {
            params.breach_cost = self.breach_cost;
        }
        if self.asset_criticality.is_some() {
            params.asset_criticality = self.asset_criticality;
        }
        if self.downtime_hours.is_some() {
            params.downtime_hours = self.downtime_hours;
        }
        if let Some(trials) = self.trials {
            config.simulation.trials = trials;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn only_supplied_fields_change() {
        let mut config = Config::default();
        let overrides = ParameterOverrides {
            attack_surface_size: Some(42),
            breach_cost: Some(dec!(1000)),
            seed: Some(9),
            ..ParameterOverrides::default()
        };
        overrides.apply(&mut config);

        assert_eq!(config.parameters.attack_surface_size, 42);
        assert_eq!(config.parameters.breach_cost, Some(dec!(1000)));
        assert_eq!(config.parameters.zero_trust_effectiveness, 0.75);
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.simulation.trials, 1_000);
    }
}
