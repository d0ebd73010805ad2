use core_types::{ParameterDefaults, RawParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConstants,
    pub simulation: Simulation,
    /// The inputs for the headline monthly report.
    pub parameters: RawParameters,
    pub scenarios: Vec<ScenarioDefinition>,
    /// An optional sensitivity grid, expanded into extra scenarios.
    pub grid: Option<SensitivityGrid>,
    pub report: Report,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConstants::default(),
            simulation: Simulation::default(),
            // The reference utility: 2,500 critical endpoints, 75% risk reduction,
            // an $8M breach and high-criticality infrastructure.
            parameters: RawParameters {
                attack_surface_size: 2500,
                zero_trust_effectiveness: 0.75,
                breach_cost: Some(dec!(8_000_000)),
                asset_criticality: Some(2.0),
                downtime_hours: Some(24),
            },
            scenarios: default_scenarios(),
            grid: None,
            report: Report::default(),
        }
    }
}

/// The fixed coefficients of the risk, financial and investment models.
///
/// These are calibration parameters reproducing the illustrative example
/// ranges, not guaranteed business truths.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelConstants {
    pub risk: RiskModelParams,
    pub financial: FinancialModelParams,
    pub investment: InvestmentParams,
    pub defaults: InputDefaults,
}

impl ModelConstants {
    /// The substitutions the validator applies to absent optional inputs.
    pub fn parameter_defaults(&self) -> ParameterDefaults {
        ParameterDefaults {
            breach_cost: self.financial.benchmark_breach_cost,
            asset_criticality: self.defaults.asset_criticality,
            downtime_hours: self.defaults.downtime_hours,
        }
    }
}

/// Coefficients of the baseline breach likelihood curve.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RiskModelParams {
    /// Monthly breach probability of an organization at the reference size.
    pub baseline_breach_probability: f64,
    /// The attack surface size at which `baseline_breach_probability` applies.
    pub reference_attack_surface: f64,
    /// Exponent of the size scaling. 0.5 is square-root scaling; must be in (0, 1].
    pub risk_scaling_exponent: f64,
    /// Upper cap on the baseline probability.
    pub max_baseline_probability: f64,
}

impl Default for RiskModelParams {
    fn default() -> Self {
        Self {
            baseline_breach_probability: 0.023,
            reference_attack_surface: 500.0,
            risk_scaling_exponent: 0.5,
            max_baseline_probability: 0.95,
        }
    }
}

/// Coefficients of the four-way savings decomposition.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FinancialModelParams {
    /// Breach cost used when the caller supplies none.
    pub benchmark_breach_cost: Decimal,
    /// Ratio of the full economic loss of a breach to its headline cost.
    pub loss_multiplier: Decimal,
    /// Outage duration at which the downtime share applies unscaled.
    pub reference_downtime_hours: u32,
    pub include_downtime: bool,
    /// Shares of the monetary exposure. Must sum to 1.0.
    pub proportions: CostProportions,
}

impl Default for FinancialModelParams {
    fn default() -> Self {
        Self {
            benchmark_breach_cost: dec!(6_450_000),
            loss_multiplier: dec!(1.6),
            reference_downtime_hours: 24,
            include_downtime: true,
            proportions: CostProportions::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CostProportions {
    pub direct: Decimal,
    pub downtime: Decimal,
    pub regulatory: Decimal,
    pub reputation: Decimal,
}

impl CostProportions {
    pub fn sum(&self) -> Decimal {
        self.direct + self.downtime + self.regulatory + self.reputation
    }
}

impl Default for CostProportions {
    fn default() -> Self {
        Self {
            direct: dec!(0.625),
            downtime: dec!(0.09375),
            regulatory: dec!(0.09375),
            reputation: dec!(0.1875),
        }
    }
}

/// Coefficients of the monthly program cost estimate.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InvestmentParams {
    /// Monthly cost per protected asset at zero targeted effectiveness.
    pub base_cost_per_asset: Decimal,
    /// Relative cost increase per unit of targeted effectiveness.
    pub effectiveness_premium: Decimal,
}

impl Default for InvestmentParams {
    fn default() -> Self {
        Self {
            base_cost_per_asset: dec!(16),
            effectiveness_premium: dec!(0.75),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub asset_criticality: f64,
    pub downtime_hours: u32,
}

impl Default for InputDefaults {
    fn default() -> Self {
        let defaults = ParameterDefaults::default();
        Self {
            asset_criticality: defaults.asset_criticality,
            downtime_hours: defaults.downtime_hours,
        }
    }
}

/// Contains parameters for the Monte Carlo simulator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Simulation {
    pub trials: usize,
    pub lower_percentile: f64,
    pub upper_percentile: f64,
    /// Fixes the random stream. Runs without a seed vary from run to run.
    pub seed: Option<u64>,
    /// Half-width of the uniform jitter, as a fraction of the nominal value.
    pub attack_surface_jitter: f64,
    pub effectiveness_jitter: f64,
    pub breach_cost_jitter: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            trials: 1_000,
            lower_percentile: 10.0,
            upper_percentile: 90.0,
            seed: None,
            attack_surface_jitter: 0.20,
            effectiveness_jitter: 0.10,
            breach_cost_jitter: 0.25,
        }
    }
}

/// A labelled parameter set evaluated by the scenario runner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioDefinition {
    pub label: String,
    pub attack_surface_size: i64,
    pub zero_trust_effectiveness: f64,
    #[serde(default)]
    pub breach_cost: Option<Decimal>,
    #[serde(default)]
    pub asset_criticality: Option<f64>,
    #[serde(default)]
    pub downtime_hours: Option<i64>,
}

impl ScenarioDefinition {
    pub fn new(label: impl Into<String>, parameters: RawParameters) -> Self {
        Self {
            label: label.into(),
            attack_surface_size: parameters.attack_surface_size,
            zero_trust_effectiveness: parameters.zero_trust_effectiveness,
            breach_cost: parameters.breach_cost,
            asset_criticality: parameters.asset_criticality,
            downtime_hours: parameters.downtime_hours,
        }
    }

    pub fn parameters(&self) -> RawParameters {
        RawParameters {
            attack_surface_size: self.attack_surface_size,
            zero_trust_effectiveness: self.zero_trust_effectiveness,
            breach_cost: self.breach_cost,
            asset_criticality: self.asset_criticality,
            downtime_hours: self.downtime_hours,
        }
    }
}

/// The Conservative / Current Baseline / Optimistic comparison set.
pub fn default_scenarios() -> Vec<ScenarioDefinition> {
    let scenario = |label: &str, size: i64, effectiveness: f64, criticality: f64| {
        ScenarioDefinition {
            label: label.to_string(),
            attack_surface_size: size,
            zero_trust_effectiveness: effectiveness,
            breach_cost: None,
            asset_criticality: Some(criticality),
            downtime_hours: None,
        }
    };
    vec![
        scenario("Conservative", 1500, 0.60, 1.0),
        scenario("Current Baseline", 2500, 0.75, 2.0),
        scenario("Optimistic", 3500, 0.85, 2.5),
    ]
}

/// Candidate values for a sensitivity sweep. Omitted axes keep the value
/// from the `[parameters]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensitivityGrid {
    pub attack_surface_size: Option<Vec<i64>>,
    pub zero_trust_effectiveness: Option<Vec<f64>>,
    pub asset_criticality: Option<Vec<f64>>,
}

/// Presentation-independent report settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Report {
    /// Number of months in the cumulative savings projection.
    pub projection_months: u32,
}

impl Default for Report {
    fn default() -> Self {
        Self { projection_months: 6 }
    }
}
