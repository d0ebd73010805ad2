//! # Zero Trust ROI Engine
//!
//! Wires the validator, risk model, financial model, ROI calculator, Monte
//! Carlo simulator and scenario runner into one in-process computation:
//! configuration in, `ExecutiveReport` out.
//!
//! Every call is a pure function of the configuration and, for the
//! simulator, its random stream. Nothing is cached between calls.

pub mod error;
pub mod report;

pub use error::EngineError;
pub use report::{ExecutiveReport, MonthlyEstimate, SimulationSummary};

use analytics::{cumulative_projection, FinancialModel, RoiCalculator};
use chrono::Utc;
use configuration::{Config, ScenarioDefinition};
use core_types::RawParameters;
use risk::ScaledRiskModel;
use scenarios::{expand_grid, ScenarioError, ScenarioOutcome, ScenarioRunner};
use simulator::MonteCarloSimulator;
use uuid::Uuid;

/// The label under which the headline parameter set is evaluated.
const HEADLINE_LABEL: &str = "Headline";

/// The estimation engine, built once from a validated configuration.
pub struct Estimator {
    config: Config,
    risk_model: ScaledRiskModel,
    financial_model: FinancialModel,
    roi_calculator: RoiCalculator,
}

impl Estimator {
    /// Builds every model, rejecting invalid constants before any calculation runs.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        config.validate()?;
        let risk_model = ScaledRiskModel::new(config.model.risk.clone())?;
        let financial_model = FinancialModel::new(config.model.financial.clone())?;
        let roi_calculator = RoiCalculator::new(config.model.investment.clone())?;

        Ok(Self {
            config,
            risk_model,
            financial_model,
            roi_calculator,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn runner(&self) -> ScenarioRunner<'_> {
        ScenarioRunner::new(
            &self.risk_model,
            &self.financial_model,
            &self.roi_calculator,
            self.config.model.parameter_defaults(),
        )
    }

    /// Produces the point estimate and Monte Carlo intervals for `raw`.
    pub fn estimate(&self, raw: &RawParameters) -> Result<MonthlyEstimate, EngineError> {
        // --- 1. Point estimate: validate -> risk -> financial -> ROI ---
        let point = self.runner().evaluate(HEADLINE_LABEL, raw)?;

        // --- 2. Uncertainty around it ---
        let simulator = MonteCarloSimulator::new(
            &self.risk_model,
            &self.financial_model,
            self.config.simulation.clone(),
        )?;
        let outcome = simulator.run(&point.parameters)?;

        // --- 3. Projection ---
        let projection =
            cumulative_projection(point.total_savings, self.config.report.projection_months)?;

        tracing::info!(
            breaches_prevented = point.breaches_prevented,
            total_savings = %point.total_savings,
            roi_ratio = %point.roi.roi_ratio,
            "Monthly estimate complete"
        );

        Ok(MonthlyEstimate {
            parameters: point.parameters,
            breaches_prevented: point.breaches_prevented,
            breaches_interval: outcome.breaches_prevented,
            breakdown: point.breakdown,
            total_savings: point.total_savings,
            savings_interval: outcome.total_savings,
            simulation: SimulationSummary {
                trials: outcome.trials,
                seed: outcome.seed,
                lower_percentile: outcome.lower_percentile,
                upper_percentile: outcome.upper_percentile,
                median_breaches_prevented: outcome.median_breaches_prevented,
                median_total_savings: outcome.median_total_savings,
            },
            roi: point.roi,
            projection,
        })
    }

    /// The configured named scenarios followed by any sensitivity-grid expansions.
    ///
    /// A grid label that repeats a named scenario's label is rejected.
    pub fn scenario_definitions(&self) -> Result<Vec<ScenarioDefinition>, EngineError> {
        let mut definitions = self.config.scenarios.clone();
        if let Some(grid) = &self.config.grid {
            let expanded = expand_grid(grid, &self.config.parameters)?;
            if let Some(clash) = expanded
                .iter()
                .find(|generated| definitions.iter().any(|named| named.label == generated.label))
            {
                return Err(ScenarioError::Grid(format!(
                    "grid scenario '{}' clashes with a named scenario",
                    clash.label
                ))
                .into());
            }
            definitions.extend(expanded);
        }
        Ok(definitions)
    }

    /// Evaluates every scenario; individual failures are reported per entry.
    pub fn run_scenarios(&self) -> Result<Vec<ScenarioOutcome>, EngineError> {
        let definitions = self.scenario_definitions()?;
        Ok(self.runner().run(&definitions))
    }

    /// Builds the full report for the configured headline parameters.
    pub fn build_report(&self) -> Result<ExecutiveReport, EngineError> {
        let estimate = self.estimate(&self.config.parameters)?;
        let scenarios = self.run_scenarios()?;

        Ok(ExecutiveReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            estimate,
            scenarios,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configuration::{CostProportions, SensitivityGrid};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn invalid_constants_fail_construction() {
        let mut config = Config::default();
        config.model.financial.proportions = CostProportions {
            reputation: dec!(0.5),
            ..CostProportions::default()
        };
        assert!(matches!(Estimator::new(config), Err(EngineError::Analytics(_))));

        let mut config = Config::default();
        config.model.risk.risk_scaling_exponent = 0.0;
        assert!(matches!(Estimator::new(config), Err(EngineError::Risk(_))));
    }

    #[test]
    fn zero_trials_is_reported_as_simulation_error() {
        let mut config = Config::default();
        config.simulation.trials = 0;
        let estimator = Estimator::new(config).unwrap();

        let err = estimator.estimate(&estimator.config().parameters).unwrap_err();
        assert!(matches!(err, EngineError::Simulation(simulator::SimulatorError::Configuration(_))));
    }

    #[test]
    fn grid_scenarios_follow_named_ones() {
        let mut config = Config::default();
        config.grid = Some(SensitivityGrid {
            zero_trust_effectiveness: Some(vec![0.5, 0.95]),
            ..SensitivityGrid::default()
        });
        let estimator = Estimator::new(config).unwrap();

        let labels: Vec<_> = estimator
            .run_scenarios()
            .unwrap()
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(
            labels,
            ["Conservative", "Current Baseline", "Optimistic", "eff=0.5", "eff=0.95"]
        );
    }

    #[test]
    fn grid_label_matching_a_named_scenario_is_rejected() {
        let mut config = Config::default();
        config.scenarios.push(configuration::ScenarioDefinition::new(
            "eff=0.9",
            config.parameters.clone(),
        ));
        config.grid = Some(SensitivityGrid {
            zero_trust_effectiveness: Some(vec![0.6, 0.9]),
            ..SensitivityGrid::default()
        });
        let estimator = Estimator::new(config).unwrap();

        let err = estimator.run_scenarios().unwrap_err();
        assert!(matches!(err, EngineError::Scenario(ScenarioError::Grid(m)) if m.contains("eff=0.9")));
    }

    #[test]
    fn savings_beyond_decimal_range_are_reported_not_panicked() {
        let mut config = Config::default();
        config.simulation.trials = 20;
        config.simulation.seed = Some(11);
        let estimator = Estimator::new(config).unwrap();

        // Exposure itself overflows.
        let huge = RawParameters {
            attack_surface_size: 4_000_000_000,
            zero_trust_effectiveness: 1.0,
            breach_cost: Some(Decimal::MAX / dec!(2)),
            asset_criticality: Some(3.0),
            downtime_hours: Some(24),
        };
        let err = estimator.estimate(&huge).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Scenario(ScenarioError::Analytics(analytics::AnalyticsError::Calculation(_)))
        ));

        // Monthly savings fit, but the cumulative projection does not.
        let large = RawParameters {
            breach_cost: Some(dec!(10_000_000_000_000_000_000_000_000_000)),
            ..huge
        };
        let err = estimator.estimate(&large).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Analytics(analytics::AnalyticsError::Calculation(_))
        ));
    }

    #[test]
    fn projection_accumulates_monthly_savings() {
        let mut config = Config::default();
        config.simulation.trials = 100;
        config.simulation.seed = Some(5);
        config.report.projection_months = 3;
        let estimator = Estimator::new(config).unwrap();

        let estimate = estimator.estimate(&estimator.config().parameters).unwrap();
        assert_eq!(estimate.projection.len(), 3);
        assert_eq!(estimate.projection[2], estimate.total_savings * dec!(3));
    }
}
