//! # Zero Trust Scenario Runner
//!
//! Executes the point-estimate pipeline (validate, risk, financial, ROI) for
//! an ordered list of labelled parameter sets and collects comparable results.
//!
//! Scenarios are data, not code: a new scenario is another
//! `ScenarioDefinition`, either written by hand or generated from a
//! `SensitivityGrid` by `expand_grid`.

pub mod error;
pub mod generator;
pub mod result;

pub use error::ScenarioError;
pub use generator::expand_grid;
pub use result::{ScenarioOutcome, ScenarioResult};

use analytics::{FinancialModel, RoiCalculator};
use configuration::ScenarioDefinition;
use core_types::{ParameterDefaults, RawParameters};
use rayon::prelude::*;
use risk::RiskModel;

/// Runs the point-estimate pipeline for labelled parameter sets.
pub struct ScenarioRunner<'a> {
    risk_model: &'a dyn RiskModel,
    financial_model: &'a FinancialModel,
    roi_calculator: &'a RoiCalculator,
    defaults: ParameterDefaults,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(
        risk_model: &'a dyn RiskModel,
        financial_model: &'a FinancialModel,
        roi_calculator: &'a RoiCalculator,
        defaults: ParameterDefaults,
    ) -> Self {
        Self {
            risk_model,
            financial_model,
            roi_calculator,
            defaults,
        }
    }

    /// Validates `raw` and runs it through every model.
    pub fn evaluate(&self, label: &str, raw: &RawParameters) -> Result<ScenarioResult, ScenarioError> {
        let parameters = raw.validate(&self.defaults)?;
        let breaches_prevented = self.risk_model.breaches_prevented(&parameters);
        let breakdown = self.financial_model.calculate(breaches_prevented, &parameters)?;
        let total_savings = breakdown.total()?;
        let roi = self.roi_calculator.calculate(&parameters, total_savings)?;

        Ok(ScenarioResult {
            label: label.to_string(),
            parameters,
            breaches_prevented,
            breakdown,
            total_savings,
            roi,
        })
    }

    /// Evaluates every scenario, preserving input order.
    ///
    /// A failing scenario is reported in its own outcome and never aborts the others.
    pub fn run(&self, scenarios: &[ScenarioDefinition]) -> Vec<ScenarioOutcome> {
        tracing::info!(count = scenarios.len(), "Running scenarios");

        let outcomes: Vec<ScenarioOutcome> = scenarios
            .par_iter()
            .map(|scenario| {
                let result = self.evaluate(&scenario.label, &scenario.parameters());
                if let Err(e) = &result {
                    tracing::warn!(label = %scenario.label, error = %e, "Scenario failed");
                }
                ScenarioOutcome {
                    label: scenario.label.clone(),
                    result,
                }
            })
            .collect();

        tracing::info!(
            completed = outcomes.iter().filter(|o| o.is_ok()).count(),
            failed = outcomes.iter().filter(|o| !o.is_ok()).count(),
            "Scenario batch complete"
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configuration::{
        default_scenarios, FinancialModelParams, InvestmentParams, RiskModelParams,
    };
    use core_types::ParameterField;
    use risk::ScaledRiskModel;
    use rust_decimal::Decimal;

    struct Models {
        risk: ScaledRiskModel,
        financial: FinancialModel,
        roi: RoiCalculator,
    }

    impl Models {
        fn new() -> Self {
            Self {
                risk: ScaledRiskModel::new(RiskModelParams::default()).unwrap(),
                financial: FinancialModel::new(FinancialModelParams::default()).unwrap(),
                roi: RoiCalculator::new(InvestmentParams::default()).unwrap(),
            }
        }

        fn runner(&self) -> ScenarioRunner<'_> {
            ScenarioRunner::new(&self.risk, &self.financial, &self.roi, ParameterDefaults::default())
        }
    }

    #[test]
    fn preserves_order_and_labels() {
        let models = Models::new();
        let outcomes = models.runner().run(&default_scenarios());

        let labels: Vec<_> = outcomes.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Conservative", "Current Baseline", "Optimistic"]);
        assert!(outcomes.iter().all(ScenarioOutcome::is_ok));
    }

    #[test]
    fn results_are_internally_consistent() {
        let models = Models::new();
        for outcome in models.runner().run(&default_scenarios()) {
            let result = outcome.result.unwrap();
            assert_eq!(result.label, outcome.label);
            assert_eq!(result.breakdown.total().unwrap(), result.total_savings);
            assert_eq!(
                result.breaches_prevented,
                models.risk.breaches_prevented(&result.parameters)
            );
            let recovered = result.roi.roi_ratio * result.roi.estimated_monthly_investment;
            assert!((recovered - result.total_savings).abs() < Decimal::new(1, 6));
        }
    }

    #[test]
    fn failure_is_isolated_to_its_scenario() {
        let models = Models::new();
        let mut scenarios = default_scenarios();
        scenarios[1].zero_trust_effectiveness = 1.5;

        let outcomes = models.runner().run(&scenarios);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(outcomes[2].is_ok());
        match &outcomes[1].result {
            Err(ScenarioError::Validation(e)) => {
                assert_eq!(e.field, ParameterField::ZeroTrustEffectiveness)
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn zero_effectiveness_reports_undefined_ratio() {
        let models = Models::new();
        let mut scenarios = default_scenarios();
        scenarios[0].zero_trust_effectiveness = 0.0;

        let outcomes = models.runner().run(&scenarios);
        assert!(matches!(
            outcomes[0].result,
            Err(ScenarioError::Analytics(analytics::AnalyticsError::UndefinedRatio { .. }))
        ));
    }

    #[test]
    fn failed_outcome_serializes_its_message() {
        let models = Models::new();
        let mut scenarios = default_scenarios();
        scenarios.truncate(1);
        scenarios[0].attack_surface_size = 0;

        let json = serde_json::to_value(models.runner().run(&scenarios)).unwrap();
        assert_eq!(json[0]["label"], "Conservative");
        assert!(json[0]["result"].is_null());
        assert!(json[0]["error"].as_str().unwrap().contains("attack_surface_size"));
    }
}
