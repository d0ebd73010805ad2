use analytics::{FinancialBreakdown, RoiResult};
use chrono::{DateTime, Utc};
use core_types::{ConfidenceInterval, InputParameters};
use rust_decimal::Decimal;
use scenarios::ScenarioOutcome;
use serde::Serialize;
use uuid::Uuid;

/// Sampling details of the Monte Carlo run behind the intervals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub trials: usize,
    pub seed: Option<u64>,
    pub lower_percentile: f64,
    pub upper_percentile: f64,
    pub median_breaches_prevented: f64,
    pub median_total_savings: Decimal,
}

/// The monthly estimate for a single parameter set: point values, their
/// intervals, the savings decomposition and the return on investment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyEstimate {
    pub parameters: InputParameters,
    pub breaches_prevented: f64,
    pub breaches_interval: ConfidenceInterval<f64>,
    pub breakdown: FinancialBreakdown,
    pub total_savings: Decimal,
    pub savings_interval: ConfidenceInterval<Decimal>,
    pub simulation: SimulationSummary,
    pub roi: RoiResult,
    /// Cumulative savings at the end of each projected month.
    pub projection: Vec<Decimal>,
}

/// Everything the reporting layer needs: the headline estimate plus the
/// ordered scenario comparison.
#[derive(Debug, Serialize)]
pub struct ExecutiveReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub estimate: MonthlyEstimate,
    pub scenarios: Vec<ScenarioOutcome>,
}
