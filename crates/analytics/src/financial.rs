use crate::error::AnalyticsError;
use crate::report::FinancialBreakdown;
use configuration::FinancialModelParams;
use core_types::InputParameters;
use rust_decimal::prelude::*;

/// A stateless calculator that decomposes prevented breaches into savings.
///
/// The monetary exposure `breaches_prevented * breach_cost * loss_multiplier`
/// is split by the configured proportions. The downtime share is further
/// scaled by `downtime_hours / reference_downtime_hours`.
#[derive(Debug, Clone)]
pub struct FinancialModel {
    params: FinancialModelParams,
}

impl FinancialModel {
    pub fn new(params: FinancialModelParams) -> Result<Self, AnalyticsError> {
        let p = &params.proportions;
        if [p.direct, p.downtime, p.regulatory, p.reputation]
            .iter()
            .any(|share| *share < Decimal::ZERO)
        {
            return Err(AnalyticsError::InvalidParameters(
                "cost proportions must not be negative".to_string(),
            ));
        }
        if p.sum() != Decimal::ONE {
            return Err(AnalyticsError::InvalidParameters(format!(
                "cost proportions must sum to 1.0, got {}",
                p.sum()
            )));
        }
        if params.loss_multiplier < Decimal::ZERO {
            return Err(AnalyticsError::InvalidParameters(
                "loss_multiplier must not be negative".to_string(),
            ));
        }
        if params.benchmark_breach_cost < Decimal::ZERO {
            return Err(AnalyticsError::InvalidParameters(
                "benchmark_breach_cost must not be negative".to_string(),
            ));
        }
        if params.reference_downtime_hours == 0 {
            return Err(AnalyticsError::InvalidParameters(
                "reference_downtime_hours must be greater than 0".to_string(),
            ));
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &FinancialModelParams {
        &self.params
    }

    /// Splits the exposure of `breaches_prevented` into the four cost categories.
    ///
    /// # Arguments
    ///
    /// * `breaches_prevented` - The risk model's estimate for `params`.
    /// * `params` - Supplies the breach cost and expected downtime.
    pub fn calculate(
        &self,
        breaches_prevented: f64,
        params: &InputParameters,
    ) -> Result<FinancialBreakdown, AnalyticsError> {
        let breaches = Decimal::from_f64(breaches_prevented).ok_or_else(|| {
            AnalyticsError::Calculation(format!(
                "breaches_prevented {} is not representable",
                breaches_prevented
            ))
        })?;

        // --- 1. Monetary exposure ---
        let base = checked_mul(breaches, params.breach_cost, "breach exposure")?;
        let base = checked_mul(base, self.params.loss_multiplier, "loss exposure")?;

        // --- 2. Category shares ---
        let p = &self.params.proportions;
        let downtime_scale = Decimal::from(params.downtime_hours)
            / Decimal::from(self.params.reference_downtime_hours);
        let operational_downtime = if self.params.include_downtime {
            checked_mul(checked_mul(base, p.downtime, "downtime")?, downtime_scale, "downtime")?
        } else {
            Decimal::ZERO
        };

        let breakdown = FinancialBreakdown {
            direct_breach_costs: checked_mul(base, p.direct, "direct costs")?,
            operational_downtime,
            regulatory_compliance: checked_mul(base, p.regulatory, "regulatory")?,
            reputation_protection: checked_mul(base, p.reputation, "reputation")?,
        };

        let total = breakdown.total()?;
        tracing::debug!(%base, %total, "Financial breakdown calculated");
        Ok(breakdown)
    }
}

fn checked_mul(lhs: Decimal, rhs: Decimal, what: &str) -> Result<Decimal, AnalyticsError> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| AnalyticsError::Calculation(format!("overflow computing {}", what)))
}
