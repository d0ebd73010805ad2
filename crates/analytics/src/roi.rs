use crate::error::AnalyticsError;
use crate::report::RoiResult;
use configuration::InvestmentParams;
use core_types::InputParameters;
use rust_decimal::prelude::*;

/// Estimates the monthly program cost and the return it buys.
///
/// Investment is `attack_surface_size * base_cost_per_asset * (1 + premium * effectiveness)`,
/// so targeting a higher effectiveness always costs more.
#[derive(Debug, Clone)]
pub struct RoiCalculator {
    params: InvestmentParams,
}

impl RoiCalculator {
    pub fn new(params: InvestmentParams) -> Result<Self, AnalyticsError> {
        if params.base_cost_per_asset < Decimal::ZERO {
            return Err(AnalyticsError::InvalidParameters(
                "base_cost_per_asset must not be negative".to_string(),
            ));
        }
        if params.effectiveness_premium < Decimal::ZERO {
            return Err(AnalyticsError::InvalidParameters(
                "effectiveness_premium must not be negative".to_string(),
            ));
        }
        Ok(Self { params })
    }

    pub fn estimate_investment(&self, params: &InputParameters) -> Result<Decimal, AnalyticsError> {
        let effectiveness = Decimal::from_f64(params.zero_trust_effectiveness).ok_or_else(|| {
            AnalyticsError::Calculation(format!(
                "effectiveness {} is not representable",
                params.zero_trust_effectiveness
            ))
        })?;
        let loading = self
            .params
            .effectiveness_premium
            .checked_mul(effectiveness)
            .and_then(|premium| Decimal::ONE.checked_add(premium));

        Decimal::from(params.attack_surface_size)
            .checked_mul(self.params.base_cost_per_asset)
            .zip(loading)
            .and_then(|(cost, loading)| cost.checked_mul(loading))
            .ok_or_else(|| AnalyticsError::Calculation("overflow estimating investment".to_string()))
    }

    /// Computes the ROI figures for `total_savings`.
    ///
    /// Fails with `UndefinedRatio` when either the investment or the savings
    /// is zero, instead of producing an infinite or meaningless ratio.
    pub fn calculate(
        &self,
        params: &InputParameters,
        total_savings: Decimal,
    ) -> Result<RoiResult, AnalyticsError> {
        let investment = self.estimate_investment(params)?;

        if investment.is_zero() {
            return Err(AnalyticsError::UndefinedRatio {
                metric: "roi_ratio",
                numerator: total_savings,
                denominator: investment,
            });
        }
        if total_savings.is_zero() {
            return Err(AnalyticsError::UndefinedRatio {
                metric: "cost_efficiency",
                numerator: investment,
                denominator: total_savings,
            });
        }

        let roi_ratio = total_savings
            .checked_div(investment)
            .ok_or_else(|| AnalyticsError::Calculation("overflow computing roi_ratio".to_string()))?;
        let cost_efficiency = investment.checked_div(total_savings).ok_or_else(|| {
            AnalyticsError::Calculation("overflow computing cost_efficiency".to_string())
        })?;

        tracing::debug!(%investment, %roi_ratio, "ROI calculated");
        Ok(RoiResult {
            estimated_monthly_investment: investment,
            roi_ratio,
            cost_efficiency,
            net_monthly_benefit: total_savings.checked_sub(investment).ok_or_else(|| {
                AnalyticsError::Calculation("overflow computing net_monthly_benefit".to_string())
            })?,
        })
    }
}
