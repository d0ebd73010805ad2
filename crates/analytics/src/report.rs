use crate::error::AnalyticsError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly savings split into the four cost categories a breach incurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialBreakdown {
    pub direct_breach_costs: Decimal,
    pub operational_downtime: Decimal,
    pub regulatory_compliance: Decimal,
    pub reputation_protection: Decimal,
}

impl FinancialBreakdown {
    /// Total estimated savings: the exact sum of the four categories.
    ///
    /// Fails with `Calculation` when the sum exceeds the `Decimal` range.
    pub fn total(&self) -> Result<Decimal, AnalyticsError> {
        self.categories()
            .iter()
            .try_fold(Decimal::ZERO, |sum, (_, amount)| sum.checked_add(*amount))
            .ok_or_else(|| AnalyticsError::Calculation("overflow computing total savings".to_string()))
    }

    /// The categories with their display-independent names, in report order.
    pub fn categories(&self) -> [(&'static str, Decimal); 4] {
        [
            ("direct_breach_costs", self.direct_breach_costs),
            ("operational_downtime", self.operational_downtime),
            ("regulatory_compliance", self.regulatory_compliance),
            ("reputation_protection", self.reputation_protection),
        ]
    }
}

/// Investment and return figures for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResult {
    pub estimated_monthly_investment: Decimal,
    /// Total savings divided by investment.
    pub roi_ratio: Decimal,
    /// Dollars spent per dollar saved.
    pub cost_efficiency: Decimal,
    pub net_monthly_benefit: Decimal,
}
