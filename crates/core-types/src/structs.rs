use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-supplied inputs for a single calculation, before validation.
///
/// Integer fields are signed so that out-of-domain values (e.g. a negative
/// downtime) survive deserialization and reach the validator, which reports
/// them against the offending field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawParameters {
    /// Count of critical assets/endpoints exposed to compromise.
    pub attack_surface_size: i64,
    /// Fractional risk reduction attributed to the Zero Trust control set.
    pub zero_trust_effectiveness: f64,
    /// Dollar cost of a single breach. Falls back to the industry benchmark.
    #[serde(default)]
    pub breach_cost: Option<Decimal>,
    #[serde(default)]
    pub asset_criticality: Option<f64>,
    /// Expected outage per breach, in hours.
    #[serde(default)]
    pub downtime_hours: Option<i64>,
}

/// The normalized, range-checked inputs of one calculation.
///
/// Only `RawParameters::validate` produces this type from user input, so every
/// downstream model may assume its fields are inside their domains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    pub attack_surface_size: u32,
    pub zero_trust_effectiveness: f64,
    pub breach_cost: Decimal,
    pub asset_criticality: f64,
    pub downtime_hours: u32,
}

/// A percentile-bounded range around an unperturbed point estimate.
///
/// `T` is the unit of the bounded quantity: `f64` for breaches prevented,
/// `Decimal` for dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval<T> {
    pub lower: T,
    pub point: T,
    pub upper: T,
}

impl<T: PartialOrd + Copy> ConfidenceInterval<T> {
    /// Builds an interval, widening the bounds where needed so that
    /// `lower <= point <= upper` always holds.
    pub fn new(lower: T, point: T, upper: T) -> Self {
        let lower = if point < lower { point } else { lower };
        let upper = if point > upper { point } else { upper };
        Self { lower, point, upper }
    }

    /// An interval collapsed onto its point estimate.
    pub fn degenerate(point: T) -> Self {
        Self {
            lower: point,
            point,
            upper: point,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn interval_keeps_ordered_bounds() {
        let ci = ConfidenceInterval::new(1.0, 2.0, 3.0);
        assert_eq!((ci.lower, ci.point, ci.upper), (1.0, 2.0, 3.0));
        assert!(!ci.is_degenerate());
    }

    #[test]
    fn interval_widens_to_contain_point() {
        let below = ConfidenceInterval::new(dec!(10), dec!(5), dec!(20));
        assert_eq!(below.lower, dec!(5));

        let above = ConfidenceInterval::new(dec!(10), dec!(25), dec!(20));
        assert_eq!(above.upper, dec!(25));
        assert!(above.contains(dec!(25)));
    }

    #[test]
    fn degenerate_interval_collapses() {
        let ci = ConfidenceInterval::degenerate(0.0);
        assert!(ci.is_degenerate());
        assert_eq!(ci.lower, ci.point);
    }

    #[test]
    fn raw_parameters_deserialize_with_missing_optionals() {
        let raw: RawParameters = serde_json::from_str(
            r#"{ "attack_surface_size": 1500, "zero_trust_effectiveness": 0.6 }"#,
        )
        .unwrap();
        assert_eq!(raw.attack_surface_size, 1500);
        assert!(raw.breach_cost.is_none());
        assert!(raw.asset_criticality.is_none());
        assert!(raw.downtime_hours.is_none());
    }
}
