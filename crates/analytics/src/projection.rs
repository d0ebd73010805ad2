use crate::error::AnalyticsError;
use rust_decimal::Decimal;

/// Running totals of a constant monthly saving: entry `k` holds `(k + 1) * monthly`.
pub fn cumulative_projection(monthly: Decimal, months: u32) -> Result<Vec<Decimal>, AnalyticsError> {
    (1..=months)
        .map(|month| {
            monthly.checked_mul(Decimal::from(month)).ok_or_else(|| {
                AnalyticsError::Calculation(format!("overflow projecting month {}", month))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accumulates_each_month() {
        assert_eq!(
            cumulative_projection(dec!(1.5), 4).unwrap(),
            vec![dec!(1.5), dec!(3.0), dec!(4.5), dec!(6.0)]
        );
    }

    #[test]
    fn zero_months_is_empty() {
        assert!(cumulative_projection(dec!(100), 0).unwrap().is_empty());
    }

    #[test]
    fn overflowing_month_is_an_error() {
        let err = cumulative_projection(Decimal::MAX / dec!(2.5), 3).unwrap_err();
        assert!(matches!(err, AnalyticsError::Calculation(m) if m.contains("month 3")));
    }
}
