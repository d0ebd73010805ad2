use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Ratio '{metric}' is undefined: {numerator} / {denominator}")]
    UndefinedRatio {
        metric: &'static str,
        numerator: Decimal,
        denominator: Decimal,
    },

    #[error("Financial model parameters from configuration are invalid: {0}")]
    InvalidParameters(String),

    #[error("Error in calculation: {0}")]
    Calculation(String),
}
