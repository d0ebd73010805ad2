//! # Zero Trust Financial Analytics
//!
//! Turns a breaches-prevented estimate into money: a four-category savings
//! breakdown, an estimated program investment with its ROI, and a cumulative
//! savings projection.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no knowledge of simulation, configuration files or output.
//! - **Exact money:** every dollar figure is a `Decimal`, so the breakdown sums
//!   to its total without rounding drift.
//!
//! ## Public API
//!
//! - `FinancialModel`: breaches prevented to `FinancialBreakdown`.
//! - `RoiCalculator`: investment estimate and `RoiResult`.
//! - `cumulative_projection`: running totals of monthly savings.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

pub mod error;
pub mod financial;
pub mod projection;
pub mod report;
pub mod roi;

pub use error::AnalyticsError;
pub use financial::FinancialModel;
pub use projection::cumulative_projection;
pub use report::{FinancialBreakdown, RoiResult};
pub use roi::RoiCalculator;
