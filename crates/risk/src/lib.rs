//! # Zero Trust Risk Model
//!
//! Converts validated inputs into `breaches_prevented`, the model's continuous
//! estimate of breaches averted per month.
//!
//! - **Pure logic:** no I/O, no state between calls.
//! - **Swappable:** the estimation engine works against the `RiskModel` trait,
//!   so a differently shaped risk curve needs no change elsewhere.

pub mod error;
pub mod scaled_model;

pub use error::RiskError;
pub use scaled_model::ScaledRiskModel;

use core_types::InputParameters;

/// The interface between the estimation pipeline and a risk curve.
///
/// The `Send + Sync` bounds let one model instance be shared by the parallel
/// Monte Carlo trials.
pub trait RiskModel: Send + Sync {
    /// Monthly breach likelihood with no Zero Trust controls in place.
    fn baseline_probability(&self, attack_surface_size: u32) -> f64;

    /// Consequence-weighted breaches averted per month. Never negative, and
    /// exactly zero when `zero_trust_effectiveness` is zero.
    fn breaches_prevented(&self, params: &InputParameters) -> f64;
}
