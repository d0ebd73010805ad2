//! # Zero Trust ROI Core Types
//!
//! The shared vocabulary of the estimation engine. Every other crate in the
//! workspace depends on this one.
//!
//! - `RawParameters`: caller-supplied inputs, optional fields still unresolved.
//! - `InputParameters`: the normalized, range-checked inputs of one calculation.
//! - `ConfidenceInterval`: a percentile-bounded range around a point estimate.
//! - `ValidationError`: the error returned when an input leaves its domain.

pub mod enums;
pub mod error;
pub mod structs;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use enums::ParameterField;
pub use error::ValidationError;
pub use structs::{ConfidenceInterval, InputParameters, RawParameters};
pub use validation::ParameterDefaults;
