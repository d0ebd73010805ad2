use analytics::AnalyticsError;
use core_types::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Sensitivity grid error: {0}")]
    Grid(String),
}
