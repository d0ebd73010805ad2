use analytics::AnalyticsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Simulation configuration error: {0}")]
    Configuration(String),

    #[error("Trial {trial} could not perturb its inputs: {reason}")]
    Perturbation { trial: u64, reason: String },

    #[error("Financial model failed during a trial: {0}")]
    Analytics(#[from] AnalyticsError),
}
