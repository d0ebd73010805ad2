use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] configuration::error::ConfigError),

    #[error("Risk model error: {0}")]
    Risk(#[from] risk::RiskError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] simulator::SimulatorError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] scenarios::ScenarioError),
}
