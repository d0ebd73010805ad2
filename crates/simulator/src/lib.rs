//! # Zero Trust Monte Carlo Simulator
//!
//! Quantifies the uncertainty of the point estimate. Each trial jitters the
//! attack surface, effectiveness and breach cost, re-runs the risk and
//! financial models, and records the result; percentiles of the collected
//! distribution bound the estimate.
//!
//! Trials are independent and run on the rayon pool. Every trial draws from
//! its own stream derived from the base seed and the trial index, so a seeded
//! run produces the same interval on any number of threads.

pub mod error;
pub mod monte_carlo;
pub mod random;
pub mod stats;

pub use error::SimulatorError;
pub use monte_carlo::{MonteCarloSimulator, SimulationOutcome};
pub use random::{RandomSource, SeededStream, SeededStreams, StreamProvider};
