use crate::error::SimulatorError;
use crate::random::{RandomSource, SeededStreams, StreamProvider};
use crate::stats::{median, percentile};
use analytics::FinancialModel;
use configuration::Simulation;
use core_types::{ConfidenceInterval, InputParameters};
use rayon::prelude::*;
use risk::RiskModel;
use rust_decimal::prelude::*;
use serde::Serialize;

/// The aggregated result of a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub trials: usize,
    /// Base seed of the run; replaying it reproduces the intervals.
    pub seed: Option<u64>,
    pub lower_percentile: f64,
    pub upper_percentile: f64,
    pub breaches_prevented: ConfidenceInterval<f64>,
    pub total_savings: ConfidenceInterval<Decimal>,
    pub median_breaches_prevented: f64,
    pub median_total_savings: Decimal,
}

/// Runs the risk and financial models under perturbed inputs.
pub struct MonteCarloSimulator<'a> {
    risk_model: &'a dyn RiskModel,
    financial_model: &'a FinancialModel,
    settings: Simulation,
}

impl<'a> MonteCarloSimulator<'a> {
    /// Creates a simulator, rejecting settings that cannot produce an interval.
    pub fn new(
        risk_model: &'a dyn RiskModel,
        financial_model: &'a FinancialModel,
        settings: Simulation,
    ) -> Result<Self, SimulatorError> {
        if settings.trials == 0 {
            return Err(SimulatorError::Configuration(
                "trial count must be greater than 0".to_string(),
            ));
        }
        let (lower, upper) = (settings.lower_percentile, settings.upper_percentile);
        if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) || lower >= upper {
            return Err(SimulatorError::Configuration(format!(
                "percentile pair ({}, {}) must satisfy 0 <= lower < upper <= 100",
                lower, upper
            )));
        }
        for (name, jitter) in [
            ("attack_surface_jitter", settings.attack_surface_jitter),
            ("effectiveness_jitter", settings.effectiveness_jitter),
            ("breach_cost_jitter", settings.breach_cost_jitter),
        ] {
            if !(0.0..=1.0).contains(&jitter) {
                return Err(SimulatorError::Configuration(format!(
                    "{} must be within [0.0, 1.0], got {}",
                    name, jitter
                )));
            }
        }

        Ok(Self {
            risk_model,
            financial_model,
            settings,
        })
    }

    pub fn settings(&self) -> &Simulation {
        &self.settings
    }

    /// Runs the configured number of trials, seeded from the settings.
    ///
    /// Without a configured seed a fresh one is drawn, and reported in the outcome.
    pub fn run(&self, params: &InputParameters) -> Result<SimulationOutcome, SimulatorError> {
        self.run_with(params, &SeededStreams::from_optional(self.settings.seed))
    }

    /// Runs the configured number of trials with streams from `provider`.
    pub fn run_with<P: StreamProvider>(
        &self,
        params: &InputParameters,
        provider: &P,
    ) -> Result<SimulationOutcome, SimulatorError> {
        let trials = self.settings.trials;
        tracing::info!(
            trials,
            seed = ?provider.seed(),
            threads = rayon::current_num_threads(),
            "Starting Monte Carlo simulation"
        );

        // --- 1. Point estimate from the unperturbed inputs ---
        let point_breaches = self.risk_model.breaches_prevented(params);
        let point_savings = self.financial_model.calculate(point_breaches, params)?.total()?;

        // --- 2. Independent trials ---
        let samples = (0..trials as u64)
            .into_par_iter()
            .map(|trial| {
                let mut stream = provider.stream(trial);
                let perturbed = self.perturb(params, &mut stream).map_err(|reason| {
                    SimulatorError::Perturbation { trial, reason }
                })?;
                let breaches = self.risk_model.breaches_prevented(&perturbed);
                let savings = self.financial_model.calculate(breaches, &perturbed)?.total()?;
                Ok((breaches, savings))
            })
            .collect::<Result<Vec<(f64, Decimal)>, SimulatorError>>()?;

        // --- 3. Aggregate the distributions ---
        let (mut breaches, mut savings): (Vec<f64>, Vec<Decimal>) = samples.into_iter().unzip();
        breaches.sort_by(f64::total_cmp);
        savings.sort();

        let breaches_prevented = self.interval(&breaches, point_breaches, "breaches_prevented")?;
        let total_savings = self.interval(&savings, point_savings, "total_savings")?;
        let outcome = SimulationOutcome {
            trials,
            seed: provider.seed(),
            lower_percentile: self.settings.lower_percentile,
            upper_percentile: self.settings.upper_percentile,
            breaches_prevented,
            total_savings,
            median_breaches_prevented: median(&breaches).unwrap_or(point_breaches),
            median_total_savings: median(&savings).unwrap_or(point_savings),
        };

        tracing::info!(
            lower = %outcome.total_savings.lower,
            upper = %outcome.total_savings.upper,
            "Monte Carlo simulation complete"
        );
        Ok(outcome)
    }

    /// Jitters the three uncertain inputs and clips them back into their domains.
    ///
    /// Draw order is fixed (surface, effectiveness, cost) so a stream always
    /// maps to the same perturbation. A jittered breach cost outside the
    /// `Decimal` range is an error.
    fn perturb<S: RandomSource>(
        &self,
        params: &InputParameters,
        stream: &mut S,
    ) -> Result<InputParameters, String> {
        let s = &self.settings;
        let surface_factor = jitter_factor(stream, s.attack_surface_jitter);
        let effectiveness_factor = jitter_factor(stream, s.effectiveness_jitter);
        let cost_factor = jitter_factor(stream, s.breach_cost_jitter);

        let attack_surface_size = (f64::from(params.attack_surface_size) * surface_factor)
            .round()
            .clamp(1.0, f64::from(u32::MAX)) as u32;
        let zero_trust_effectiveness =
            (params.zero_trust_effectiveness * effectiveness_factor).clamp(0.0, 1.0);
        let factor = Decimal::from_f64(cost_factor)
            .ok_or_else(|| format!("breach cost factor {} is not representable", cost_factor))?;
        let breach_cost = params
            .breach_cost
            .checked_mul(factor)
            .ok_or_else(|| format!("breach cost {} x {} overflows", params.breach_cost, factor))?
            .max(Decimal::ZERO);

        Ok(InputParameters {
            attack_surface_size,
            zero_trust_effectiveness,
            breach_cost,
            ..*params
        })
    }

    fn interval<T>(
        &self,
        sorted: &[T],
        point: T,
        quantity: &str,
    ) -> Result<ConfidenceInterval<T>, SimulatorError>
    where
        T: crate::stats::Interpolate + PartialOrd + std::fmt::Display,
    {
        let (lower, upper) = percentile(sorted, self.settings.lower_percentile)
            .zip(percentile(sorted, self.settings.upper_percentile))
            .ok_or_else(|| SimulatorError::Configuration("no trials were collected".to_string()))?;

        if point < lower || point > upper {
            tracing::warn!(
                quantity,
                %lower,
                %point,
                %upper,
                "Point estimate outside the sampled percentiles; widening interval"
            );
        }
        Ok(ConfidenceInterval::new(lower, point, upper))
    }
}

/// A multiplicative factor drawn uniformly from `[1 - jitter, 1 + jitter)`.
fn jitter_factor<S: RandomSource>(stream: &mut S, jitter: f64) -> f64 {
    stream.next_in_range(1.0 - jitter, 1.0 + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::FinancialModel;
    use configuration::{FinancialModelParams, RiskModelParams};
    use risk::ScaledRiskModel;
    use rust_decimal_macros::dec;

    /// Always returns the same draw, so every trial sees the same perturbation.
    struct FixedStreams(f64);

    struct FixedStream(f64);

    impl RandomSource for FixedStream {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    impl StreamProvider for FixedStreams {
        type Stream = FixedStream;

        fn stream(&self, _trial: u64) -> FixedStream {
            FixedStream(self.0)
        }
    }

    fn models() -> (ScaledRiskModel, FinancialModel) {
        (
            ScaledRiskModel::new(RiskModelParams::default()).unwrap(),
            FinancialModel::new(FinancialModelParams::default()).unwrap(),
        )
    }

    fn reference_params() -> InputParameters {
        InputParameters {
            attack_surface_size: 2500,
            zero_trust_effectiveness: 0.75,
            breach_cost: dec!(8_000_000),
            asset_criticality: 2.0,
            downtime_hours: 24,
        }
    }

    fn settings(trials: usize, seed: Option<u64>) -> Simulation {
        Simulation {
            trials,
            seed,
            ..Simulation::default()
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let (risk, financial) = models();
        let simulator = MonteCarloSimulator::new(&risk, &financial, settings(2_000, Some(42))).unwrap();

        let first = simulator.run(&reference_params()).unwrap();
        let second = simulator.run(&reference_params()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, Some(42));
    }

    #[test]
    fn results_do_not_depend_on_thread_count() {
        let (risk, financial) = models();
        let simulator = MonteCarloSimulator::new(&risk, &financial, settings(500, Some(9))).unwrap();

        let parallel = simulator.run(&reference_params()).unwrap();
        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| simulator.run(&reference_params()))
            .unwrap();
        assert_eq!(parallel, single);
    }

    #[test]
    fn interval_brackets_point_estimate() {
        let (risk, financial) = models();
        let simulator = MonteCarloSimulator::new(&risk, &financial, settings(1_000, Some(1))).unwrap();
        let outcome = simulator.run(&reference_params()).unwrap();

        let savings = outcome.total_savings;
        assert!(savings.lower <= savings.point && savings.point <= savings.upper);
        assert!(savings.lower < savings.upper);
        let breaches = outcome.breaches_prevented;
        assert!(breaches.lower <= breaches.point && breaches.point <= breaches.upper);
        assert!(breaches.contains(outcome.median_breaches_prevented));
    }

    #[test]
    fn zero_jitter_collapses_the_interval() {
        let (risk, financial) = models();
        let still = Simulation {
            attack_surface_jitter: 0.0,
            effectiveness_jitter: 0.0,
            breach_cost_jitter: 0.0,
            ..settings(50, None)
        };
        let simulator = MonteCarloSimulator::new(&risk, &financial, still).unwrap();
        let outcome = simulator.run_with(&reference_params(), &FixedStreams(0.5)).unwrap();

        assert!(outcome.total_savings.is_degenerate());
        assert_eq!(outcome.total_savings.lower, outcome.total_savings.point);
        assert_eq!(outcome.seed, None);
    }

    #[test]
    fn zero_effectiveness_is_degenerate_at_zero() {
        let (risk, financial) = models();
        let simulator = MonteCarloSimulator::new(&risk, &financial, settings(200, Some(3))).unwrap();
        let params = InputParameters {
            zero_trust_effectiveness: 0.0,
            ..reference_params()
        };
        let outcome = simulator.run(&params).unwrap();
        assert_eq!(outcome.breaches_prevented, ConfidenceInterval::degenerate(0.0));
        assert!(outcome.total_savings.upper.is_zero());
    }

    #[test]
    fn perturbation_stays_in_domain() {
        let (risk, financial) = models();
        let wide = Simulation {
            attack_surface_jitter: 1.0,
            effectiveness_jitter: 1.0,
            breach_cost_jitter: 1.0,
            ..settings(1, None)
        };
        let simulator = MonteCarloSimulator::new(&risk, &financial, wide).unwrap();
        let params = InputParameters {
            attack_surface_size: 1,
            zero_trust_effectiveness: 0.9,
            ..reference_params()
        };

        for draw in [0.0, 0.25, 0.999_999] {
            let perturbed = simulator.perturb(&params, &mut FixedStream(draw)).unwrap();
            assert!(perturbed.attack_surface_size >= 1);
            assert!((0.0..=1.0).contains(&perturbed.zero_trust_effectiveness));
            assert!(perturbed.breach_cost >= Decimal::ZERO);
        }
    }

    #[test]
    fn overflowing_breach_cost_fails_the_trial() {
        let (risk, financial) = models();
        let simulator = MonteCarloSimulator::new(&risk, &financial, settings(10, None)).unwrap();
        let params = InputParameters {
            attack_surface_size: 1,
            zero_trust_effectiveness: 0.5,
            breach_cost: Decimal::MAX,
            asset_criticality: 1.0,
            downtime_hours: 24,
        };

        // A draw of 0.9 scales the cost up by 1.2.
        let err = simulator.run_with(&params, &FixedStreams(0.9)).unwrap_err();
        assert!(matches!(err, SimulatorError::Perturbation { .. }));

        // Scaling down stays in range.
        let outcome = simulator.run_with(&params, &FixedStreams(0.1)).unwrap();
        assert_eq!(outcome.trials, 10);
    }

    #[test]
    fn zero_trials_is_a_configuration_error() {
        let (risk, financial) = models();
        let result = MonteCarloSimulator::new(&risk, &financial, settings(0, None));
        assert!(matches!(result, Err(SimulatorError::Configuration(_))));
    }

    #[test]
    fn inverted_percentiles_are_rejected() {
        let (risk, financial) = models();
        let inverted = Simulation {
            lower_percentile: 95.0,
            upper_percentile: 5.0,
            ..Simulation::default()
        };
        assert!(MonteCarloSimulator::new(&risk, &financial, inverted).is_err());
    }
}
