use crate::error::RiskError;
use crate::RiskModel;
use configuration::RiskModelParams;
use core_types::InputParameters;

/// A power-law risk curve.
///
/// The baseline grows with `(attack_surface_size / reference)^exponent`, so
/// each additional asset adds less residual risk than the one before. The
/// baseline is capped, reduced by the Zero Trust effectiveness, and finally
/// weighted by asset criticality.
#[derive(Debug, Clone)]
pub struct ScaledRiskModel {
    params: RiskModelParams,
}

impl ScaledRiskModel {
    /// Creates a new `ScaledRiskModel` with the given configuration parameters.
    pub fn new(params: RiskModelParams) -> Result<Self, RiskError> {
        // Validate that the curve is sub-linear, finite and yields probabilities.
        if !(0.0..=1.0).contains(&params.baseline_breach_probability) {
            return Err(RiskError::InvalidParameters(
                "baseline_breach_probability must be between 0 and 1".to_string(),
            ));
        }
        if !params.reference_attack_surface.is_finite() || params.reference_attack_surface <= 0.0 {
            return Err(RiskError::InvalidParameters(
                "reference_attack_surface must be a positive number".to_string(),
            ));
        }
        if !(params.risk_scaling_exponent > 0.0 && params.risk_scaling_exponent <= 1.0) {
            return Err(RiskError::InvalidParameters(
                "risk_scaling_exponent must be in (0, 1]".to_string(),
            ));
        }
        if !(params.max_baseline_probability > 0.0 && params.max_baseline_probability <= 1.0) {
            return Err(RiskError::InvalidParameters(
                "max_baseline_probability must be in (0, 1]".to_string(),
            ));
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &RiskModelParams {
        &self.params
    }
}

impl RiskModel for ScaledRiskModel {
    fn baseline_probability(&self, attack_surface_size: u32) -> f64 {
        let relative_size = f64::from(attack_surface_size) / self.params.reference_attack_surface;
        let scaled = self.params.baseline_breach_probability
            * relative_size.powf(self.params.risk_scaling_exponent);
        scaled.min(self.params.max_baseline_probability)
    }

    fn breaches_prevented(&self, params: &InputParameters) -> f64 {
        let baseline = self.baseline_probability(params.attack_surface_size);

        // Risk removed by the controls, then weighted by consequence severity.
        let prevented = baseline * params.zero_trust_effectiveness * params.asset_criticality;

        tracing::debug!(
            attack_surface_size = params.attack_surface_size,
            baseline,
            prevented,
            "Risk model evaluated"
        );
        prevented.max(0.0)
    }
}
