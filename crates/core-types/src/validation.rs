//! The Parameter Validator.
//!
//! Substitutes defaults for absent optional fields, then range-checks every
//! field. A defaulted breach cost comes from the model's benchmark and is not
//! subject to the user-input check.

use crate::enums::ParameterField;
use crate::error::ValidationError;
use crate::structs::{InputParameters, RawParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const MIN_EFFECTIVENESS: f64 = 0.0;
pub const MAX_EFFECTIVENESS: f64 = 1.0;
pub const MIN_CRITICALITY: f64 = 1.0;
pub const MAX_CRITICALITY: f64 = 3.0;

/// Values substituted for the optional fields of `RawParameters`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDefaults {
    pub breach_cost: Decimal,
    pub asset_criticality: f64,
    pub downtime_hours: u32,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            // Energy-sector average cost of a data breach.
            breach_cost: dec!(6_450_000),
            asset_criticality: 2.0,
            downtime_hours: 24,
        }
    }
}

impl RawParameters {
    /// Produces normalized `InputParameters` or the first field that violates its domain.
    ///
    /// Fields are checked in declaration order.
    pub fn validate(&self, defaults: &ParameterDefaults) -> Result<InputParameters, ValidationError> {
        // --- 1. Attack surface ---
        if self.attack_surface_size <= 0 {
            return Err(ValidationError::new(
                ParameterField::AttackSurfaceSize,
                "must be greater than 0",
                self.attack_surface_size,
            ));
        }
        let attack_surface_size = u32::try_from(self.attack_surface_size).map_err(|_| {
            ValidationError::new(
                ParameterField::AttackSurfaceSize,
                format!("must not exceed {}", u32::MAX),
                self.attack_surface_size,
            )
        })?;

        // --- 2. Effectiveness ---
        let effectiveness = self.zero_trust_effectiveness;
        if !(MIN_EFFECTIVENESS..=MAX_EFFECTIVENESS).contains(&effectiveness) {
            // NaN also lands here, since it is never contained in a range.
            return Err(ValidationError::new(
                ParameterField::ZeroTrustEffectiveness,
                "must be within [0.0, 1.0]",
                effectiveness,
            ));
        }

        // --- 3. Breach cost ---
        let breach_cost = match self.breach_cost {
            Some(cost) if cost < Decimal::ZERO => {
                return Err(ValidationError::new(
                    ParameterField::BreachCost,
                    "must not be negative",
                    cost,
                ));
            }
            Some(cost) => cost,
            None => defaults.breach_cost,
        };

        // --- 4. Criticality ---
        let asset_criticality = self.asset_criticality.unwrap_or(defaults.asset_criticality);
        if !(MIN_CRITICALITY..=MAX_CRITICALITY).contains(&asset_criticality) {
            return Err(ValidationError::new(
                ParameterField::AssetCriticality,
                "must be within [1.0, 3.0]",
                asset_criticality,
            ));
        }

        // --- 5. Downtime ---
        let downtime_hours = match self.downtime_hours {
            Some(hours) if hours < 0 => {
                return Err(ValidationError::new(
                    ParameterField::DowntimeHours,
                    "must not be negative",
                    hours,
                ));
            }
            Some(hours) => u32::try_from(hours).map_err(|_| {
                ValidationError::new(
                    ParameterField::DowntimeHours,
                    format!("must not exceed {}", u32::MAX),
                    hours,
                )
            })?,
            None => defaults.downtime_hours,
        };

        let params = InputParameters {
            attack_surface_size,
            zero_trust_effectiveness: effectiveness,
            breach_cost,
            asset_criticality,
            downtime_hours,
        };
        tracing::debug!(?params, "Parameters validated");
        Ok(params)
    }
}
