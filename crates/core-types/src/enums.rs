use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a single input field of a calculation.
///
/// Used by `ValidationError` to name the field that violated its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterField {
    AttackSurfaceSize,
    ZeroTrustEffectiveness,
    BreachCost,
    AssetCriticality,
    DowntimeHours,
}

impl ParameterField {
    /// The snake_case name used in configuration files and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterField::AttackSurfaceSize => "attack_surface_size",
            ParameterField::ZeroTrustEffectiveness => "zero_trust_effectiveness",
            ParameterField::BreachCost => "breach_cost",
            ParameterField::AssetCriticality => "asset_criticality",
            ParameterField::DowntimeHours => "downtime_hours",
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
