use crate::error::ScenarioError;
use analytics::{FinancialBreakdown, RoiResult};
use core_types::InputParameters;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The point-estimate pipeline output for one labelled parameter set.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScenarioResult {
    pub label: String,
    pub parameters: InputParameters,
    pub breaches_prevented: f64,
    pub breakdown: FinancialBreakdown,
    pub total_savings: Decimal,
    pub roi: RoiResult,
}

/// One entry of a scenario batch: either a result or the error that stopped it.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub label: String,
    pub result: Result<ScenarioResult, ScenarioError>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

// Errors are not serializable, so a failed scenario is written as its message.
impl Serialize for ScenarioOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScenarioOutcome", 3)?;
        state.serialize_field("label", &self.label)?;
        match &self.result {
            Ok(result) => {
                state.serialize_field("result", &Some(result))?;
                state.serialize_field("error", &None::<String>)?;
            }
            Err(error) => {
                state.serialize_field("result", &None::<&ScenarioResult>)?;
                state.serialize_field("error", &Some(error.to_string()))?;
            }
        }
        state.end()
    }
}
