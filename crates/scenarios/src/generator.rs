use crate::error::ScenarioError;
use configuration::{ScenarioDefinition, SensitivityGrid};
use core_types::RawParameters;
use itertools::{iproduct, Itertools};

/// Generates every combination of the grid's candidate values.
///
/// Axes the grid omits keep the value from `base`. Each scenario is labelled
/// by the axes that vary, e.g. `surface=2500 eff=0.75`. Values are printed in
/// full, so two labels match only when their values do.
pub fn expand_grid(
    grid: &SensitivityGrid,
    base: &RawParameters,
) -> Result<Vec<ScenarioDefinition>, ScenarioError> {
    if grid.attack_surface_size.is_none()
        && grid.zero_trust_effectiveness.is_none()
        && grid.asset_criticality.is_none()
    {
        return Err(ScenarioError::Grid(
            "grid must define at least one axis".to_string(),
        ));
    }

    // 1. Convert all axes into concrete lists; an omitted axis is a single `None`.
    let surfaces = axis(&grid.attack_surface_size, "attack_surface_size")?;
    let effectiveness = axis(&grid.zero_trust_effectiveness, "zero_trust_effectiveness")?;
    let criticality = axis(&grid.asset_criticality, "asset_criticality")?;

    // 2. Walk the cartesian product, overriding the base parameters.
    let scenarios: Vec<ScenarioDefinition> = iproduct!(surfaces, effectiveness, criticality)
        .map(|(surface, eff, crit)| {
            let mut parameters = base.clone();
            let mut label = Vec::with_capacity(3);
            if let Some(surface) = surface {
                parameters.attack_surface_size = surface;
                label.push(format!("surface={}", surface));
            }
            if let Some(eff) = eff {
                parameters.zero_trust_effectiveness = eff;
                label.push(format!("eff={}", eff));
            }
            if let Some(crit) = crit {
                parameters.asset_criticality = Some(crit);
                label.push(format!("crit={}", crit));
            }
            ScenarioDefinition::new(label.join(" "), parameters)
        })
        .collect();

    if let Some(label) = scenarios.iter().map(|s| s.label.as_str()).duplicates().next() {
        return Err(ScenarioError::Grid(format!(
            "grid produces duplicate scenario '{}'",
            label
        )));
    }

    Ok(scenarios)
}

fn axis<T: Copy>(values: &Option<Vec<T>>, name: &str) -> Result<Vec<Option<T>>, ScenarioError> {
    match values {
        None => Ok(vec![None]),
        Some(values) if values.is_empty() => Err(ScenarioError::Grid(format!(
            "axis '{}' must list at least one value",
            name
        ))),
        Some(values) => Ok(values.iter().copied().map(Some).collect()),
    }
}
