use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use engine::ExecutiveReport;
use rust_decimal::{Decimal, RoundingStrategy};
use scenarios::ScenarioOutcome;

/// Formats a dollar amount rounded to whole dollars with thousands separators.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn format_ratio(ratio: Decimal) -> String {
    format!("{:.2}x", ratio)
}

fn title_case(category: &str) -> String {
    category
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Prints the executive report as a set of tables.
pub fn print_report(report: &ExecutiveReport) {
    let estimate = &report.estimate;
    let params = &estimate.parameters;
    let simulation = &estimate.simulation;

    println!("Zero Trust ROI Report {}", report.report_id);
    println!("Generated {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();

    let mut inputs = new_table();
    inputs.set_header(vec!["Parameter", "Value"]);
    inputs.add_row(vec![
        Cell::new("Attack surface (assets)"),
        right(params.attack_surface_size.to_string()),
    ]);
    inputs.add_row(vec![
        Cell::new("Zero Trust effectiveness"),
        right(format!("{:.0}%", params.zero_trust_effectiveness * 100.0)),
    ]);
    inputs.add_row(vec![
        Cell::new("Average breach cost"),
        right(format_money(params.breach_cost)),
    ]);
    inputs.add_row(vec![
        Cell::new("Asset criticality"),
        right(format!("{:.1}", params.asset_criticality)),
    ]);
    inputs.add_row(vec![
        Cell::new("Downtime per breach (hours)"),
        right(params.downtime_hours.to_string()),
    ]);
    println!("{inputs}");

    let mut headline = new_table();
    headline.set_header(vec![
        "Metric".to_string(),
        "Estimate".to_string(),
        format!("P{:.0}", simulation.lower_percentile),
        format!("P{:.0}", simulation.upper_percentile),
    ]);
    headline.add_row(vec![
        Cell::new("Breaches prevented / month"),
        right(format!("{:.4}", estimate.breaches_prevented)),
        right(format!("{:.4}", estimate.breaches_interval.lower)),
        right(format!("{:.4}", estimate.breaches_interval.upper)),
    ]);
    headline.add_row(vec![
        Cell::new("Monthly savings"),
        right(format_money(estimate.total_savings)),
        right(format_money(estimate.savings_interval.lower)),
        right(format_money(estimate.savings_interval.upper)),
    ]);
    println!("{headline}");

    let mut breakdown = new_table();
    breakdown.set_header(vec!["Savings category", "Monthly amount"]);
    for (name, amount) in estimate.breakdown.categories() {
        breakdown.add_row(vec![Cell::new(title_case(name)), right(format_money(amount))]);
    }
    breakdown.add_row(vec![Cell::new("Total"), right(format_money(estimate.total_savings))]);
    println!("{breakdown}");

    let roi = &estimate.roi;
    let mut returns = new_table();
    returns.set_header(vec!["Return", "Value"]);
    returns.add_row(vec![
        Cell::new("Monthly investment"),
        right(format_money(roi.estimated_monthly_investment)),
    ]);
    returns.add_row(vec![Cell::new("ROI ratio"), right(format_ratio(roi.roi_ratio))]);
    returns.add_row(vec![
        Cell::new("Cost per dollar saved"),
        right(format!("${:.4}", roi.cost_efficiency)),
    ]);
    returns.add_row(vec![
        Cell::new("Net monthly benefit"),
        right(format_money(roi.net_monthly_benefit)),
    ]);
    println!("{returns}");

    if !estimate.projection.is_empty() {
        let mut projection = new_table();
        projection.set_header(vec!["Month", "Cumulative savings"]);
        for (month, cumulative) in estimate.projection.iter().enumerate() {
            projection.add_row(vec![
                right((month + 1).to_string()),
                right(format_money(*cumulative)),
            ]);
        }
        println!("{projection}");
    }

    let seed = simulation
        .seed
        .map(|seed| seed.to_string())
        .unwrap_or_else(|| "none".to_string());
    println!(
        "Monte Carlo: {} trials, seed {}, median savings {}",
        simulation.trials,
        seed,
        format_money(simulation.median_total_savings)
    );
    println!();

    print_scenarios(&report.scenarios);
}

/// Prints the scenario comparison, one row per scenario in input order.
pub fn print_scenarios(outcomes: &[ScenarioOutcome]) {
    let mut table = new_table();
    table.set_header(vec![
        "Scenario",
        "Surface",
        "Effectiveness",
        "Breaches",
        "Savings",
        "Investment",
        "ROI",
    ]);

    for outcome in outcomes {
        match &outcome.result {
            Ok(result) => {
                table.add_row(vec![
                    Cell::new(&result.label),
                    right(result.parameters.attack_surface_size.to_string()),
                    right(format!("{:.0}%", result.parameters.zero_trust_effectiveness * 100.0)),
                    right(format!("{:.4}", result.breaches_prevented)),
                    right(format_money(result.total_savings)),
                    right(format_money(result.roi.estimated_monthly_investment)),
                    right(format_ratio(result.roi.roi_ratio)),
                ]);
            }
            Err(error) => {
                table.add_row(vec![
                    Cell::new(&outcome.label),
                    Cell::new(format!("error: {error}")),
                ]);
            }
        }
    }

    println!("{table}");
}
