//! Plain-text and JSON renditions of the dashboard, for non-interactive use.

use crate::format::add_decimal_separator;
use crate::state::TokenomicsState;
use crate::view_model::{
    ChartDescriptor, DistributionCharts, MetricTile, headline_tiles, validator_tiles,
};
use serde::Serialize;
use std::fmt::Write;

/// Everything the dashboard shows, in serializable form.
#[derive(Serialize, Debug)]
pub struct Snapshot<'a> {
    pub headline: [[MetricTile; 3]; 2],
    pub charts: DistributionCharts,
    pub validators: [MetricTile; 4],
    pub summary: &'a crate::state::SummaryState,
}

impl<'a> Snapshot<'a> {
    pub fn from_state(state: &'a TokenomicsState) -> Self {
        Self {
            headline: headline_tiles(&state.summary),
            charts: DistributionCharts::from_state(state),
            validators: validator_tiles(),
            summary: &state.summary,
        }
    }
}

pub fn render_json(state: &TokenomicsState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Snapshot::from_state(state))
}

pub fn render_text(state: &TokenomicsState) -> String {
    let snapshot = Snapshot::from_state(state);
    let mut out = String::new();

    let _ = writeln!(out, "Tokenomics dashboard");
    for row in &snapshot.headline {
        write_tiles(&mut out, row);
    }

    let _ = writeln!(out, "\nDistribution");
    write_chart(&mut out, "Balances by account type", &snapshot.charts.balances_by_type);
    write_chart(
        &mut out,
        "Addresses count by account type",
        &snapshot.charts.counts_by_type,
    );
    write_chart(&mut out, "Token liquidity", &snapshot.charts.supply_liquidity);

    let _ = writeln!(out, "\nValidators");
    write_tiles(&mut out, &snapshot.validators);
    out
}

fn write_tiles(out: &mut String, tiles: &[MetricTile]) {
    for tile in tiles {
        let _ = writeln!(out, "  {:<38}{}", format!("{}:", tile.heading), tile.value);
    }
}

fn write_chart(out: &mut String, title: &str, chart: &ChartDescriptor) {
    let _ = writeln!(out, "  {}", title);
    if chart.is_empty() {
        let _ = writeln!(out, "    (no data)");
        return;
    }
    for segment in chart.segments() {
        let share = segment
            .share
            .map(|s| format!("{:.1}%", s * 100.0))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "    {:<24}{:>20}{:>9}",
            segment.label,
            add_decimal_separator(segment.value),
            share
        );
    }
}
