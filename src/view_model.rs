//! Chart descriptors built from the current state.
//!
//! Rebuilt on every render; rows are projected in insertion order with no
//! sorting, filtering or aggregation.

use crate::consts::cli_consts::VALIDATOR_PANEL_PLACEHOLDER;
use crate::consts::cli_consts::charts::{BORDER_WIDTH, DATASET_LABEL, PALETTE};
use crate::format::{format_metric, format_raw};
use crate::model::{AccountTypeBalance, LiquidityBucket};
use crate::state::{SummaryState, TokenomicsState};
use serde::Serialize;

/// One dataset of a proportion chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_width: u32,
}

/// Labels plus the values to draw for them, index-aligned.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// A single drawable segment of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    pub label: &'a str,
    pub value: f64,
    /// Fraction of the dataset total, `None` when the total is not positive.
    pub share: Option<f64>,
    /// Index into the palette.
    pub color_index: usize,
}

impl ChartDescriptor {
    pub fn new(labels: Vec<String>, data: Vec<f64>) -> Self {
        Self {
            labels,
            datasets: vec![ChartDataset {
                label: DATASET_LABEL.to_string(),
                data,
                background_color: PALETTE.iter().map(|c| c.to_string()).collect(),
                border_width: BORDER_WIDTH,
            }],
        }
    }

    /// Values of the (single) dataset.
    pub fn data(&self) -> &[f64] {
        self.datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.data().iter().filter(|v| v.is_finite()).sum()
    }

    /// Segments in label order, with the palette cycled by position.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let total = self.total();
        self.labels
            .iter()
            .zip(self.data())
            .enumerate()
            .map(|(i, (label, value))| Segment {
                label,
                value: *value,
                share: (total > 0.0).then(|| value / total),
                color_index: i % PALETTE.len(),
            })
            .collect()
    }
}

/// Balance and count charts for the account types, sharing one label set.
pub fn account_type_charts(rows: &[AccountTypeBalance]) -> (ChartDescriptor, ChartDescriptor) {
    let mut labels = Vec::with_capacity(rows.len());
    let mut balances = Vec::with_capacity(rows.len());
    let mut counts = Vec::with_capacity(rows.len());
    for row in rows {
        labels.push(row.account_type.clone());
        balances.push(row.balance);
        counts.push(row.count as f64);
    }
    (
        ChartDescriptor::new(labels.clone(), balances),
        ChartDescriptor::new(labels, counts),
    )
}

/// Balance chart for the liquidity buckets.
pub fn liquidity_chart(rows: &[LiquidityBucket]) -> ChartDescriptor {
    let (labels, balances) = rows
        .iter()
        .map(|row| (row.wallet_type_name.clone(), row.balance))
        .unzip();
    ChartDescriptor::new(labels, balances)
}

/// The three charts of the distribution section.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DistributionCharts {
    pub balances_by_type: ChartDescriptor,
    pub counts_by_type: ChartDescriptor,
    pub supply_liquidity: ChartDescriptor,
}

impl DistributionCharts {
    pub fn from_state(state: &TokenomicsState) -> Self {
        let (balances_by_type, counts_by_type) = account_type_charts(&state.balances_by_type);
        Self {
            balances_by_type,
            counts_by_type,
            supply_liquidity: liquidity_chart(&state.supply_liquidity),
        }
    }
}

/// A heading with the value shown under it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub heading: &'static str,
    pub value: String,
}

impl MetricTile {
    fn new(heading: &'static str, value: String) -> Self {
        Self { heading, value }
    }
}

/// The two rows of headline figures.
pub fn headline_tiles(summary: &SummaryState) -> [[MetricTile; 3]; 2] {
    [
        [
            MetricTile::new(
                "Active validators",
                format!(
                    "{} / {}",
                    format_raw(summary.active_set_cnt),
                    format_raw(summary.validator_cnt)
                ),
            ),
            MetricTile::new("Community wallets", format_metric(summary.cnt_community)),
            MetricTile::new("Addresses", format_metric(summary.total_addr_cnt)),
        ],
        [
            MetricTile::new("Total supply", format_metric(summary.total_balance)),
            MetricTile::new("Liquid supply", format_metric(summary.bal_liquid)),
            MetricTile::new(
                "Slow supply (non-community wallets)",
                format_metric(summary.bal_slow),
            ),
        ],
    ]
}

/// Validator panel tiles. Fixed figures, not read from any fetched data.
pub fn validator_tiles() -> [MetricTile; 4] {
    let value = VALIDATOR_PANEL_PLACEHOLDER.to_string();
    [
        MetricTile::new("Active validators", value.clone()),
        MetricTile::new("Validators", value.clone()),
        MetricTile::new("Validators", value.clone()),
        MetricTile::new("Validators", value),
    ]
}
