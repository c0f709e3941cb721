//! Dashboard data state.
//!
//! Each fetch owns one slice of the state and replaces it wholesale.

use crate::model::{AccountTypeBalance, LiquidityBucket, TokenomicsSummary};
use serde::Serialize;

/// A complete replacement for one slice of [`TokenomicsState`].
#[derive(Debug, Clone, PartialEq)]
pub enum StateSlice {
    BalancesByType(Vec<AccountTypeBalance>),
    SupplyLiquidity(Vec<LiquidityBucket>),
    Summary(TokenomicsSummary),
}

/// Headline scalars as held by the dashboard.
///
/// Starts at zero for every declared key. `sum_bal_ex_com_v` is declared but
/// no fetch ever writes it; the response value lands in `sum_bal_ex_com_val`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SummaryState {
    pub total_balance: Option<f64>,
    pub total_addr_cnt: Option<f64>,
    pub top10_balance: Option<f64>,
    pub top100_balance: Option<f64>,
    pub top10_balance_nv: Option<f64>,
    pub top10_perc: Option<f64>,
    pub top100_perc: Option<f64>,
    pub top10_nv_perc: Option<f64>,
    pub sum_bal_ex_com: Option<f64>,
    pub sum_bal_ex_com_v: Option<f64>,
    pub sum_bal_ex_com_val: Option<f64>,
    pub addr_cnt_bal_gt1: Option<f64>,
    pub bal_community: Option<f64>,
    pub bal_slow: Option<f64>,
    pub bal_liquid: Option<f64>,
    pub cnt_community: Option<f64>,
    pub cnt_slow: Option<f64>,
    pub cnt_liquid: Option<f64>,
    pub active_set_cnt: Option<f64>,
    pub validator_cnt: Option<f64>,
}

impl Default for SummaryState {
    fn default() -> Self {
        Self {
            total_balance: Some(0.0),
            total_addr_cnt: Some(0.0),
            top10_balance: Some(0.0),
            top100_balance: Some(0.0),
            top10_balance_nv: Some(0.0),
            top10_perc: Some(0.0),
            top100_perc: Some(0.0),
            top10_nv_perc: Some(0.0),
            sum_bal_ex_com: Some(0.0),
            sum_bal_ex_com_v: Some(0.0),
            // Not part of the initial state.
            sum_bal_ex_com_val: None,
            addr_cnt_bal_gt1: Some(0.0),
            bal_community: Some(0.0),
            bal_slow: Some(0.0),
            bal_liquid: Some(0.0),
            cnt_community: Some(0.0),
            cnt_slow: Some(0.0),
            cnt_liquid: Some(0.0),
            active_set_cnt: Some(0.0),
            validator_cnt: Some(0.0),
        }
    }
}

impl SummaryState {
    /// Overwrite every scalar the response carries a key for, including the
    /// ones the response left unset.
    fn replace_with(&mut self, summary: TokenomicsSummary) {
        self.total_balance = summary.total_balance;
        self.total_addr_cnt = summary.total_addr_cnt;
        self.top10_balance = summary.top10_balance;
        self.top100_balance = summary.top100_balance;
        self.top10_balance_nv = summary.top10_balance_nv;
        self.top10_perc = summary.top10_perc;
        self.top100_perc = summary.top100_perc;
        self.top10_nv_perc = summary.top10_nv_perc;
        self.sum_bal_ex_com = summary.sum_bal_ex_com;
        self.sum_bal_ex_com_val = summary.sum_bal_ex_com_val;
        self.addr_cnt_bal_gt1 = summary.addr_cnt_bal_gt1;
        self.bal_community = summary.bal_community;
        self.bal_slow = summary.bal_slow;
        self.bal_liquid = summary.bal_liquid;
        self.cnt_community = summary.cnt_community;
        self.cnt_slow = summary.cnt_slow;
        self.cnt_liquid = summary.cnt_liquid;
        self.active_set_cnt = summary.active_set_cnt;
        self.validator_cnt = summary.validator_cnt;
    }
}

/// Everything the dashboard renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenomicsState {
    pub balances_by_type: Vec<AccountTypeBalance>,
    pub supply_liquidity: Vec<LiquidityBucket>,
    pub summary: SummaryState,
}

impl TokenomicsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slice carried by `slice`, leaving the others untouched.
    pub fn apply(&mut self, slice: StateSlice) {
        match slice {
            StateSlice::BalancesByType(rows) => self.balances_by_type = rows,
            StateSlice::SupplyLiquidity(rows) => self.supply_liquidity = rows,
            StateSlice::Summary(summary) => self.summary.replace_with(summary),
        }
    }
}
