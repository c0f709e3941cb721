//! Event System
//!
//! Types and implementations for fetch events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::state::StateSlice;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum Worker {
    /// Fetches balances and address counts by account type.
    #[strum(to_string = "balances")]
    BalanceFetcher,
    /// Fetches the supply liquidity buckets.
    #[strum(to_string = "liquidity")]
    LiquidityFetcher,
    /// Fetches the headline tokenomics figures.
    #[strum(to_string = "summary")]
    SummaryFetcher,
}

impl Worker {
    pub const ALL: [Worker; 3] = [
        Worker::BalanceFetcher,
        Worker::LiquidityFetcher,
        Worker::SummaryFetcher,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Replacement state carried by successful fetches
    pub slice: Option<StateSlice>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            slice: None,
        }
    }

    pub fn refresh(worker: Worker, msg: String) -> Self {
        Self::new(worker, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn loaded(worker: Worker, msg: String, slice: StateSlice) -> Self {
        Self {
            slice: Some(slice),
            ..Self::new(worker, msg, EventType::Success, LogLevel::Info)
        }
    }

    pub fn failed(worker: Worker, msg: String, log_level: LogLevel) -> Self {
        Self::new(worker, msg, EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Outcomes are always shown; the level of a failure only styles it.
        if matches!(self.event_type, EventType::Success | EventType::Error)
            || self.log_level >= LogLevel::Info
        {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.worker, self.msg
        )
    }
}
