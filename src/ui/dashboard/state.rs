//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::{Event as WorkerEvent, Worker};
use crate::state::TokenomicsState;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Outcome of the latest fetch of one endpoint
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum FetchStatus {
    #[strum(to_string = "pending")]
    Pending,
    #[strum(to_string = "loaded")]
    Loaded,
    #[strum(to_string = "failed")]
    Failed,
}

/// Dashboard state: fetched data plus what is needed to display it.
#[derive(Debug)]
pub struct DashboardState {
    /// Base URL of the analytics backend.
    pub base_url: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Data as delivered by the fetches.
    pub data: TokenomicsState,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Latest status per endpoint, indexed like `Worker::ALL`
    fetch_status: [FetchStatus; 3],
    /// Timestamp of the last slice applied
    last_update_timestamp: Option<String>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            base_url: ui_config.base_url,
            start_time,
            data: TokenomicsState::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            fetch_status: [FetchStatus::Pending; 3],
            last_update_timestamp: None,
        }
    }

    pub fn fetch_status(&self, worker: Worker) -> FetchStatus {
        self.fetch_status[Self::status_index(worker)]
    }

    pub fn set_fetch_status(&mut self, worker: Worker, status: FetchStatus) {
        self.fetch_status[Self::status_index(worker)] = status;
    }

    pub fn last_update_timestamp(&self) -> &Option<String> {
        &self.last_update_timestamp
    }

    pub fn set_last_update_timestamp(&mut self, timestamp: Option<String>) {
        self.last_update_timestamp = timestamp;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    fn status_index(worker: Worker) -> usize {
        match worker {
            Worker::BalanceFetcher => 0,
            Worker::LiquidityFetcher => 1,
            Worker::SummaryFetcher => 2,
        }
    }
}
