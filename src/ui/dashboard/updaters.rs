//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{DashboardState, FetchStatus};

use crate::events::{Event as WorkerEvent, EventType};

impl DashboardState {
    /// Advance the tick and apply every queued event.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            // The slice has been applied; the log only needs the message.
            self.add_to_activity_log(WorkerEvent {
                slice: None,
                ..event
            });
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::Refresh => self.set_fetch_status(event.worker, FetchStatus::Pending),
            EventType::Success => {
                if let Some(slice) = &event.slice {
                    self.data.apply(slice.clone());
                    self.set_last_update_timestamp(Some(event.timestamp.clone()));
                }
                self.set_fetch_status(event.worker, FetchStatus::Loaded);
            }
            // Failures keep whatever the slice held before.
            EventType::Error => self.set_fetch_status(event.worker, FetchStatus::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Worker;
    use crate::logging::LogLevel;
    use crate::model::LiquidityBucket;
    use crate::state::StateSlice;
    use crate::ui::app::UIConfig;
    use std::time::Instant;

    fn dashboard() -> DashboardState {
        DashboardState::new(
            Instant::now(),
            UIConfig::new(false, "http://localhost:5000".to_string()),
        )
    }

    fn buckets() -> Vec<LiquidityBucket> {
        vec![LiquidityBucket {
            wallet_type_name: "liquid".to_string(),
            balance: 10.0,
        }]
    }

    #[test]
    fn test_success_applies_slice() {
        let mut state = dashboard();
        state.add_event(WorkerEvent::refresh(
            Worker::LiquidityFetcher,
            "Fetching".to_string(),
        ));
        state.update();
        assert_eq!(
            state.fetch_status(Worker::LiquidityFetcher),
            FetchStatus::Pending
        );

        state.add_event(WorkerEvent::loaded(
            Worker::LiquidityFetcher,
            "Loaded".to_string(),
            StateSlice::SupplyLiquidity(buckets()),
        ));
        state.update();
        assert_eq!(state.data.supply_liquidity, buckets());
        assert_eq!(
            state.fetch_status(Worker::LiquidityFetcher),
            FetchStatus::Loaded
        );
        assert!(state.last_update_timestamp().is_some());
        assert_eq!(state.activity_logs.len(), 2);
        assert!(state.activity_logs.iter().all(|e| e.slice.is_none()));
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state = dashboard();
        state.add_event(WorkerEvent::loaded(
            Worker::LiquidityFetcher,
            "Loaded".to_string(),
            StateSlice::SupplyLiquidity(buckets()),
        ));
        state.add_event(WorkerEvent::failed(
            Worker::LiquidityFetcher,
            "Failed to fetch supply liquidity".to_string(),
            LogLevel::Warn,
        ));
        state.update();
        assert_eq!(state.data.supply_liquidity, buckets());
        assert_eq!(
            state.fetch_status(Worker::LiquidityFetcher),
            FetchStatus::Failed
        );
        assert_eq!(
            state.fetch_status(Worker::SummaryFetcher),
            FetchStatus::Pending
        );
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = dashboard();
        for i in 0..(crate::consts::cli_consts::MAX_ACTIVITY_LOGS + 10) {
            state.add_event(WorkerEvent::refresh(
                Worker::BalanceFetcher,
                format!("event {i}"),
            ));
        }
        state.update();
        assert_eq!(
            state.activity_logs.len(),
            crate::consts::cli_consts::MAX_ACTIVITY_LOGS
        );
        assert_eq!(state.tick, 1);
    }
}
