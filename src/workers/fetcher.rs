//! Dashboard data fetching
//!
//! One GET per slice of state. Failures are logged through the event channel
//! and otherwise ignored: no retry, no fallback value, no state change.

use super::core::EventSender;
use crate::api::TokenomicsApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::Worker;
use crate::state::StateSlice;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Issues the three dashboard fetches and reports their outcome as events.
pub struct DataFetcher {
    api: Arc<dyn TokenomicsApi>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
}

impl DataFetcher {
    pub fn new(api: Arc<dyn TokenomicsApi>, event_sender: EventSender) -> Self {
        Self {
            api,
            event_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Fetch balances and counts per account type.
    pub async fn fetch_account_balances(&self) {
        let worker = Worker::BalanceFetcher;
        self.event_sender
            .send_refresh(worker, "Fetching balances by account type...".to_string())
            .await;
        match self.api.get_balances_by_type().await {
            Ok(rows) => {
                let msg = format!("Loaded {} account types", rows.len());
                self.event_sender
                    .send_loaded(worker, msg, StateSlice::BalancesByType(rows))
                    .await;
            }
            Err(e) => self.report_failure(worker, "balances by account type", &e).await,
        }
    }

    /// Fetch the supply liquidity buckets.
    pub async fn fetch_supply_liquidity(&self) {
        let worker = Worker::LiquidityFetcher;
        self.event_sender
            .send_refresh(worker, "Fetching supply liquidity...".to_string())
            .await;
        match self.api.get_supply_liquidity().await {
            Ok(rows) => {
                let msg = format!("Loaded {} liquidity buckets", rows.len());
                self.event_sender
                    .send_loaded(worker, msg, StateSlice::SupplyLiquidity(rows))
                    .await;
            }
            Err(e) => self.report_failure(worker, "supply liquidity", &e).await,
        }
    }

    /// Fetch the headline tokenomics figures.
    pub async fn fetch_summary(&self) {
        let worker = Worker::SummaryFetcher;
        self.event_sender
            .send_refresh(worker, "Fetching tokenomics summary...".to_string())
            .await;
        match self.api.get_tokenomics().await {
            Ok(summary) => {
                self.event_sender
                    .send_loaded(
                        worker,
                        "Loaded tokenomics summary".to_string(),
                        StateSlice::Summary(summary),
                    )
                    .await;
            }
            Err(e) => self.report_failure(worker, "tokenomics summary", &e).await,
        }
    }

    /// Run the fetch owned by `worker`.
    pub async fn fetch(&self, worker: Worker) {
        match worker {
            Worker::BalanceFetcher => self.fetch_account_balances().await,
            Worker::LiquidityFetcher => self.fetch_supply_liquidity().await,
            Worker::SummaryFetcher => self.fetch_summary().await,
        }
    }

    async fn report_failure(&self, worker: Worker, what: &str, error: &ApiError) {
        let log_level = self.classifier.classify_fetch_error(error);
        self.event_sender
            .send_failure(worker, format!("Failed to fetch {}: {}", what, error), log_level)
            .await;
    }
}

/// Start the three fetches as independent tasks.
///
/// Each task stops early when `shutdown` fires, so a torn-down dashboard is
/// never updated by a late response.
pub fn spawn_fetches(
    fetcher: Arc<DataFetcher>,
    shutdown: &broadcast::Sender<()>,
) -> Vec<JoinHandle<()>> {
    Worker::ALL
        .into_iter()
        .map(|worker| {
            let fetcher = fetcher.clone();
            let mut shutdown = shutdown.subscribe();
            tokio::spawn(async move {
                tokio::select! {
                    _ = fetcher.fetch(worker) => {}
                    _ = shutdown.recv() => {}
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTokenomicsApi;
    use crate::events::{Event, EventType};
    use crate::logging::LogLevel;
    use crate::model::{AccountTypeBalance, LiquidityBucket, TokenomicsSummary};
    use crate::state::TokenomicsState;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn balances() -> Vec<AccountTypeBalance> {
        vec![
            AccountTypeBalance {
                account_type: "A".to_string(),
                balance: 100.0,
                count: 5,
            },
            AccountTypeBalance {
                account_type: "B".to_string(),
                balance: 200.0,
                count: 3,
            },
        ]
    }

    fn liquidity() -> Vec<LiquidityBucket> {
        vec![LiquidityBucket {
            wallet_type_name: "liquid".to_string(),
            balance: 750.0,
        }]
    }

    fn summary() -> TokenomicsSummary {
        TokenomicsSummary {
            total_balance: Some(1_234_567.0),
            total_addr_cnt: Some(4321.0),
            bal_liquid: Some(750.0),
            cnt_community: Some(12.0),
            active_set_cnt: Some(80.0),
            validator_cnt: Some(120.0),
            ..Default::default()
        }
    }

    fn healthy_api() -> MockTokenomicsApi {
        let mut api = MockTokenomicsApi::new();
        api.expect_base_url()
            .return_const("http://mock".to_string());
        api.expect_get_balances_by_type()
            .returning(|| Ok(balances()));
        api.expect_get_supply_liquidity()
            .returning(|| Ok(liquidity()));
        api.expect_get_tokenomics().returning(|| Ok(summary()));
        api
    }

    fn fetcher_with(api: MockTokenomicsApi) -> (Arc<DataFetcher>, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel(32);
        let fetcher = DataFetcher::new(Arc::new(api), EventSender::new(sender));
        (Arc::new(fetcher), receiver)
    }

    fn drain_into(state: &mut TokenomicsState, receiver: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            if let Some(slice) = event.slice.clone() {
                state.apply(slice);
            }
            events.push(event);
        }
        events
    }

    #[tokio::test]
    /// A successful fetch announces itself, then delivers its slice.
    async fn test_fetch_account_balances_delivers_slice() {
        let (fetcher, mut receiver) = fetcher_with(healthy_api());
        fetcher.fetch_account_balances().await;

        let mut state = TokenomicsState::new();
        let events = drain_into(&mut state, &mut receiver);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EventType::Refresh);
        assert_eq!(events[1].event_type, EventType::Success);
        assert_eq!(events[1].msg, "Loaded 2 account types");
        assert_eq!(state.balances_by_type, balances());
    }

    #[tokio::test]
    /// A failed fetch logs the error and leaves state untouched.
    async fn test_failure_is_logged_and_swallowed() {
        let mut api = MockTokenomicsApi::new();
        api.expect_get_supply_liquidity().returning(|| {
            Err(ApiError::Http {
                status: 503,
                message: "maintenance".to_string(),
            })
        });
        let (fetcher, mut receiver) = fetcher_with(api);

        let mut state = TokenomicsState::new();
        state.apply(StateSlice::SupplyLiquidity(liquidity()));
        fetcher.fetch_supply_liquidity().await;

        let events = drain_into(&mut state, &mut receiver);
        let failure = events.last().unwrap();
        assert_eq!(failure.event_type, EventType::Error);
        assert_eq!(failure.log_level, LogLevel::Warn);
        assert!(failure.msg.contains("status 503"));
        assert!(failure.slice.is_none());
        assert_eq!(state.supply_liquidity, liquidity());
    }

    #[tokio::test]
    /// A rate-limited fetch is logged quietly but still reaches the log.
    async fn test_rate_limited_failure_is_displayed() {
        let mut api = MockTokenomicsApi::new();
        api.expect_get_tokenomics().returning(|| {
            Err(ApiError::Http {
                status: 429,
                message: "slow down".to_string(),
            })
        });
        let (fetcher, mut receiver) = fetcher_with(api);
        fetcher.fetch_summary().await;

        let mut state = TokenomicsState::new();
        let events = drain_into(&mut state, &mut receiver);
        let failure = events.last().unwrap();
        assert_eq!(failure.event_type, EventType::Error);
        assert_eq!(failure.log_level, LogLevel::Debug);
        assert!(failure.should_display());
        assert_eq!(state, TokenomicsState::new());
    }

    #[tokio::test]
    /// One endpoint failing does not affect the other two.
    async fn test_one_failure_leaves_other_slices_populated() {
        let mut api = MockTokenomicsApi::new();
        api.expect_get_balances_by_type()
            .returning(|| Ok(balances()));
        api.expect_get_supply_liquidity()
            .returning(|| Ok(liquidity()));
        api.expect_get_tokenomics().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: String::new(),
            })
        });
        let (fetcher, mut receiver) = fetcher_with(api);
        let (shutdown, _) = broadcast::channel(1);

        for handle in spawn_fetches(fetcher, &shutdown) {
            handle.await.unwrap();
        }

        let mut state = TokenomicsState::new();
        let events = drain_into(&mut state, &mut receiver);
        assert_eq!(state.balances_by_type, balances());
        assert_eq!(state.supply_liquidity, liquidity());
        assert_eq!(state.summary, TokenomicsState::new().summary);
        let failures: Vec<_> = events
            .iter()
            .filter(|e| e.event_type == EventType::Error)
            .collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].worker, Worker::SummaryFetcher);
    }

    #[tokio::test]
    /// Fetching twice with identical responses leaves state unchanged.
    async fn test_repeated_fetch_is_idempotent() {
        let (fetcher, mut receiver) = fetcher_with(healthy_api());
        let mut state = TokenomicsState::new();

        fetcher.fetch_summary().await;
        drain_into(&mut state, &mut receiver);
        let after_first = state.clone();

        fetcher.fetch_summary().await;
        drain_into(&mut state, &mut receiver);
        assert_eq!(state, after_first);
        assert_eq!(state.summary.total_balance, Some(1_234_567.0));
    }

    #[tokio::test]
    /// An empty collection produces an empty slice without error.
    async fn test_empty_collection() {
        let mut api = MockTokenomicsApi::new();
        api.expect_get_balances_by_type().returning(|| Ok(vec![]));
        let (fetcher, mut receiver) = fetcher_with(api);

        let mut state = TokenomicsState::new();
        state.apply(StateSlice::BalancesByType(balances()));
        fetcher.fetch_account_balances().await;

        let events = drain_into(&mut state, &mut receiver);
        assert!(events.iter().all(|e| e.event_type != EventType::Error));
        assert!(state.balances_by_type.is_empty());
    }

    #[tokio::test]
    /// Shutdown cancels outstanding fetches before they deliver.
    async fn test_shutdown_cancels_pending_fetches() {
        struct SlowApi;

        #[async_trait::async_trait]
        impl TokenomicsApi for SlowApi {
            fn base_url(&self) -> &str {
                "http://slow"
            }
            async fn get_balances_by_type(&self) -> Result<Vec<AccountTypeBalance>, ApiError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(vec![])
            }
            async fn get_supply_liquidity(&self) -> Result<Vec<LiquidityBucket>, ApiError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(vec![])
            }
            async fn get_tokenomics(&self) -> Result<TokenomicsSummary, ApiError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(TokenomicsSummary::default())
            }
        }

        let (sender, mut receiver) = mpsc::channel(32);
        let fetcher = Arc::new(DataFetcher::new(Arc::new(SlowApi), EventSender::new(sender)));
        let (shutdown, _) = broadcast::channel(1);
        let handles = spawn_fetches(fetcher, &shutdown);

        tokio::time::sleep(Duration::from_millis(50)).await;
        let _ = shutdown.send(());
        for handle in handles {
            tokio::time::timeout(Duration::from_secs(5), handle)
                .await
                .expect("fetch task should stop on shutdown")
                .unwrap();
        }

        while let Ok(event) = receiver.try_recv() {
            assert!(event.slice.is_none(), "no slice after shutdown");
        }
    }

    #[test]
    /// The fetcher reports the base URL of its API.
    fn test_base_url() {
        let (fetcher, _receiver) = fetcher_with(healthy_api());
        assert_eq!(fetcher.base_url(), "http://mock");
    }
}
