//! Session setup and initialization

use crate::api::{TokenomicsApi, TokenomicsClient};
use crate::config::ApiConfig;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::{DataFetcher, spawn_fetches};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for fetch events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for the initial fetch tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop in-flight fetches
    pub shutdown_sender: broadcast::Sender<()>,
    /// Fetcher kept around so the dashboard can refresh
    pub fetcher: Arc<DataFetcher>,
    /// Backend the session talks to
    pub base_url: String,
}

/// Sets up a session against the backend described by `api_config`.
///
/// The three fetches are issued immediately; their results arrive on
/// `event_receiver` in completion order.
pub fn setup_session(api_config: ApiConfig) -> SessionData {
    let client: Arc<dyn TokenomicsApi> = Arc::new(TokenomicsClient::new(api_config));
    setup_session_with_api(client)
}

/// Same as [`setup_session`] with a caller-provided API implementation.
pub fn setup_session_with_api(api: Arc<dyn TokenomicsApi>) -> SessionData {
    let base_url = api.base_url().to_string();
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (shutdown_sender, _) = broadcast::channel(1);

    let fetcher = Arc::new(DataFetcher::new(api, EventSender::new(event_sender)));
    let join_handles = spawn_fetches(fetcher.clone(), &shutdown_sender);

    SessionData {
        event_receiver,
        join_handles,
        shutdown_sender,
        fetcher,
        base_url,
    }
}
