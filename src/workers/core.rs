//! Core worker utilities

use crate::events::{Event, Worker};
use crate::logging::LogLevel;
use crate::state::StateSlice;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        // The receiver is gone once the dashboard is torn down; nothing to update then.
        let _ = self.sender.send(event).await;
    }

    pub async fn send_refresh(&self, worker: Worker, message: String) {
        self.send_event(Event::refresh(worker, message)).await;
    }

    pub async fn send_loaded(&self, worker: Worker, message: String, slice: StateSlice) {
        self.send_event(Event::loaded(worker, message, slice)).await;
    }

    pub async fn send_failure(&self, worker: Worker, message: String, log_level: LogLevel) {
        self.send_event(Event::failed(worker, message, log_level))
            .await;
    }
}
