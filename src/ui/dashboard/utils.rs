//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use super::state::FetchStatus;
use crate::consts::cli_consts::charts::PALETTE_RGB;
use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::BalanceFetcher => Color::Cyan,
        Worker::LiquidityFetcher => Color::Yellow,
        Worker::SummaryFetcher => Color::Green,
    }
}

/// Color for a fetch status indicator
pub fn get_status_color(status: FetchStatus) -> Color {
    match status {
        FetchStatus::Pending => Color::Gray,
        FetchStatus::Loaded => Color::Green,
        FetchStatus::Failed => Color::Red,
    }
}

/// Chart segment color, cycled by position
pub fn palette_color(index: usize) -> Color {
    let (r, g, b) = PALETTE_RGB[index % PALETTE_RGB.len()];
    Color::Rgb(r, g, b)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    let prefix = msg.split(": Reqwest error").next().unwrap_or(msg);
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return format!("{}: request timed out", prefix);
    }
    if msg.contains("Reqwest error") {
        return format!("{}: backend unreachable", prefix);
    }
    msg.to_string()
}
