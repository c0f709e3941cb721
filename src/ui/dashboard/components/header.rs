//! Dashboard header component
//!
//! Renders the title and per-endpoint fetch status

use super::super::state::{DashboardState, FetchStatus};
use super::super::utils::{format_compact_timestamp, get_status_color};
use crate::events::Worker;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title, backend URL and fetch status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("TOKENOMICS DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let mut spans = vec![
        Span::styled("API: ", Style::default().fg(Color::Gray)),
        Span::styled(state.base_url.clone(), Style::default().fg(Color::LightBlue)),
    ];
    for worker in Worker::ALL {
        let status = state.fetch_status(worker);
        spans.push(Span::styled(
            format!("  {}: ", worker),
            Style::default().fg(Color::Gray),
        ));
        let label = match status {
            FetchStatus::Pending => format!("{} {}", status, spinner(state.tick)),
            _ => status.to_string(),
        };
        spans.push(Span::styled(
            label,
            Style::default()
                .fg(get_status_color(status))
                .add_modifier(Modifier::BOLD),
        ));
    }
    let updated = state
        .last_update_timestamp()
        .as_deref()
        .map(format_compact_timestamp)
        .unwrap_or_else(|| "never".to_string());
    spans.push(Span::styled(
        format!(
            "  updated: {}  uptime: {}",
            updated,
            format_uptime(state.start_time.elapsed().as_secs())
        ),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        header_chunks[1],
    );
}

fn spinner(tick: usize) -> char {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    FRAMES[tick % FRAMES.len()]
}

fn format_uptime(secs: u64) -> String {
    match secs {
        s if s < 60 => format!("{}s", s),
        s if s < 3600 => format!("{}m {}s", s / 60, s % 60),
        s => format!("{}h {}m", s / 3600, (s % 3600) / 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(65), "1m 5s");
        assert_eq!(format_uptime(7260), "2h 1m");
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), spinner(4));
        assert_ne!(spinner(0), spinner(1));
    }
}
