//! Dashboard main renderer

use super::components::{charts, footer, header, logs, metrics, validators};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    metrics::render_metrics_section(f, main_chunks[1], state);
    charts::render_distribution_section(f, main_chunks[2], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[3]);

    validators::render_validator_panel(f, bottom_chunks[0]);
    logs::render_logs_panel(f, bottom_chunks[1], state);
    footer::render_footer(f, main_chunks[4]);
}
