//! Dashboard headline metrics component
//!
//! Renders the two rows of headline tiles

use super::super::state::DashboardState;
use crate::view_model::{MetricTile, headline_tiles};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the headline section.
pub fn render_metrics_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("TOKENOMICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (row, row_area) in headline_tiles(&state.data.summary)
        .iter()
        .zip(row_chunks.iter())
    {
        render_tile_row(f, *row_area, row, Color::White);
    }
}

/// Render tiles side by side with equal widths.
pub fn render_tile_row(f: &mut Frame, area: Rect, tiles: &[MetricTile], value_color: Color) {
    let constraints = vec![Constraint::Ratio(1, tiles.len().max(1) as u32); tiles.len()];
    let tile_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (tile, tile_area) in tiles.iter().zip(tile_chunks.iter()) {
        let lines = vec![
            Line::styled(
                tile.heading.to_uppercase(),
                Style::default().fg(Color::Gray),
            ),
            Line::styled(
                tile.value.clone(),
                Style::default()
                    .fg(value_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *tile_area,
        );
    }
}
