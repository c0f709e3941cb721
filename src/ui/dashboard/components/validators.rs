//! Validator panel component

use super::metrics::render_tile_row;
use crate::view_model::validator_tiles;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Render the validator panel.
pub fn render_validator_panel(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("VALIDATORS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::vertical(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    render_tile_row(f, inner, &validator_tiles(), Color::LightYellow);
}
