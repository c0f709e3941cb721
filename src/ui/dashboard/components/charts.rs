//! Distribution charts component
//!
//! Each chart is drawn as a stacked proportion bar followed by a legend.

use super::super::state::DashboardState;
use super::super::utils::palette_color;
use crate::format::add_decimal_separator;
use crate::view_model::{ChartDescriptor, DistributionCharts, Segment};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render the three distribution charts side by side.
pub fn render_distribution_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let charts = DistributionCharts::from_state(&state.data);
    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_chart(f, chart_chunks[0], "BALANCES BY ACCOUNT TYPE", &charts.balances_by_type);
    render_chart(
        f,
        chart_chunks[1],
        "ADDRESSES COUNT BY ACCOUNT TYPE",
        &charts.counts_by_type,
    );
    render_chart(f, chart_chunks[2], "TOKEN LIQUIDITY", &charts.supply_liquidity);
}

/// Render one chart panel.
pub fn render_chart(f: &mut Frame, area: Rect, title: &str, chart: &ChartDescriptor) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let segments = chart.segments();
    let mut lines = Vec::with_capacity(segments.len() + 2);
    if chart.is_empty() {
        lines.push(Line::styled("No data", Style::default().fg(Color::DarkGray)));
    } else {
        lines.push(proportion_bar(&segments, inner.width as usize));
        lines.push(Line::raw(""));
        lines.extend(segments.iter().map(legend_line));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// A single row of `width` cells split between segments by share.
fn proportion_bar(segments: &[Segment<'_>], width: usize) -> Line<'static> {
    let widths = bar_widths(segments, width);
    if widths.iter().all(|w| *w == 0) {
        return Line::styled("-".repeat(width), Style::default().fg(Color::DarkGray));
    }
    let spans: Vec<Span> = segments
        .iter()
        .zip(widths)
        .filter(|(_, cells)| *cells > 0)
        .map(|(segment, cells)| {
            Span::styled(
                "█".repeat(cells),
                Style::default().fg(palette_color(segment.color_index)),
            )
        })
        .collect();
    Line::from(spans)
}

/// Cell counts per segment, summing to `width` whenever any share is known.
fn bar_widths(segments: &[Segment<'_>], width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = segments
        .iter()
        .map(|s| {
            s.share
                .filter(|share| share.is_finite() && *share > 0.0)
                .map(|share| (share * width as f64).floor() as usize)
                .unwrap_or(0)
        })
        .collect();
    let used: usize = widths.iter().sum();
    // Hand rounding leftovers to the largest segment.
    if used > 0 && used < width {
        if let Some(largest) = segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.share.is_some())
            .max_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
            .map(|(i, _)| i)
        {
            widths[largest] += width - used;
        }
    }
    widths
}

fn legend_line(segment: &Segment<'_>) -> Line<'static> {
    let share = segment
        .share
        .map(|s| format!("{:.1}%", s * 100.0))
        .unwrap_or_else(|| "-".to_string());
    Line::from(vec![
        Span::styled(
            "■ ",
            Style::default().fg(palette_color(segment.color_index)),
        ),
        Span::styled(segment.label.to_string(), Style::default().fg(Color::White)),
        Span::styled(
            format!("  {}", add_decimal_separator(segment.value)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("  {}", share), Style::default().fg(Color::DarkGray)),
    ])
}
