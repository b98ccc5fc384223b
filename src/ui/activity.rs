//! Network activity bars (upload/download), fed by the tracker's relative
//! heights rather than an absolute throughput scale.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Sparkline},
};

use crate::net::NetworkActivityTracker;

pub fn draw_activity(f: &mut ratatui::Frame<'_>, area: Rect, tracker: &NetworkActivityTracker) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_lane(f, rows[0], "Upload activity", &tracker.sent_heights(), Color::Green);
    draw_lane(f, rows[1], "Download activity", &tracker.recv_heights(), Color::Blue);
}

fn draw_lane(f: &mut ratatui::Frame<'_>, area: Rect, title: &str, heights: &[u64], color: Color) {
    let max_points = area.width.saturating_sub(2) as usize;
    let start = heights.len().saturating_sub(max_points);
    let data = &heights[start..];

    let spark = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .data(data)
        .max(100)
        .style(Style::default().fg(color));
    f.render_widget(spark, area);
}
