//! Rolling percent charts, one sparkline per metric.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Sparkline},
};

use crate::history::RollingSeries;
use crate::present::safe_to_fixed;

pub fn draw_percent_chart(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    series: &RollingSeries,
) {
    let title = format!("{title} (now: {}%)", safe_to_fixed(series.latest(), 1));
    let data: Vec<u64> = series
        .snapshot()
        .iter()
        .map(|v| v.clamp(0.0, 100.0).round() as u64)
        .collect();
    let spark = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(&data)
        .max(100)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(spark, area);
}
