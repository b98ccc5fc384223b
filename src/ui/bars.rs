//! Tier-colored gauges for the headline percent metrics.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::present::BarView;
use crate::ui::theme::tier_color;

pub fn draw_tier_gauge(f: &mut ratatui::Frame<'_>, area: Rect, title: &str, bar: &BarView) {
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .gauge_style(Style::default().fg(tier_color(bar.tier)))
        .ratio(bar.value / 100.0)
        .label(bar.label.clone());
    f.render_widget(g, area);
}
