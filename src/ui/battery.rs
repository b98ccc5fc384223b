//! Battery gauge; the caller hides this panel when no battery is reported.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::present::BatteryView;
use crate::ui::theme::{battery_color, battery_glyph};

pub fn draw_battery(f: &mut ratatui::Frame<'_>, area: Rect, view: &BatteryView) {
    let title = format!(
        "Battery {} {} ({})",
        battery_glyph(view.level),
        view.status,
        view.time_left
    );
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(battery_color(view.level)))
        .ratio(view.bar.value / 100.0)
        .label(format!("{:.0}%", view.percent));
    f.render_widget(g, area);
}
