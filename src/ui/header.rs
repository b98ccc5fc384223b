//! Top header: endpoint, poll cadence, connection badge, last update time.

use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::Badge;

pub fn draw_header(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    url: &str,
    interval_secs: u64,
    badge: Option<&Badge>,
    last_update: Option<&DateTime<Local>>,
) {
    let mut spans = vec![Span::raw(format!(
        "polltop — {url} | every {interval_secs}s ('q' quit, 'i' interval)  "
    ))];

    match badge {
        Some(Badge::Loading) => {
            spans.push(Span::styled("loading…", Style::default().fg(Color::Blue)));
        }
        Some(Badge::Connected) => {
            spans.push(Span::styled("connected", Style::default().fg(Color::Green)));
        }
        Some(Badge::Error(msg)) => {
            spans.push(Span::styled(
                format!("error: {msg}"),
                Style::default().fg(Color::Red),
            ));
        }
        None => {}
    }

    if let Some(t) = last_update {
        spans.push(Span::styled(
            format!("  updated {}", t.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(
        Block::default().title(Line::from(spans)).borders(Borders::BOTTOM),
        area,
    );
}
