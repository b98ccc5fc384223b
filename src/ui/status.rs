//! System status panel: status line, details, recommendations, uptime.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::present::{recommendation_lines, status_details_text, status_level};
use crate::types::SystemStats;
use crate::ui::theme::status_color;

pub fn draw_status(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    system: Option<&SystemStats>,
    heaviest: Option<String>,
) {
    let block = Block::default().borders(Borders::ALL).title("System");
    let Some(sys) = system else {
        f.render_widget(block, area);
        return;
    };

    let level = status_level(&sys.status);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(status_color(level))),
            Span::styled(
                format!(
                    "System {}",
                    if sys.status.is_empty() { "N/A" } else { sys.status.as_str() }
                ),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(status_details_text(&sys.status_details)),
    ];

    if let Some(h) = heaviest {
        lines.push(Line::from(vec![
            Span::styled("top: ", Style::default().fg(Color::DarkGray)),
            Span::raw(h),
        ]));
    }

    lines.push(Line::from(""));
    for r in recommendation_lines(&sys.recommendations) {
        lines.push(Line::from(format!("• {r}")));
    }

    if let Some(up) = &sys.uptime {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("uptime: ", Style::default().fg(Color::DarkGray)),
            Span::raw(up.uptime_formatted.clone().unwrap_or_else(|| "N/A".into())),
        ]));
        lines.push(Line::from(vec![
            Span::styled("booted: ", Style::default().fg(Color::DarkGray)),
            Span::raw(up.boot_time.clone().unwrap_or_else(|| "N/A".into())),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
