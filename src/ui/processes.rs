//! Process table with sortable columns and header hit-testing.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::sort::{ProcessRow, SortKey, SortState};

// Keep the header widths here so drawing and hit-testing match.
const COLS: [Constraint; 4] = [
    Constraint::Length(8),      // PID
    Constraint::Percentage(50), // Name
    Constraint::Length(9),      // CPU %
    Constraint::Length(9),      // Mem %
];

const COL_KEYS: [SortKey; 4] = [SortKey::Pid, SortKey::Name, SortKey::Cpu, SortKey::Mem];

pub fn draw_process_table(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    rows: &[ProcessRow],
    sort: &SortState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Processes ({})", rows.len()));
    f.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.height < 1 || inner.width < 3 {
        return;
    }

    if rows.is_empty() {
        f.render_widget(
            Paragraph::new("no processes monitored").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let header_cells = ["PID", "Name", "CPU %", "Mem %"]
        .iter()
        .zip(COL_KEYS)
        .map(|(&label, key)| {
            if sort.key == Some(key) {
                let arrow = if sort.ascending { "▲" } else { "▼" };
                Cell::from(format!("{label} {arrow}"))
            } else {
                Cell::from(label)
            }
        });
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let viewport = inner.height.saturating_sub(1) as usize;
    let body = rows.iter().take(viewport).map(|r| {
        Row::new(vec![
            Cell::from(r.pid.clone()).style(Style::default().fg(Color::DarkGray)),
            Cell::from(r.name.clone()),
            Cell::from(r.cpu.clone()),
            Cell::from(r.mem.clone()),
        ])
    });

    let table = Table::new(body, COLS.to_vec()).header(header).column_spacing(1);
    f.render_widget(table, inner);
}

/// Maps a left click on the header row to the column's sort key.
pub fn header_hit(mouse: MouseEvent, area: Rect) -> Option<SortKey> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.height == 0 || inner.width == 0 {
        return None;
    }
    let header_row = inner.y;
    if mouse.row != header_row || mouse.column < inner.x || mouse.column >= inner.x + inner.width {
        return None;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(COLS.to_vec())
        .split(Rect { height: 1, ..inner });
    for (rect, key) in cols.iter().zip(COL_KEYS) {
        if mouse.column >= rect.x && mouse.column < rect.x + rect.width {
            return Some(key);
        }
    }
    None
}
