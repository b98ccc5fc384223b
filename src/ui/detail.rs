//! Detail panels: labeled numeric fields for CPU/RAM, disk, GPU, and network.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::present::{format_speed, format_temp, packets_text, safe_to_fixed};
use crate::types::MetricSample;

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn panel(f: &mut ratatui::Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(p, area);
}

pub fn draw_cpu_ram_detail(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&MetricSample>) {
    let mut lines = Vec::new();
    if let Some(cpu) = s.and_then(|s| s.cpu.as_ref()) {
        lines.push(field("cpu", format!("{}%", safe_to_fixed(cpu.percent, 1))));
        lines.push(field("cpu temp", format_temp(cpu.temperature)));
    }
    if let Some(ram) = s.and_then(|s| s.ram.as_ref()) {
        lines.push(field("ram total", format!("{} GB", safe_to_fixed(ram.total, 1))));
        lines.push(field("ram used", format!("{} GB", safe_to_fixed(ram.used, 1))));
        lines.push(field("ram free", format!("{} GB", safe_to_fixed(ram.free, 1))));
    }
    panel(f, area, "CPU / RAM", lines);
}

pub fn draw_disk_detail(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&MetricSample>) {
    let mut lines = Vec::new();
    if let Some(disk) = s.and_then(|s| s.disk.as_ref()) {
        // Whole-GB figures for disk sizes
        lines.push(field("total", format!("{} GB", safe_to_fixed(disk.total, 0))));
        lines.push(field("used", format!("{} GB", safe_to_fixed(disk.used, 0))));
        lines.push(field("free", format!("{} GB", safe_to_fixed(disk.free, 0))));
    }
    if let Some(io) = s.and_then(|s| s.disk_io.as_ref()) {
        lines.push(field("read", format!("{} MB/s", safe_to_fixed(io.read, 1))));
        lines.push(field("write", format!("{} MB/s", safe_to_fixed(io.write, 1))));
    }
    panel(f, area, "Disk", lines);
}

pub fn draw_gpu_detail(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&MetricSample>) {
    let mut lines = Vec::new();
    if let Some(gpu) = s.and_then(|s| s.gpu.as_ref()) {
        lines.push(field("name", gpu.name.clone().unwrap_or_else(|| "N/A".into())));
        lines.push(field("usage", format!("{}%", safe_to_fixed(gpu.usage, 1))));
        lines.push(field("temp", format_temp(gpu.temperature)));
        lines.push(field(
            "vram",
            format!(
                "{} / {} MB",
                safe_to_fixed(gpu.mem_used, 1),
                safe_to_fixed(gpu.mem_total, 1)
            ),
        ));
        lines.push(field("vram free", format!("{} MB", safe_to_fixed(gpu.mem_free, 1))));
    }
    panel(f, area, "GPU", lines);
}

pub fn draw_net_detail(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&MetricSample>) {
    let mut lines = Vec::new();
    if let Some(net) = s.and_then(|s| s.network.as_ref()) {
        lines.push(field(
            "down",
            format_speed(net.download_speed, net.download_unit.as_deref()),
        ));
        lines.push(field(
            "up",
            format_speed(net.upload_speed, net.upload_unit.as_deref()),
        ));
        lines.push(field("sent", format!("{} MB", safe_to_fixed(net.sent, 1))));
        lines.push(field("recv", format!("{} MB", safe_to_fixed(net.recv, 1))));
        lines.push(field(
            "packets",
            format!("{} out / {} in", packets_text(net.packets_sent), packets_text(net.packets_recv)),
        ));
    }
    panel(f, area, "Network", lines);
}
