//! Shared UI theme: tier and status colors, battery glyphs.

use ratatui::style::Color;

use crate::present::{BatteryLevel, StatusLevel, Tier};

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Empty => Color::DarkGray,
        Tier::Low => Color::Green,
        Tier::Medium => Color::Yellow,
        Tier::High => Color::Red,
    }
}

pub fn status_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Ok => Color::Green,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Critical => Color::Red,
    }
}

pub fn battery_glyph(level: BatteryLevel) -> &'static str {
    match level {
        BatteryLevel::Empty => "▏",
        BatteryLevel::Quarter => "▎",
        BatteryLevel::Half => "▌",
        BatteryLevel::ThreeQuarters => "▊",
        BatteryLevel::Full => "█",
    }
}

pub fn battery_color(level: BatteryLevel) -> Color {
    match level {
        BatteryLevel::Empty | BatteryLevel::Quarter => Color::Red,
        BatteryLevel::Half => Color::Yellow,
        BatteryLevel::ThreeQuarters | BatteryLevel::Full => Color::Green,
    }
}
