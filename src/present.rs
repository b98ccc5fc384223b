//! Pure presentation rules: sentinel-safe formatting, bar tiering, and
//! status derivation. Nothing here touches the terminal; the `ui` modules
//! apply these results with ratatui.

use crate::sort::ProcessRow;
use crate::types::{BatteryStats, ProcessEntry};

/// Fixed-precision decimal string, or "N/A" when the value is absent or
/// non-finite. Used for every textual numeric display.
pub fn safe_to_fixed(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.precision$}"),
        _ => "N/A".into(),
    }
}

/// Numeric fallback for bar geometry: widths/heights cannot render "N/A".
pub fn safe_to_float(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Below 0.1: rendered as an empty bar with a forced "0.0" label.
    Empty,
    Low,
    Medium,
    High,
}

pub fn tier_for(v: f64) -> Tier {
    if v < 0.1 {
        Tier::Empty
    } else if v < 50.0 {
        Tier::Low
    } else if v < 80.0 {
        Tier::Medium
    } else {
        Tier::High
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    /// Clamped to [0, 100].
    pub value: f64,
    pub label: String,
    pub tier: Tier,
}

/// Progress-bar state for one metric.
pub fn bar(value: Option<f64>, suffix: &str) -> BarView {
    let v = safe_to_float(value).clamp(0.0, 100.0);
    let tier = tier_for(v);
    let label = if tier == Tier::Empty {
        format!("0.0{suffix}")
    } else {
        format!("{v:.1}{suffix}")
    };
    BarView { value: v, label, tier }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    Empty,
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

pub fn battery_level(percent: f64) -> BatteryLevel {
    if percent <= 10.0 {
        BatteryLevel::Empty
    } else if percent <= 25.0 {
        BatteryLevel::Quarter
    } else if percent <= 50.0 {
        BatteryLevel::Half
    } else if percent <= 75.0 {
        BatteryLevel::ThreeQuarters
    } else {
        BatteryLevel::Full
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatteryView {
    pub percent: f64,
    pub bar: BarView,
    pub level: BatteryLevel,
    pub plugged: bool,
    pub status: String,
    pub time_left: String,
}

/// None means the panel is hidden: no battery object, or a percent the feed
/// could not report ("N/A" on desktops).
pub fn battery_view(battery: Option<&BatteryStats>) -> Option<BatteryView> {
    let b = battery?;
    let percent = b.percent.filter(|p| p.is_finite())?;
    Some(BatteryView {
        percent,
        bar: bar(Some(percent), "%"),
        level: battery_level(percent),
        plugged: b.plugged,
        status: if b.plugged { "charging".into() } else { "on battery".into() },
        time_left: b.time_left.clone().unwrap_or_else(|| "-".into()),
    })
}

pub fn format_temp(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.1} °C"),
        _ => "N/A".into(),
    }
}

/// Speed label in the unit the backend chose: KB/s figures get one decimal,
/// MB/s two. The unit string is passed through verbatim.
pub fn format_speed(speed: Option<f64>, unit: Option<&str>) -> String {
    let unit = unit.unwrap_or("MB/s");
    let precision = if unit == "KB/s" { 1 } else { 2 };
    format!("{} {unit}", safe_to_fixed(Some(safe_to_float(speed)), precision))
}

pub fn packets_text(count: Option<u64>) -> String {
    count.map(|n| n.to_string()).unwrap_or_else(|| "N/A".into())
}

/// The feed pre-sorts processes, heaviest first; element 0 is trusted.
pub fn heaviest_process_line(processes: &[ProcessEntry]) -> String {
    match processes.first() {
        Some(p) => format!(
            "{} ({}% CPU, {}% MEM)",
            p.name,
            safe_to_fixed(p.cpu_percent, 1),
            safe_to_fixed(p.memory_percent, 1)
        ),
        None => "no process data".into(),
    }
}

/// Display cells for the process table, in feed order.
pub fn process_rows(processes: &[ProcessEntry]) -> Vec<ProcessRow> {
    processes
        .iter()
        .map(|p| ProcessRow {
            pid: p.pid.map(|n| n.to_string()).unwrap_or_else(|| "N/A".into()),
            name: if p.name.is_empty() { "N/A".into() } else { p.name.clone() },
            cpu: format!("{}%", safe_to_fixed(p.cpu_percent, 1)),
            mem: format!("{}%", safe_to_fixed(p.memory_percent, 1)),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Ok,
    Warning,
    Critical,
}

pub fn status_level(status: &str) -> StatusLevel {
    match status {
        "Kritis" => StatusLevel::Critical,
        "Beban Tinggi" => StatusLevel::Warning,
        _ => StatusLevel::Ok,
    }
}

pub fn status_details_text(details: &[String]) -> String {
    if details.is_empty() {
        "All components running optimally.".into()
    } else {
        details.join(", ")
    }
}

pub fn recommendation_lines(recommendations: &[String]) -> Vec<String> {
    if recommendations.is_empty() {
        vec!["No specific recommendations.".into()]
    } else {
        recommendations.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_to_fixed_substitutes_na() {
        assert_eq!(safe_to_fixed(Some(f64::NAN), 1), "N/A");
        assert_eq!(safe_to_fixed(None, 1), "N/A");
        assert_eq!(safe_to_fixed(Some(12.345), 1), "12.3");
        assert_eq!(safe_to_fixed(Some(12.345), 2), "12.35");
    }

    #[test]
    fn safe_to_float_substitutes_zero() {
        assert_eq!(safe_to_float(None), 0.0);
        assert_eq!(safe_to_float(Some(f64::INFINITY)), 0.0);
        assert_eq!(safe_to_float(Some(7.2)), 7.2);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier_for(0.05), Tier::Empty);
        assert_eq!(tier_for(0.1), Tier::Low);
        assert_eq!(tier_for(49.99), Tier::Low);
        assert_eq!(tier_for(50.0), Tier::Medium);
        assert_eq!(tier_for(79.99), Tier::Medium);
        assert_eq!(tier_for(80.0), Tier::High);
    }

    #[test]
    fn empty_bar_forces_zero_label() {
        let b = bar(Some(0.05), "%");
        assert_eq!(b.tier, Tier::Empty);
        assert_eq!(b.label, "0.0%");
        // Absent value degrades to an empty bar, not a panic or NaN width.
        let b = bar(None, "%");
        assert_eq!(b.value, 0.0);
        assert_eq!(b.label, "0.0%");
    }

    #[test]
    fn battery_icon_tiers() {
        assert_eq!(battery_level(5.0), BatteryLevel::Empty);
        assert_eq!(battery_level(10.0), BatteryLevel::Empty);
        assert_eq!(battery_level(25.0), BatteryLevel::Quarter);
        assert_eq!(battery_level(50.0), BatteryLevel::Half);
        assert_eq!(battery_level(75.0), BatteryLevel::ThreeQuarters);
        assert_eq!(battery_level(76.0), BatteryLevel::Full);
    }

    #[test]
    fn battery_panel_hidden_without_numeric_percent() {
        assert!(battery_view(None).is_none());
        let na = BatteryStats { percent: None, plugged: false, time_left: None };
        assert!(battery_view(Some(&na)).is_none());
        let ok = BatteryStats { percent: Some(80.0), plugged: true, time_left: Some("2h".into()) };
        let v = battery_view(Some(&ok)).unwrap();
        assert_eq!(v.level, BatteryLevel::Full);
        assert_eq!(v.time_left, "2h");
    }

    #[test]
    fn temperature_formatting() {
        assert_eq!(format_temp(None), "N/A");
        assert_eq!(format_temp(Some(f64::NAN)), "N/A");
        assert_eq!(format_temp(Some(62.25)), "62.2 °C");
    }

    #[test]
    fn speed_precision_follows_reported_unit() {
        assert_eq!(format_speed(Some(123.456), Some("KB/s")), "123.5 KB/s");
        assert_eq!(format_speed(Some(1.5), Some("MB/s")), "1.50 MB/s");
        // Missing speed/unit degrade to zero in the default unit.
        assert_eq!(format_speed(None, None), "0.00 MB/s");
    }

    #[test]
    fn heaviest_process_uses_first_element_verbatim() {
        let procs = vec![
            ProcessEntry {
                pid: Some(10),
                name: "chrome".into(),
                cpu_percent: Some(42.0),
                memory_percent: Some(7.5),
            },
            ProcessEntry {
                pid: Some(11),
                name: "heavier-but-second".into(),
                cpu_percent: Some(99.0),
                memory_percent: Some(50.0),
            },
        ];
        assert_eq!(heaviest_process_line(&procs), "chrome (42.0% CPU, 7.5% MEM)");
        assert_eq!(heaviest_process_line(&[]), "no process data");
    }

    #[test]
    fn status_mapping_and_placeholders() {
        assert_eq!(status_level("Kritis"), StatusLevel::Critical);
        assert_eq!(status_level("Beban Tinggi"), StatusLevel::Warning);
        assert_eq!(status_level("Normal"), StatusLevel::Ok);
        assert_eq!(status_level("anything else"), StatusLevel::Ok);

        assert_eq!(status_details_text(&[]), "All components running optimally.");
        assert_eq!(
            status_details_text(&["CPU Overload".into(), "RAM Tinggi".into()]),
            "CPU Overload, RAM Tinggi"
        );
        assert_eq!(recommendation_lines(&[]), vec!["No specific recommendations."]);
    }
}
