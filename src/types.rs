//! Types that mirror the `/data` endpoint's JSON schema.
//!
//! The upstream feed is best-effort: any numeric field may be missing, null,
//! a numeric string, or the literal `"N/A"`. Numeric leaves therefore decode
//! through lenient helpers into `Option<f64>` and the presentation layer
//! substitutes sentinels instead of ever seeing NaN.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MetricSample {
    pub cpu: Option<CpuStats>,
    pub ram: Option<SpaceStats>,
    pub disk: Option<SpaceStats>,
    pub gpu: Option<GpuStats>,
    pub network: Option<NetworkStats>,
    pub disk_io: Option<DiskIoStats>,
    pub battery: Option<BatteryStats>,
    // Pre-sorted by the feed: element 0 is the heaviest process. Absent is
    // not the same as empty: a missing key leaves the table untouched while
    // an empty list shows the placeholder row.
    #[serde(default)]
    pub processes: Option<Vec<ProcessEntry>>,
    pub system: Option<SystemStats>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CpuStats {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
}

/// Shared shape for RAM and disk usage (percent plus GB figures).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SpaceStats {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub used: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub free: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GpuStats {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub usage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
    // VRAM figures in MB
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mem_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mem_used: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mem_free: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NetworkStats {
    // cumulative MB since boot; the client diffs these across polls
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub recv: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub download_speed: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub upload_speed: Option<f64>,
    // "KB/s" or "MB/s", chosen by the backend and passed through verbatim
    #[serde(default)]
    pub download_unit: Option<String>,
    #[serde(default)]
    pub upload_unit: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub packets_sent: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub packets_recv: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DiskIoStats {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub read: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub write: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BatteryStats {
    // The backend reports "N/A" on desktops; lenient decode maps that to None.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percent: Option<f64>,
    #[serde(default)]
    pub plugged: bool,
    #[serde(default)]
    pub time_left: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProcessEntry {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub pid: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cpu_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub memory_percent: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SystemStats {
    // "Normal" | "Beban Tinggi" | "Kritis"
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_details: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub uptime: Option<UptimeStats>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UptimeStats {
    #[serde(default)]
    pub uptime_formatted: Option<String>,
    #[serde(default)]
    pub boot_time: Option<String>,
}

/// Accepts a JSON number or a numeric string; everything else becomes None.
pub fn parse_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    let v = Value::deserialize(de)?;
    Ok(parse_f64(&v))
}

fn lenient_i64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    let v = Value::deserialize(de)?;
    Ok(match &v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

fn lenient_u64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u64>, D::Error> {
    let v = Value::deserialize(de)?;
    Ok(match &v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_strings_and_na() {
        let s: MetricSample = serde_json::from_str(
            r#"{
                "cpu": {"percent": "55.2", "temperature": "N/A"},
                "battery": {"percent": "N/A", "plugged": false}
            }"#,
        )
        .unwrap();
        assert_eq!(s.cpu.as_ref().unwrap().percent, Some(55.2));
        assert_eq!(s.cpu.as_ref().unwrap().temperature, None);
        assert_eq!(s.battery.as_ref().unwrap().percent, None);
    }

    #[test]
    fn missing_sections_decode_to_none() {
        let s: MetricSample = serde_json::from_str(r#"{"ram": {"percent": 42.0}}"#).unwrap();
        assert!(s.cpu.is_none());
        assert!(s.battery.is_none());
        assert!(s.processes.is_none());
        assert_eq!(s.ram.unwrap().percent, Some(42.0));
    }

    #[test]
    fn garbage_numerics_become_none_not_errors() {
        let s: MetricSample = serde_json::from_str(
            r#"{
                "disk": {"percent": [1,2], "total": null, "used": {}, "free": "9.3"},
                "processes": [{"pid": "123", "name": "bash", "cpu_percent": "x"}]
            }"#,
        )
        .unwrap();
        let d = s.disk.unwrap();
        assert_eq!(d.percent, None);
        assert_eq!(d.total, None);
        assert_eq!(d.used, None);
        assert_eq!(d.free, Some(9.3));
        let procs = s.processes.unwrap();
        assert_eq!(procs[0].pid, Some(123));
        assert_eq!(procs[0].cpu_percent, None);
    }
}
