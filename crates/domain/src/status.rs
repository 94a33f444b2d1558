//! Device status — the payload returned by the backend's status endpoint.
//!
//! All fields are read-only inputs to the report renderer; the payload
//! lives for a single request/response cycle. Unknown fields in the wire
//! payload (timestamps, per-interface network stats, …) are ignored.

use serde::Deserialize;

/// Snapshot of the remote node's hardware and OS state.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceStatus {
    pub system: SystemInfo,
    pub cpu: CpuInfo,
    pub memory: MemoryUsage,
    pub disk: DiskUsage,
    /// Absent (or `null`) on machines without a battery.
    pub battery: Option<BatteryInfo>,
}

/// Operating system and machine identification.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemInfo {
    pub system: String,
    pub version: String,
    pub machine: String,
    pub processor: String,
}

/// Core counts, load, and clock frequency.
#[derive(Debug, Clone, Deserialize)]
pub struct CpuInfo {
    pub physical_cores: u32,
    pub total_cores: u32,
    pub cpu_percent: f64,
    pub frequency: CpuFrequency,
}

/// Clock frequency in MHz.
#[derive(Debug, Clone, Deserialize)]
pub struct CpuFrequency {
    pub current: f64,
}

/// Virtual memory usage in bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryUsage {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub percent: f64,
}

/// Root filesystem usage in bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

/// Battery charge state, present only on battery-powered machines.
#[derive(Debug, Clone, Deserialize)]
pub struct BatteryInfo {
    pub percent: f64,
    pub power_plugged: bool,
    pub time_left: TimeLeft,
}

/// Remaining battery time: seconds when the backend can estimate it,
/// otherwise a descriptive string (e.g. `"Calculating..."`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimeLeft {
    Seconds(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_payload_without_battery() {
        let status: DeviceStatus = serde_json::from_value(serde_json::json!({
            "system": {
                "system": "Linux",
                "version": "6.1.0",
                "machine": "x86_64",
                "processor": "x86_64"
            },
            "cpu": {
                "physical_cores": 4,
                "total_cores": 8,
                "cpu_percent": 12.5,
                "frequency": { "current": 2400.0, "min": 800.0, "max": 4200.0 }
            },
            "memory": { "total": 16, "used": 8, "available": 8, "percent": 50.0 },
            "disk": { "total": 100, "used": 40, "free": 60, "percent": 40.0 },
            "battery": null,
            "timestamp": "2024-01-01T00:00:00"
        }))
        .unwrap();

        assert!(status.battery.is_none());
        assert_eq!(status.cpu.total_cores, 8);
    }

    #[test]
    fn should_decode_numeric_and_textual_time_left() {
        let numeric: TimeLeft = serde_json::from_value(serde_json::json!(5400)).unwrap();
        assert!(matches!(numeric, TimeLeft::Seconds(s) if (s - 5400.0).abs() < f64::EPSILON));

        let text: TimeLeft = serde_json::from_value(serde_json::json!("Calculating...")).unwrap();
        assert!(matches!(text, TimeLeft::Text(t) if t == "Calculating..."));
    }
}
