//! Device-status report — renders a [`DeviceStatus`] as a flat text block.
//!
//! Sections appear in a fixed order (System, CPU, Memory, Disk, then
//! Battery only when the payload carries one), each as a header line
//! followed by indented `key: value` lines, separated by a blank line.

use std::fmt::Write;

use crate::format::format_bytes;
use crate::status::{BatteryInfo, DeviceStatus, TimeLeft};

/// Render the full multi-line report for a status payload.
#[must_use]
pub fn render(status: &DeviceStatus) -> String {
    let mut out = String::new();

    push_section(
        &mut out,
        "System",
        &[
            (
                "OS",
                format!("{} {}", status.system.system, status.system.version),
            ),
            ("Machine", status.system.machine.clone()),
            ("Processor", status.system.processor.clone()),
        ],
    );

    push_section(
        &mut out,
        "CPU",
        &[
            ("Physical Cores", status.cpu.physical_cores.to_string()),
            ("Total Cores", status.cpu.total_cores.to_string()),
            ("CPU Usage", format!("{}%", status.cpu.cpu_percent)),
            (
                "CPU Frequency",
                format!("{} MHz", status.cpu.frequency.current.round() as i64),
            ),
        ],
    );

    push_section(
        &mut out,
        "Memory",
        &[
            ("Total", format_bytes(status.memory.total)),
            ("Used", format_bytes(status.memory.used)),
            ("Available", format_bytes(status.memory.available)),
            ("Usage", format!("{}%", status.memory.percent)),
        ],
    );

    push_section(
        &mut out,
        "Disk",
        &[
            ("Total", format_bytes(status.disk.total)),
            ("Used", format_bytes(status.disk.used)),
            ("Free", format_bytes(status.disk.free)),
            ("Usage", format!("{}%", status.disk.percent)),
        ],
    );

    if let Some(battery) = &status.battery {
        push_section(&mut out, "Battery", &battery_entries(battery));
    }

    out
}

fn battery_entries(battery: &BatteryInfo) -> Vec<(&'static str, String)> {
    let power_status = if battery.power_plugged {
        "Plugged In"
    } else {
        "On Battery"
    };
    let time_left = match &battery.time_left {
        TimeLeft::Seconds(secs) => format!("{} minutes", (secs / 60.0).round() as i64),
        TimeLeft::Text(text) => text.clone(),
    };

    vec![
        ("Level", format!("{}%", battery.percent)),
        ("Power Status", power_status.to_string()),
        ("Time Left", time_left),
    ]
}

fn push_section(out: &mut String, title: &str, entries: &[(&str, String)]) {
    let _ = writeln!(out, "{title}:");
    for (label, value) in entries {
        let _ = writeln!(out, "  {label}: {value}");
    }
    out.push('\n');
}
