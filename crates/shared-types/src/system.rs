use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `actuator/health` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub components: BTreeMap<String, ComponentHealth>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("UP")
    }
}

/// `/actuator/metrics/{name}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricResponse {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_unit: Option<String>,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    #[serde(default)]
    pub available_tags: Vec<AvailableTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub statistic: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableTag {
    pub tag: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl MetricResponse {
    /// Value of the named statistic (`VALUE`, `COUNT`, `TOTAL`, ...).
    pub fn statistic(&self, statistic: &str) -> Option<f64> {
        self.measurements
            .iter()
            .find(|m| m.statistic.eq_ignore_ascii_case(statistic))
            .map(|m| m.value)
    }
}

/// Heap and non-heap memory in bytes, each fetched with its own area tag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryUsage {
    pub heap_bytes: f64,
    pub non_heap_bytes: f64,
}

/// Render a byte count as `12.3 MB` (binary units).
pub fn format_bytes(bytes: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes.max(0.0);
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{value:.0} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// One line from `/api/logging/recent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    #[serde(default)]
    pub logger: Option<String>,
    pub message: String,
}
