use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json_logs: bool,
    /// Fallback rate (0.0–1.0) above which an alert is raised.
    pub fallback_alert_ratio: f64,
    /// Files that must be counted before the fallback rate is evaluated.
    pub min_samples_for_alert: u64,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
            fallback_alert_ratio: defaults::DEFAULT_FALLBACK_ALERT_RATIO,
            min_samples_for_alert: defaults::DEFAULT_MIN_SAMPLES_FOR_ALERT,
        }
    }
}
