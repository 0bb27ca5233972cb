use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// File intake configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Minimum wall time per processed file, in milliseconds. 0 disables the floor.
    pub min_latency_ms: u64,
    /// Token capacity of the intake gauge.
    pub capacity: usize,
}

impl IntakeConfig {
    /// The per-file latency floor as a `Duration`.
    pub fn min_latency(&self) -> Duration {
        Duration::from_millis(self.min_latency_ms)
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            min_latency_ms: defaults::DEFAULT_MIN_LATENCY_MS,
            capacity: defaults::DEFAULT_CAPACITY,
        }
    }
}
