// Single source of truth for all default values.

use crate::models::{BudgetPreset, TaskMode};

// --- Intake ---
pub const DEFAULT_MIN_LATENCY_MS: u64 = 150;
pub const DEFAULT_CAPACITY: usize = 8_192;

// --- Tokens ---
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

// --- Compile ---
pub const DEFAULT_BUDGET: BudgetPreset = BudgetPreset::Standard;
pub const DEFAULT_MODE: TaskMode = TaskMode::Debug;
pub const DEFAULT_STRICT: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const DEFAULT_FALLBACK_ALERT_RATIO: f64 = 0.25;
pub const DEFAULT_MIN_SAMPLES_FOR_ALERT: u64 = 20;
