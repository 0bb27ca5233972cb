//! Fallback-rate alert: rate >= threshold → warning, >= 2× threshold → critical.

use serde::{Deserialize, Serialize};

use crate::metrics::IntakeMetrics;

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Raised when too many files fall back to the size estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackAlert {
    pub level: AlertLevel,
    pub fallback_rate: f64,
    pub threshold: f64,
    pub message: String,
}

/// Evaluate the fallback rate once at least `min_samples` files were counted.
pub fn evaluate_fallback_alert(
    metrics: &IntakeMetrics,
    threshold: f64,
    min_samples: u64,
) -> Option<FallbackAlert> {
    if metrics.files_processed == 0 || metrics.files_processed < min_samples {
        return None;
    }
    let rate = metrics.fallback_rate();
    if rate < threshold {
        return None;
    }
    let level = if rate >= threshold * 2.0 {
        AlertLevel::Critical
    } else {
        AlertLevel::Warning
    };
    Some(FallbackAlert {
        level,
        fallback_rate: rate,
        threshold,
        message: format!(
            "{} of {} files used the size estimate ({:.1}%)",
            metrics.estimated_counts,
            metrics.files_processed,
            rate * 100.0
        ),
    })
}
