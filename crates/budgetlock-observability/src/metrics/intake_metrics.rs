//! File counts, exact vs estimated token counts, read failures, per-file latency.

use std::time::Duration;

use budgetlock_core::models::CountMethod;
use serde::{Deserialize, Serialize};

const MAX_LATENCY_SAMPLES: usize = 10_000;

/// Intake pipeline metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeMetrics {
    pub batches_completed: u64,
    pub batches_rejected: u64,
    /// Files that produced a token count.
    pub files_processed: u64,
    pub exact_counts: u64,
    /// Counts that fell back to the size estimate.
    pub estimated_counts: u64,
    pub read_failures: u64,
    pub invalid_inputs: u64,
    pub tokens_counted: u64,
    /// Fallback-rate alerts raised at batch completion.
    pub alerts_raised: u64,
    /// Per-file latency samples in microseconds.
    latency_samples_us: Vec<u64>,
}

impl IntakeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful count.
    pub fn record_count(&mut self, method: CountMethod, tokens: usize) {
        self.files_processed += 1;
        self.tokens_counted += tokens as u64;
        match method {
            CountMethod::Exact => self.exact_counts += 1,
            CountMethod::Estimated => self.estimated_counts += 1,
        }
    }

    pub fn record_read_failure(&mut self) {
        self.read_failures += 1;
    }

    pub fn record_invalid_input(&mut self) {
        self.invalid_inputs += 1;
    }

    /// Record a batch outcome.
    pub fn record_batch(&mut self, completed: bool) {
        if completed {
            self.batches_completed += 1;
        } else {
            self.batches_rejected += 1;
        }
    }

    pub fn record_alert(&mut self) {
        self.alerts_raised += 1;
    }

    /// Record a per-file latency.
    pub fn record_latency(&mut self, duration: Duration) {
        self.latency_samples_us.push(duration.as_micros() as u64);
        if self.latency_samples_us.len() > MAX_LATENCY_SAMPLES {
            self.latency_samples_us
                .drain(..self.latency_samples_us.len() - MAX_LATENCY_SAMPLES);
        }
    }

    /// Share of counted files that used the size estimate.
    pub fn fallback_rate(&self) -> f64 {
        if self.files_processed == 0 {
            0.0
        } else {
            self.estimated_counts as f64 / self.files_processed as f64
        }
    }

    /// Per-file latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.latency_samples_us.is_empty() {
            return Duration::ZERO;
        }
        let mut sorted = self.latency_samples_us.clone();
        sorted.sort_unstable();
        let idx = ((p * (sorted.len() - 1) as f64).round() as usize).min(sorted.len() - 1);
        Duration::from_micros(sorted[idx])
    }

    pub fn latency_sample_count(&self) -> usize {
        self.latency_samples_us.len()
    }

    /// Reset all metrics (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
