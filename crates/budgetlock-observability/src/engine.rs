//! [`IntakeObserver`] owns intake metrics and tokenizer degradation tracking,
//! and emits the structured events for each pipeline step.

use std::time::Duration;

use budgetlock_core::config::ObservabilityConfig;
use budgetlock_core::errors::IntakeError;
use budgetlock_core::models::{SourceFile, SourceType, TokenCount};

use crate::degradation::tracker::TOKENIZER_COMPONENT;
use crate::degradation::{evaluate_fallback_alert, DegradationTracker, FallbackAlert};
use crate::metrics::IntakeMetrics;
use crate::tracing_setup::events;

/// Observability state for one intake pipeline.
#[derive(Debug, Clone)]
pub struct IntakeObserver {
    pub metrics: IntakeMetrics,
    pub degradation: DegradationTracker,
    alert_threshold: f64,
    min_samples: u64,
}

impl IntakeObserver {
    pub fn new(config: &ObservabilityConfig) -> Self {
        Self {
            metrics: IntakeMetrics::new(),
            degradation: DegradationTracker::new(),
            alert_threshold: config.fallback_alert_ratio,
            min_samples: config.min_samples_for_alert,
        }
    }

    /// A file produced a token count, exact or estimated.
    pub fn on_count(
        &mut self,
        name: &str,
        source_type: SourceType,
        count: &TokenCount,
        latency: Duration,
    ) {
        self.metrics.record_count(count.method, count.tokens);
        self.metrics.record_latency(latency);
        let method = if count.is_estimated() { "estimated" } else { "exact" };
        events::file_processed(name, source_type.as_str(), count.tokens, method);

        if !count.is_estimated() && !self.degradation.active_degradations().is_empty() {
            self.degradation.mark_recovered(TOKENIZER_COMPONENT);
        }
    }

    /// Decoding or tokenizing failed and the size estimate was used instead.
    pub fn on_fallback(&mut self, name: &str, failure: &str, estimate: usize) {
        events::fallback_used(name, failure, estimate);
        self.degradation.record_tokenizer_fallback(name, failure);
    }

    /// A file could not be processed at all.
    pub fn on_file_error(&mut self, error: &IntakeError) {
        match error {
            IntakeError::ReadFailed { .. } => self.metrics.record_read_failure(),
            IntakeError::InvalidInput { .. } => self.metrics.record_invalid_input(),
        }
    }

    /// A file of a completed batch: its fallback, if any, then its count.
    pub fn on_file_processed(
        &mut self,
        record: &SourceFile,
        latency: Duration,
        fallback: Option<&str>,
    ) {
        if let Some(failure) = fallback {
            self.on_fallback(&record.name, failure, record.token_count);
        }
        let count = TokenCount {
            tokens: record.token_count,
            method: record.count_method,
        };
        self.on_count(&record.name, record.source_type, &count, latency);
    }

    /// Raises the fallback-rate alert when the new totals cross the threshold.
    pub fn on_batch_completed(&mut self, files: &[SourceFile], elapsed: Duration) {
        self.metrics.record_batch(true);
        let total_tokens = files.iter().map(|f| f.token_count).sum();
        let estimated = files.iter().filter(|f| f.is_estimated()).count();
        events::batch_completed(files.len(), total_tokens, estimated, elapsed.as_millis() as u64);

        if let Some(alert) = self.fallback_alert() {
            self.metrics.record_alert();
            events::fallback_rate_exceeded(
                alert.fallback_rate,
                alert.threshold,
                alert.level.as_str(),
            );
        }
    }

    pub fn on_batch_rejected(&mut self, error: &IntakeError) {
        self.metrics.record_batch(false);
        events::batch_rejected(error.index(), &error.to_string());
    }

    /// Evaluate the fallback-rate alert against the current metrics.
    pub fn fallback_alert(&self) -> Option<FallbackAlert> {
        evaluate_fallback_alert(&self.metrics, self.alert_threshold, self.min_samples)
    }

    /// Serialize current metrics and active degradations to JSON.
    pub fn metrics_snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "metrics": self.metrics,
            "fallback_rate": self.metrics.fallback_rate(),
            "latency_p50_ms": self.metrics.latency_percentile(0.5).as_millis() as u64,
            "latency_p95_ms": self.metrics.latency_percentile(0.95).as_millis() as u64,
            "active_degradations": self.degradation.active_degradations().len(),
        })
    }
}

impl Default for IntakeObserver {
    fn default() -> Self {
        Self::new(&ObservabilityConfig::default())
    }
}
