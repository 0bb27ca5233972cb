//! Record every tokenizer fallback: file, failure, fallback used, timestamp, recovery status.

use budgetlock_core::models::DegradationEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Component name used for tokenizer fallbacks.
pub const TOKENIZER_COMPONENT: &str = "tokenizer";

/// Fallback recorded for tokenizer failures.
pub const SIZE_ESTIMATE_FALLBACK: &str = "size_estimate";

/// Oldest events are dropped past this many.
pub const MAX_DEGRADATION_EVENTS: usize = 1_000;

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still in degraded mode.
    Active,
    /// An exact count succeeded after the fallback.
    Recovered,
}

/// A tracked degradation event with recovery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Tracks degradation events for alerting and reporting.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new degradation event.
    pub fn record(&mut self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        self.events.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
        if self.events.len() > MAX_DEGRADATION_EVENTS {
            self.events.drain(..self.events.len() - MAX_DEGRADATION_EVENTS);
        }
    }

    /// Record a tokenizer fallback for `file_name`.
    pub fn record_tokenizer_fallback(&mut self, file_name: &str, failure: &str) {
        self.record(DegradationEvent {
            component: TOKENIZER_COMPONENT.to_string(),
            failure: format!("{file_name}: {failure}"),
            fallback_used: SIZE_ESTIMATE_FALLBACK.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Mark every active degradation of `component` as recovered.
    pub fn mark_recovered(&mut self, component: &str) {
        let now = Utc::now();
        for tracked in self.events.iter_mut().filter(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        }) {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
        }
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    /// Get active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    /// Count events in the last N seconds for a given component.
    pub fn count_recent(&self, component: &str, window_secs: i64) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.component == component && t.event.timestamp > cutoff)
            .count()
    }

    /// Take all recorded events, leaving the tracker empty.
    pub fn drain(&mut self) -> Vec<TrackedDegradation> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_recovers_tokenizer_fallbacks() {
        let mut tracker = DegradationTracker::new();
        tracker.record_tokenizer_fallback("blob.bin", "content is not valid UTF-8");
        tracker.record_tokenizer_fallback("dump.bin", "content is not valid UTF-8");

        assert_eq!(tracker.active_degradations().len(), 2);
        assert_eq!(tracker.count_recent(TOKENIZER_COMPONENT, 60), 2);
        assert!(tracker.events()[0].event.failure.starts_with("blob.bin"));

        tracker.mark_recovered(TOKENIZER_COMPONENT);
        assert!(tracker.active_degradations().is_empty());
        assert!(tracker.events().iter().all(|t| t.recovered_at.is_some()));
    }

    #[test]
    fn events_are_capped_oldest_first() {
        let mut tracker = DegradationTracker::new();
        for i in 0..(MAX_DEGRADATION_EVENTS + 25) {
            tracker.record_tokenizer_fallback(&format!("file{i}.bin"), "bad");
        }
        assert_eq!(tracker.events().len(), MAX_DEGRADATION_EVENTS);
        assert!(tracker.events()[0].event.failure.starts_with("file25.bin"));
    }

    #[test]
    fn drain_empties_the_tracker() {
        let mut tracker = DegradationTracker::new();
        tracker.record_tokenizer_fallback("a.bin", "bad");
        assert_eq!(tracker.drain().len(), 1);
        assert!(tracker.events().is_empty());
    }
}
