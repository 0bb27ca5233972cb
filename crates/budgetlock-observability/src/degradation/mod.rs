//! Tokenizer degradation tracking and alerting.

pub mod alerting;
pub mod tracker;

pub use alerting::{evaluate_fallback_alert, AlertLevel, FallbackAlert};
pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation};
