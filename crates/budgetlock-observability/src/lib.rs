//! # budgetlock-observability
//!
//! Structured tracing with span definitions, intake metrics (including the
//! tokenizer fallback rate), and degradation tracking with alerting.

pub mod degradation;
pub mod engine;
pub mod metrics;
pub mod tracing_setup;

pub use degradation::{evaluate_fallback_alert, AlertLevel, DegradationTracker, FallbackAlert};
pub use engine::IntakeObserver;
pub use metrics::IntakeMetrics;
