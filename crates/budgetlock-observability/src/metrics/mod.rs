//! Intake metrics.

pub mod intake_metrics;

pub use intake_metrics::IntakeMetrics;
