//! Span definitions for batch intake and per-file counting.

/// Create a batch intake span.
#[macro_export]
macro_rules! intake_span {
    ($batch_size:expr) => {
        tracing::info_span!("budgetlock.intake", batch_size = $batch_size)
    };
}

/// Create a per-file token counting span.
#[macro_export]
macro_rules! count_span {
    ($name:expr, $index:expr) => {
        tracing::debug_span!("budgetlock.count", name = %$name, index = $index)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INTAKE: &str = "budgetlock.intake";
    pub const COUNT: &str = "budgetlock.count";
}
