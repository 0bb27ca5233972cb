//! Structured log events for intake operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of a batch.
pub fn batch_started(batch_size: usize) {
    tracing::info!(event = "batch_started", batch_size = batch_size, "intake batch started");
}

/// Log a completed batch.
pub fn batch_completed(files: usize, total_tokens: usize, estimated: usize, elapsed_ms: u64) {
    tracing::info!(
        event = "batch_completed",
        files = files,
        total_tokens = total_tokens,
        estimated = estimated,
        elapsed_ms = elapsed_ms,
        "intake batch completed"
    );
}

/// Log a batch rejected because one of its files failed.
pub fn batch_rejected(index: usize, error: &str) {
    tracing::error!(
        event = "batch_rejected",
        index = index,
        error = %error,
        "intake batch rejected"
    );
}

/// Log a single processed file.
pub fn file_processed(name: &str, source_type: &str, tokens: usize, method: &str) {
    tracing::debug!(
        event = "file_processed",
        name = %name,
        source_type = %source_type,
        tokens = tokens,
        method = %method,
        "file processed"
    );
}

/// Log a tokenizer fallback to the size estimate.
pub fn fallback_used(name: &str, failure: &str, estimate: usize) {
    tracing::warn!(
        event = "fallback_used",
        name = %name,
        failure = %failure,
        estimate = estimate,
        "tokenization failed, using size estimate"
    );
}

/// Log a fallback rate above the alert threshold.
pub fn fallback_rate_exceeded(rate: f64, threshold: f64, level: &str) {
    tracing::warn!(
        event = "fallback_rate_exceeded",
        rate = rate,
        threshold = threshold,
        level = %level,
        "tokenizer fallback rate above threshold"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
