use std::time::Duration;

use budgetlock_core::config::ObservabilityConfig;
use budgetlock_core::errors::IntakeError;
use budgetlock_core::models::{SourceFile, SourceType, TokenCount};
use budgetlock_observability::degradation::tracker::TOKENIZER_COMPONENT;
use budgetlock_observability::tracing_setup::{init_tracing_with_filter, spans};
use budgetlock_observability::{AlertLevel, IntakeObserver};

fn observer(min_samples: u64) -> IntakeObserver {
    IntakeObserver::new(&ObservabilityConfig {
        min_samples_for_alert: min_samples,
        ..Default::default()
    })
}

#[test]
fn fallback_is_tracked_then_recovered_by_exact_count() {
    let mut obs = observer(20);

    obs.on_fallback("firmware.bin", "content is not valid UTF-8", 256);
    obs.on_count(
        "firmware.bin",
        SourceType::Text,
        &TokenCount::estimated(256),
        Duration::from_millis(150),
    );
    assert_eq!(obs.degradation.active_degradations().len(), 1);
    assert_eq!(obs.metrics.estimated_counts, 1);

    obs.on_count(
        "README.md",
        SourceType::Docs,
        &TokenCount::exact(900),
        Duration::from_millis(150),
    );
    assert!(obs.degradation.active_degradations().is_empty());
    assert_eq!(obs.degradation.count_recent(TOKENIZER_COMPONENT, 60), 1);
    assert!((obs.metrics.fallback_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn batch_completion_raises_fallback_alert() {
    let mut obs = observer(2);
    let files = vec![
        SourceFile::new("a.bin", 8, SourceType::Text, TokenCount::estimated(2)),
        SourceFile::new("b.bin", 8, SourceType::Text, TokenCount::estimated(2)),
    ];
    for f in &files {
        obs.on_count(
            &f.name,
            f.source_type,
            &TokenCount::estimated(f.token_count),
            Duration::ZERO,
        );
    }
    obs.on_batch_completed(&files, Duration::from_millis(150));

    assert_eq!(obs.metrics.batches_completed, 1);
    assert_eq!(obs.metrics.alerts_raised, 1);
    let alert = obs.fallback_alert().unwrap();
    assert_eq!(alert.level, AlertLevel::Critical);
}

#[test]
fn polling_the_alert_does_not_raise_it_again() {
    let mut obs = observer(1);
    let files = vec![SourceFile::new(
        "a.bin",
        8,
        SourceType::Text,
        TokenCount::estimated(2),
    )];
    obs.on_file_processed(&files[0], Duration::ZERO, Some("content is not valid UTF-8"));
    obs.on_batch_completed(&files, Duration::ZERO);

    for _ in 0..5 {
        assert!(obs.fallback_alert().is_some());
    }
    assert_eq!(obs.metrics.alerts_raised, 1);
}

#[test]
fn processed_file_records_fallback_then_count() {
    let mut obs = IntakeObserver::default();
    let estimated = SourceFile::new("a.bin", 10, SourceType::Text, TokenCount::estimated(3));
    let exact = SourceFile::new("b.md", 10, SourceType::Docs, TokenCount::exact(4));

    obs.on_file_processed(&estimated, Duration::ZERO, Some("content is not valid UTF-8"));
    assert_eq!(obs.degradation.active_degradations().len(), 1);

    obs.on_file_processed(&exact, Duration::ZERO, None);
    assert!(obs.degradation.active_degradations().is_empty());
    assert_eq!(obs.metrics.files_processed, 2);
    assert_eq!(obs.metrics.estimated_counts, 1);
    assert_eq!(obs.metrics.tokens_counted, 7);
}

#[test]
fn rejected_batch_records_failure_kind() {
    let mut obs = IntakeObserver::default();
    let err = IntakeError::ReadFailed {
        name: "gone.log".into(),
        index: 1,
        reason: "no such file".into(),
    };
    obs.on_file_error(&err);
    obs.on_batch_rejected(&err);

    obs.on_file_error(&IntakeError::InvalidInput {
        index: 0,
        reason: "empty filename".into(),
    });

    assert_eq!(obs.metrics.read_failures, 1);
    assert_eq!(obs.metrics.invalid_inputs, 1);
    assert_eq!(obs.metrics.batches_rejected, 1);
    assert_eq!(obs.metrics.batches_completed, 0);
}

#[test]
fn metrics_snapshot_is_json() {
    let mut obs = IntakeObserver::default();
    obs.on_count(
        "main.py",
        SourceType::Code,
        &TokenCount::exact(42),
        Duration::from_millis(160),
    );
    let snapshot = obs.metrics_snapshot();
    assert_eq!(snapshot["metrics"]["tokens_counted"], 42);
    assert_eq!(snapshot["latency_p50_ms"], 160);
    assert_eq!(snapshot["active_degradations"], 0);
}

#[test]
fn tracing_init_is_idempotent() {
    let _ = init_tracing_with_filter("budgetlock=debug");
    assert!(!init_tracing_with_filter("info"));
}

#[test]
fn span_names_are_namespaced() {
    assert!(spans::names::INTAKE.starts_with("budgetlock."));
    assert!(spans::names::COUNT.starts_with("budgetlock."));
    let span = budgetlock_observability::intake_span!(3);
    let _guard = span.enter();
}
