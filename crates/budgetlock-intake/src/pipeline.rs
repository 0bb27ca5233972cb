//! [`IntakePipeline`]: batch intake with cooperative per-file concurrency.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures::future::{join_all, try_join_all};
use tokio::time::Instant;
use tracing::Instrument;

use budgetlock_core::config::{BudgetLockConfig, IntakeConfig, ObservabilityConfig};
use budgetlock_core::errors::IntakeError;
use budgetlock_core::models::SourceFile;
use budgetlock_core::traits::{IRawFile, ITokenizer};
use budgetlock_observability::degradation::TrackedDegradation;
use budgetlock_observability::tracing_setup::events;
use budgetlock_observability::{
    count_span, intake_span, FallbackAlert, IntakeMetrics, IntakeObserver,
};
use budgetlock_tokens::TokenCounter;

use crate::classify::classify;
use crate::counting::count_file;

/// Processes batches of raw files into [`SourceFile`] records.
///
/// Files in a batch are polled concurrently on the calling task; nothing is
/// spawned. Output order always matches input order.
pub struct IntakePipeline {
    tokenizer: Arc<dyn ITokenizer>,
    config: IntakeConfig,
    observer: Mutex<IntakeObserver>,
}

impl IntakePipeline {
    pub fn new(tokenizer: Arc<dyn ITokenizer>, config: IntakeConfig) -> Self {
        Self::with_observability(tokenizer, config, &ObservabilityConfig::default())
    }

    pub fn with_observability(
        tokenizer: Arc<dyn ITokenizer>,
        config: IntakeConfig,
        observability: &ObservabilityConfig,
    ) -> Self {
        Self {
            tokenizer,
            config,
            observer: Mutex::new(IntakeObserver::new(observability)),
        }
    }

    /// Build a pipeline over the shared `cl100k_base` counter.
    pub fn from_config(config: &BudgetLockConfig) -> Self {
        Self::with_observability(
            Arc::new(TokenCounter::from_config(&config.tokens)),
            config.intake.clone(),
            &config.observability,
        )
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Process a batch, all or nothing.
    ///
    /// Every handle is validated before any read starts. The first file that
    /// fails rejects the whole batch and drops the work still in flight.
    /// Per-file metrics are recorded only for batches that complete.
    pub async fn process_batch<F: IRawFile>(
        &self,
        files: &[F],
    ) -> Result<Vec<SourceFile>, IntakeError> {
        async move {
            events::batch_started(files.len());
            let started = Instant::now();

            let result = match validate_batch(files) {
                Ok(()) => {
                    try_join_all(
                        files
                            .iter()
                            .enumerate()
                            .map(|(index, file)| self.process_file(index, file)),
                    )
                    .await
                }
                Err(e) => Err(e),
            };

            match result {
                Ok(processed) => {
                    let records: Vec<SourceFile> =
                        processed.iter().map(|p| p.record.clone()).collect();
                    self.observe(|o| {
                        for p in &processed {
                            p.observe(o);
                        }
                        o.on_batch_completed(&records, started.elapsed());
                    });
                    Ok(records)
                }
                Err(e) => {
                    self.observe(|o| {
                        o.on_file_error(&e);
                        o.on_batch_rejected(&e);
                    });
                    Err(e)
                }
            }
        }
        .instrument(intake_span!(files.len()))
        .await
    }

    /// Process a batch with per-file failure isolation.
    ///
    /// The output has one entry per input, in input order.
    pub async fn process_batch_settled<F: IRawFile>(
        &self,
        files: &[F],
    ) -> Vec<Result<SourceFile, IntakeError>> {
        async move {
            events::batch_started(files.len());
            let started = Instant::now();

            let results = join_all(files.iter().enumerate().map(|(index, file)| async move {
                validate_file(index, file)?;
                self.process_file(index, file).await
            }))
            .await;

            let completed: Vec<SourceFile> = results
                .iter()
                .filter_map(|r| r.as_ref().ok())
                .map(|p| p.record.clone())
                .collect();
            self.observe(|o| {
                for result in &results {
                    match result {
                        Ok(p) => p.observe(o),
                        Err(e) => o.on_file_error(e),
                    }
                }
                o.on_batch_completed(&completed, started.elapsed());
            });
            results.into_iter().map(|r| r.map(|p| p.record)).collect()
        }
        .instrument(intake_span!(files.len()))
        .await
    }

    async fn process_file<F: IRawFile + ?Sized>(
        &self,
        index: usize,
        file: &F,
    ) -> Result<Processed, IntakeError> {
        async move {
            let started = Instant::now();
            let (counted, ()) = tokio::join!(
                count_file(file, index, self.tokenizer.as_ref()),
                self.latency_floor()
            );
            let counted = counted?;
            let source_type = classify(file.name());
            Ok(Processed {
                record: SourceFile::new(
                    file.name(),
                    counted.size_bytes,
                    source_type,
                    counted.count,
                ),
                latency: started.elapsed(),
                fallback: counted.fallback.map(|failure| failure.to_string()),
            })
        }
        .instrument(count_span!(file.name(), index))
        .await
    }

    async fn latency_floor(&self) {
        let floor = self.config.min_latency();
        if !floor.is_zero() {
            tokio::time::sleep(floor).await;
        }
    }

    // The guard never outlives the closure, so it is never held across an await.
    fn observe<R>(&self, f: impl FnOnce(&mut IntakeObserver) -> R) -> R {
        let mut observer = self.observer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut observer)
    }

    pub fn metrics(&self) -> IntakeMetrics {
        self.observe(|o| o.metrics.clone())
    }

    /// Share of counted files that fell back to the size estimate.
    pub fn fallback_rate(&self) -> f64 {
        self.observe(|o| o.metrics.fallback_rate())
    }

    pub fn metrics_snapshot(&self) -> serde_json::Value {
        self.observe(|o| o.metrics_snapshot())
    }

    /// Current fallback-rate alert, if any. Does not log.
    pub fn fallback_alert(&self) -> Option<FallbackAlert> {
        self.observe(|o| o.fallback_alert())
    }

    /// Take the recorded tokenizer degradations.
    pub fn drain_degradations(&self) -> Vec<TrackedDegradation> {
        self.observe(|o| o.degradation.drain())
    }
}

fn validate_batch<F: IRawFile>(files: &[F]) -> Result<(), IntakeError> {
    files
        .iter()
        .enumerate()
        .try_for_each(|(index, file)| validate_file(index, file))
}

fn validate_file<F: IRawFile + ?Sized>(index: usize, file: &F) -> Result<(), IntakeError> {
    if file.name().contains('\0') {
        return Err(IntakeError::InvalidInput {
            index,
            reason: "filename contains a NUL byte".to_string(),
        });
    }
    Ok(())
}

/// A counted file whose observations wait for the batch outcome.
struct Processed {
    record: SourceFile,
    latency: Duration,
    fallback: Option<String>,
}

impl Processed {
    fn observe(&self, observer: &mut IntakeObserver) {
        observer.on_file_processed(&self.record, self.latency, self.fallback.as_deref());
    }
}
