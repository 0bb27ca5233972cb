use std::sync::Arc;

use budgetlock_core::config::IntakeConfig;
use budgetlock_core::models::SourceType;
use budgetlock_intake::{demo_dataset, IntakePipeline, Manifest};
use budgetlock_tokens::TokenCounter;

fn cl100k_pipeline() -> IntakePipeline {
    IntakePipeline::new(
        Arc::new(TokenCounter::default()),
        IntakeConfig {
            min_latency_ms: 0,
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn demo_dataset_classifies_as_logs_code_docs() {
    let records = cl100k_pipeline()
        .process_batch(&demo_dataset())
        .await
        .unwrap();

    let types: Vec<SourceType> = records.iter().map(|r| r.source_type).collect();
    assert_eq!(types, vec![SourceType::Logs, SourceType::Code, SourceType::Docs]);
    let sizes: Vec<&str> = records.iter().map(|r| r.size.as_str()).collect();
    assert_eq!(sizes, vec!["450.0KB", "12.0KB", "5.0KB"]);
    assert!(records.iter().all(|r| !r.is_estimated() && r.token_count > 0));
}

#[tokio::test]
async fn demo_dataset_overflows_default_capacity() {
    let records = cl100k_pipeline()
        .process_batch(&demo_dataset())
        .await
        .unwrap();
    let mut manifest = Manifest::from_config(&IntakeConfig::default());
    manifest.extend(records);

    let status = manifest.status();
    assert_eq!(status.capacity, 8192);
    assert!(status.over_limit);
    assert_eq!(status.remaining, 0);
    assert_eq!(status.utilization, 1.0);
}

#[tokio::test]
async fn total_is_sum_and_drops_by_removed_count() {
    let records = cl100k_pipeline()
        .process_batch(&demo_dataset())
        .await
        .unwrap();
    let mut manifest = Manifest::new(8192);
    manifest.extend(records.clone());

    let sum: usize = records.iter().map(|r| r.token_count).sum();
    assert_eq!(manifest.total_tokens(), sum);

    let readme = &records[2];
    let before = manifest.total_tokens();
    let removed = manifest.remove(&readme.id).unwrap();
    assert_eq!(removed.name, "README.md");
    assert_eq!(manifest.total_tokens(), before - readme.token_count);
    assert!(manifest.get(&readme.id).is_none());
    assert_eq!(manifest.len(), 2);
}

#[tokio::test]
async fn extend_keeps_upload_order_across_batches() {
    let pipeline = cl100k_pipeline();
    let mut manifest = Manifest::new(8192);
    let dataset = demo_dataset();

    manifest.extend(pipeline.process_batch(&dataset[2..]).await.unwrap());
    manifest.extend(pipeline.process_batch(&dataset[..2]).await.unwrap());

    let names: Vec<&str> = manifest.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["README.md", "server_error.log", "AuthController.ts"]);
}

#[test]
fn empty_manifest_status() {
    let manifest = Manifest::new(4096);
    let status = manifest.status();
    assert_eq!(status.total_tokens, 0);
    assert_eq!(status.remaining, 4096);
    assert!(!status.over_limit);
    assert_eq!(status.utilization, 0.0);
}
