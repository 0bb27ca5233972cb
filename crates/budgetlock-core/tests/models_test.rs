use budgetlock_core::models::*;
use proptest::prelude::*;

// --- FileSize ---

#[test]
fn file_size_formats_whole_kilobytes() {
    assert_eq!(FileSize::new(1024).to_string(), "1.0KB");
    assert_eq!(FileSize::new(1024 * 12).to_string(), "12.0KB");
    assert_eq!(FileSize::new(1024 * 450).to_string(), "450.0KB");
}

#[test]
fn file_size_rounds_half_up() {
    // 256 bytes = 0.25 KB exactly.
    assert_eq!(FileSize::new(256).to_string(), "0.3KB");
    // 1536 + 51 bytes = 1.5498 KB
    assert_eq!(FileSize::new(1587).to_string(), "1.5KB");
    assert_eq!(FileSize::new(0).to_string(), "0.0KB");
    assert_eq!(FileSize::new(1).to_string(), "0.0KB");
}

proptest! {
    #[test]
    fn file_size_matches_half_up_float_rounding(bytes in 0u64..100_000_000) {
        let kb = bytes as f64 / 1024.0;
        let tenths = (kb * 10.0).round() as u128;
        prop_assert_eq!(FileSize::new(bytes).tenths_of_kb(), tenths);
    }
}

// --- SourceFile ---

#[test]
fn source_file_new_formats_size_and_generates_id() {
    let a = SourceFile::new("README.md", 5 * 1024, SourceType::Docs, TokenCount::exact(900));
    let b = SourceFile::new("README.md", 5 * 1024, SourceType::Docs, TokenCount::exact(900));

    assert_eq!(a.size, "5.0KB");
    assert_eq!(a.token_count, 900);
    assert!(!a.is_estimated());
    assert_ne!(a.id, b.id);
    assert!(uuid::Uuid::parse_str(a.id.as_str()).is_ok());
}

#[test]
fn source_file_serializes_type_uppercase() {
    let f = SourceFile::new("app.log", 10, SourceType::Logs, TokenCount::estimated(3));
    let json = serde_json::to_value(&f).unwrap();
    assert_eq!(json["source_type"], "LOGS");
    assert_eq!(json["count_method"], "estimated");
    assert_eq!(json["size"], "0.0KB");
}

// --- Budget ---

#[test]
fn budget_presets_have_expected_capacities() {
    assert_eq!(BudgetPreset::Strict.tokens(), 2_048);
    assert_eq!(BudgetPreset::Standard.tokens(), 4_096);
    assert_eq!(BudgetPreset::Extended.tokens(), 8_192);
    assert_eq!(BudgetPreset::default(), BudgetPreset::Standard);
    assert_eq!(BudgetPreset::from_tokens(8_192), Some(BudgetPreset::Extended));
    assert_eq!(BudgetPreset::from_tokens(1_000), None);
    assert_eq!(BudgetPreset::Standard.label(), "4k");
}

#[test]
fn task_modes_have_labels() {
    for mode in TaskMode::ALL {
        assert!(!mode.label().is_empty());
        assert!(!mode.description().is_empty());
    }
    assert_eq!(TaskMode::default(), TaskMode::Debug);
}

#[test]
fn budget_status_under_capacity() {
    let status = BudgetStatus::compute(2_048, 8_192);
    assert_eq!(status.remaining, 6_144);
    assert!(!status.over_limit);
    assert!((status.utilization - 0.25).abs() < f64::EPSILON);
}

#[test]
fn budget_status_at_capacity_is_not_over() {
    let status = BudgetStatus::compute(8_192, 8_192);
    assert!(!status.over_limit);
    assert_eq!(status.remaining, 0);
    assert_eq!(status.utilization, 1.0);
}

#[test]
fn budget_status_over_capacity_clamps_utilization() {
    let status = BudgetStatus::compute(10_000, 8_192);
    assert!(status.over_limit);
    assert_eq!(status.remaining, 0);
    assert_eq!(status.utilization, 1.0);
}

#[test]
fn budget_status_zero_capacity() {
    assert_eq!(BudgetStatus::compute(0, 0).utilization, 0.0);
    assert_eq!(BudgetStatus::compute(1, 0).utilization, 1.0);
    assert!(BudgetStatus::compute(1, 0).over_limit);
}
