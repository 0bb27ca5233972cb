//! Test fixtures for BudgetLock intake: golden datasets plus `IRawFile` and
//! `ITokenizer` doubles for failure, latency, and cancellation scenarios.

pub mod files;
pub mod tokenizers;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use files::{binary_file, DelayedFile, FailingFile, MisreportedFile, StalledFile};
pub use tokenizers::{BrokenTokenizer, WhitespaceTokenizer};

/// Root directory of the golden datasets.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}
