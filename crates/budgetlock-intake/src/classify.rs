use budgetlock_core::constants::{CODE_SUFFIXES, DOCS_SUFFIX, LOGS_MARKER};
use budgetlock_core::models::SourceType;

/// Classify a file by name. First matching rule wins:
/// `.md` → DOCS, code suffix → CODE, contains `log` → LOGS, else TEXT.
/// Matching is case-sensitive.
pub fn classify(name: &str) -> SourceType {
    if name.ends_with(DOCS_SUFFIX) {
        SourceType::Docs
    } else if CODE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        SourceType::Code
    } else if name.contains(LOGS_MARKER) {
        SourceType::Logs
    } else {
        SourceType::Text
    }
}
