use serde::{Deserialize, Serialize};

use super::file_size::FileSize;
use super::source_type::SourceType;
use super::token_count::{CountMethod, TokenCount};

/// Opaque per-session identifier for a processed file.
///
/// A fresh UUID v4 per record; uniqueness is probabilistic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(pub String);

impl SourceId {
    /// Create a new source ID with a random UUID v4.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One uploaded file after classification and token counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub id: SourceId,
    /// Original filename.
    pub name: String,
    /// Byte length of the original content.
    pub size_bytes: u64,
    /// Display size, e.g. `12.0KB`.
    pub size: String,
    pub source_type: SourceType,
    pub token_count: usize,
    pub count_method: CountMethod,
}

impl SourceFile {
    /// Assemble a record with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        source_type: SourceType,
        count: TokenCount,
    ) -> Self {
        Self {
            id: SourceId::new(),
            name: name.into(),
            size_bytes,
            size: FileSize::new(size_bytes).to_string(),
            source_type,
            token_count: count.tokens,
            count_method: count.method,
        }
    }

    /// Whether the token count came from the size-based estimate.
    pub fn is_estimated(&self) -> bool {
        self.count_method == CountMethod::Estimated
    }
}
