use serde::{Deserialize, Serialize};

/// Coarse content classification, derived from the filename alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceType {
    Docs,
    Code,
    Logs,
    Text,
}

impl SourceType {
    pub const ALL: [SourceType; 4] = [Self::Docs, Self::Code, Self::Logs, Self::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Docs => "DOCS",
            Self::Code => "CODE",
            Self::Logs => "LOGS",
            Self::Text => "TEXT",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
