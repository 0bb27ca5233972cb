//! Budget presets and task modes offered on the compile screen.

use serde::{Deserialize, Serialize};

/// Token budget presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPreset {
    Strict,
    #[default]
    Standard,
    Extended,
}

impl BudgetPreset {
    pub const ALL: [BudgetPreset; 3] = [Self::Strict, Self::Standard, Self::Extended];

    /// Token capacity of this preset.
    pub fn tokens(&self) -> usize {
        match self {
            Self::Strict => 2_048,
            Self::Standard => 4_096,
            Self::Extended => 8_192,
        }
    }

    /// Short label, e.g. `4k`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strict => "2k",
            Self::Standard => "4k",
            Self::Extended => "8k",
        }
    }

    /// Tier name shown under the label.
    pub fn tier(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Standard => "Standard",
            Self::Extended => "Extended",
        }
    }

    /// The preset with exactly this capacity, if any.
    pub fn from_tokens(tokens: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.tokens() == tokens)
    }
}

/// What the compiled prompt is for. Display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskMode {
    #[default]
    Debug,
    Review,
    Build,
    Docs,
}

impl TaskMode {
    pub const ALL: [TaskMode; 4] = [Self::Debug, Self::Review, Self::Build, Self::Docs];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Review => "Code Review",
            Self::Build => "Build / Config",
            Self::Docs => "Documentation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Debug => "Prioritizes stack traces, logs, and recent changes.",
            Self::Review => "Prioritizes diffs, structure, and type definitions.",
            Self::Build => "Prioritizes config files, dependencies, and environment.",
            Self::Docs => "Prioritizes READMEs, docstrings, and comments.",
        }
    }
}
