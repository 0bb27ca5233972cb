use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{BudgetPreset, TaskMode};

/// Compile-stage settings chosen by the user. Consumed for display only;
/// none of these affect token counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    pub budget: BudgetPreset,
    pub mode: TaskMode,
    pub strict: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            budget: defaults::DEFAULT_BUDGET,
            mode: defaults::DEFAULT_MODE,
            strict: defaults::DEFAULT_STRICT,
        }
    }
}
