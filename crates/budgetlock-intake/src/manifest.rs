//! The caller-owned collection of processed files and its running total.

use budgetlock_core::config::IntakeConfig;
use budgetlock_core::models::{BudgetStatus, SourceFile, SourceId};
use serde::{Deserialize, Serialize};

/// Processed files in upload order, measured against a token capacity.
///
/// Totals are recomputed from the held records on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    files: Vec<SourceFile>,
    capacity: usize,
}

impl Manifest {
    pub fn new(capacity: usize) -> Self {
        Self {
            files: Vec::new(),
            capacity,
        }
    }

    pub fn from_config(config: &IntakeConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Append a finished batch, keeping its order.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = SourceFile>) {
        self.files.extend(batch);
    }

    /// Remove the record with `id`, if held.
    pub fn remove(&mut self, id: &SourceId) -> Option<SourceFile> {
        let pos = self.files.iter().position(|f| &f.id == id)?;
        Some(self.files.remove(pos))
    }

    pub fn reset(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn get(&self, id: &SourceId) -> Option<&SourceFile> {
        self.files.iter().find(|f| &f.id == id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn total_tokens(&self) -> usize {
        self.files.iter().map(|f| f.token_count).sum()
    }

    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::compute(self.total_tokens(), self.capacity)
    }
}
