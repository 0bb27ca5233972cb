//! # budgetlock-intake
//!
//! Turns a batch of raw uploads into [`SourceFile`](budgetlock_core::SourceFile)
//! records: classify by filename, count tokens (exact, or a size estimate
//! when the content cannot be tokenized), and keep a running total against
//! the configured capacity.

pub mod classify;
pub mod counting;
pub mod demo;
pub mod manifest;
pub mod pipeline;
pub mod sources;

pub use classify::classify;
pub use counting::{count_file, count_tokens, CountedFile};
pub use demo::demo_dataset;
pub use manifest::Manifest;
pub use pipeline::IntakePipeline;
pub use sources::{DiskFile, MemoryFile};
