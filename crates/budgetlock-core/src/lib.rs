//! # budgetlock-core
//!
//! Foundation crate for BudgetLock file intake.
//! Defines the records, traits, errors, config, and constants shared by the
//! tokenizer, intake pipeline, and observability crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BudgetLockConfig;
pub use errors::{BudgetLockError, BudgetLockResult, IntakeError, TokenizeError};
pub use models::{
    BudgetPreset, BudgetStatus, CountMethod, FileSize, SourceFile, SourceId, SourceType,
    TaskMode, TokenCount,
};
pub use traits::{IRawFile, ITokenizer};
