//! Error handling for BudgetLock.
//! One error enum per concern, aggregated into `BudgetLockError` via `From`.

pub mod config_error;
pub mod intake_error;
pub mod tokenize_error;

pub use config_error::ConfigError;
pub use intake_error::IntakeError;
pub use tokenize_error::TokenizeError;

/// Top-level error for BudgetLock operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetLockError {
    #[error("intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type BudgetLockResult<T> = Result<T, BudgetLockError>;
