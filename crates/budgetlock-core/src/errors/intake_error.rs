/// Errors surfaced by file intake.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// Storage could not deliver the file's bytes at all.
    #[error("failed to read {name} (batch index {index}): {reason}")]
    ReadFailed {
        name: String,
        index: usize,
        reason: String,
    },

    /// The file handle is malformed: its name can never be a filename.
    #[error("invalid input at batch index {index}: {reason}")]
    InvalidInput { index: usize, reason: String },
}

impl IntakeError {
    /// Batch index of the file that caused the error.
    pub fn index(&self) -> usize {
        match self {
            Self::ReadFailed { index, .. } | Self::InvalidInput { index, .. } => *index,
        }
    }
}
