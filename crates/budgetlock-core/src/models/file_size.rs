//! Display form of a byte length, in kilobytes with one decimal place.
//!
//! # Examples
//!
//! ```
//! use budgetlock_core::models::FileSize;
//!
//! assert_eq!(FileSize::new(1024 * 450).to_string(), "450.0KB");
//! assert_eq!(FileSize::new(256).to_string(), "0.3KB");
//! ```

use serde::{Deserialize, Serialize};

/// A byte length rendered as `<kb>.<tenth>KB`.
///
/// Rounds half-up on the tenth, so 256 bytes (0.25 KB) renders as `0.3KB`.
/// Integer arithmetic keeps the output independent of float formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileSize(pub u64);

impl FileSize {
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }

    /// Size in tenths of a kilobyte, rounded half-up.
    pub fn tenths_of_kb(&self) -> u128 {
        (u128::from(self.0) * 10 + 512) / 1024
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for FileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tenths = self.tenths_of_kb();
        write!(f, "{}.{}KB", tenths / 10, tenths % 10)
    }
}
