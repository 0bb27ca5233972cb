use serde::{Deserialize, Serialize};

use super::defaults;

/// Token counter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Maximum number of cached counts, keyed by content hash.
    pub cache_capacity: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}
