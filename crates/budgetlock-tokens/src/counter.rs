use moka::sync::Cache;

use budgetlock_core::config::TokenConfig;
use budgetlock_core::constants::ENCODING_NAME;
use budgetlock_core::errors::TokenizeError;
use budgetlock_core::traits::ITokenizer;

use crate::encoding::{cl100k, find_special_token};

/// Accurate token counter over the shared `cl100k_base` encoder.
/// Caches results per blake3 content hash.
pub struct TokenCounter {
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Create a new TokenCounter with the given cache capacity.
    pub fn new(cache_capacity: u64) -> Self {
        Self {
            cache: Cache::new(cache_capacity),
        }
    }

    pub fn from_config(config: &TokenConfig) -> Self {
        Self::new(config.cache_capacity)
    }

    /// Count tokens in the given text (uncached).
    ///
    /// Text containing a special-token literal is refused, matching the
    /// encoder's default of disallowing all special tokens.
    pub fn count(&self, text: &str) -> Result<usize, TokenizeError> {
        if let Some(token) = find_special_token(text) {
            return Err(TokenizeError::DisallowedSpecialToken {
                token: token.to_string(),
            });
        }
        let bpe = cl100k()?;
        Ok(bpe.encode_ordinary(text).len())
    }

    /// Count tokens with blake3 content-hash caching.
    /// Repeated calls with the same text return the cached result.
    /// Failures are not cached.
    pub fn count_cached(&self, text: &str) -> Result<usize, TokenizeError> {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        if let Some(count) = self.cache.get(&hash) {
            return Ok(count);
        }
        let count = self.count(text)?;
        self.cache.insert(hash, count);
        Ok(count)
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::from_config(&TokenConfig::default())
    }
}

impl ITokenizer for TokenCounter {
    fn count(&self, text: &str) -> Result<usize, TokenizeError> {
        self.count_cached(text)
    }

    fn encoding_name(&self) -> &str {
        ENCODING_NAME
    }
}
