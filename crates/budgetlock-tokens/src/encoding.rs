//! Shared `cl100k_base` encoder.
//!
//! Building the BPE tables is expensive, so it happens once per process on
//! first use. The encoder is immutable afterwards and never torn down.

use std::sync::{Arc, LazyLock};

use budgetlock_core::constants::{CL100K_SPECIAL_TOKENS, ENCODING_NAME};
use budgetlock_core::errors::TokenizeError;
use tiktoken_rs::CoreBPE;

static CL100K: LazyLock<Result<Arc<CoreBPE>, String>> =
    LazyLock::new(|| tiktoken_rs::cl100k_base().map(Arc::new).map_err(|e| e.to_string()));

/// Handle to the shared encoder.
///
/// A failed build is remembered, so every caller sees the same
/// `EncoderUnavailable` error.
pub fn cl100k() -> Result<Arc<CoreBPE>, TokenizeError> {
    CL100K
        .as_ref()
        .map(Arc::clone)
        .map_err(|reason| TokenizeError::EncoderUnavailable {
            encoding: ENCODING_NAME.to_string(),
            reason: reason.clone(),
        })
}

/// First special-token literal found in `text`, if any.
pub fn find_special_token(text: &str) -> Option<&'static str> {
    if !text.contains("<|") {
        return None;
    }
    CL100K_SPECIAL_TOKENS
        .into_iter()
        .find(|token| text.contains(token))
}
