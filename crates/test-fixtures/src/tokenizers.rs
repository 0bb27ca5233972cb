//! `ITokenizer` doubles with predictable counts.

use budgetlock_core::errors::TokenizeError;
use budgetlock_core::traits::ITokenizer;

/// One token per whitespace-separated word.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl ITokenizer for WhitespaceTokenizer {
    fn count(&self, text: &str) -> Result<usize, TokenizeError> {
        Ok(text.split_whitespace().count())
    }

    fn encoding_name(&self) -> &str {
        "whitespace"
    }
}

/// An encoder that could not be built. Every count fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrokenTokenizer;

impl ITokenizer for BrokenTokenizer {
    fn count(&self, _text: &str) -> Result<usize, TokenizeError> {
        Err(TokenizeError::EncoderUnavailable {
            encoding: self.encoding_name().to_string(),
            reason: "merge table missing".to_string(),
        })
    }

    fn encoding_name(&self) -> &str {
        "broken"
    }
}
