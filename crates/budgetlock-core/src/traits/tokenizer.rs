use crate::errors::TokenizeError;

/// Exact token counting over decoded text.
pub trait ITokenizer: Send + Sync {
    /// Count tokens in `text`.
    fn count(&self, text: &str) -> Result<usize, TokenizeError>;

    /// Name of the encoding, e.g. `cl100k_base`.
    fn encoding_name(&self) -> &str;
}
