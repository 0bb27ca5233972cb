/// Decode and tokenize failures. The intake pipeline absorbs these into
/// the size-based estimate; they never reach the batch caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("content is not valid UTF-8: {reason}")]
    Decode { reason: String },

    #[error("content contains disallowed special token {token}")]
    DisallowedSpecialToken { token: String },

    #[error("encoder {encoding} unavailable: {reason}")]
    EncoderUnavailable { encoding: String, reason: String },
}
