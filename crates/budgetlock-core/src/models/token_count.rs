use serde::{Deserialize, Serialize};

/// How a token count was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountMethod {
    /// Encoded with the BPE tokenizer.
    Exact,
    /// Derived from the byte size after a decode or tokenize failure.
    Estimated,
}

/// A token count together with the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub tokens: usize,
    pub method: CountMethod,
}

impl TokenCount {
    pub fn exact(tokens: usize) -> Self {
        Self {
            tokens,
            method: CountMethod::Exact,
        }
    }

    pub fn estimated(tokens: usize) -> Self {
        Self {
            tokens,
            method: CountMethod::Estimated,
        }
    }

    pub fn is_estimated(&self) -> bool {
        self.method == CountMethod::Estimated
    }
}
