//! # budgetlock-tokens
//!
//! Accurate token counting via `tiktoken-rs` (`cl100k_base`).
//! The encoder is a lazily built process-wide singleton; counts are cached
//! per content hash. Also provides strict UTF-8 decoding and the byte-size
//! estimate used when content cannot be tokenized.

pub mod counter;
pub mod decode;
pub mod encoding;
pub mod estimate;

pub use counter::TokenCounter;
pub use decode::decode_text;
pub use encoding::{cl100k, find_special_token};
pub use estimate::estimate_from_size;
