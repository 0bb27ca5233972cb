use budgetlock_core::errors::TokenizeError;
use budgetlock_core::traits::ITokenizer;
use budgetlock_tokens::{decode_text, TokenCounter};

#[test]
fn counts_known_text_exactly() {
    let counter = TokenCounter::default();
    assert_eq!(counter.count("hello world").unwrap(), 2);
    assert_eq!(counter.count("").unwrap(), 0);
}

#[test]
fn special_token_literal_is_refused() {
    let counter = TokenCounter::default();
    let err = counter
        .count("log line\n<|endoftext|>\nmore")
        .unwrap_err();
    assert_eq!(
        err,
        TokenizeError::DisallowedSpecialToken {
            token: "<|endoftext|>".to_string()
        }
    );
}

#[test]
fn failures_are_not_cached() {
    let counter = TokenCounter::default();
    assert!(counter.count_cached("<|endofprompt|>").is_err());
    assert!(counter.count_cached("<|endofprompt|>").is_err());
}

#[test]
fn trait_count_goes_through_the_cache() {
    let counter = TokenCounter::new(16);
    let tokenizer: &dyn ITokenizer = &counter;
    let text = "fn main() { println!(\"hi\"); }";
    assert_eq!(tokenizer.count(text).unwrap(), counter.count(text).unwrap());
    assert_eq!(tokenizer.encoding_name(), "cl100k_base");
}

#[test]
fn bom_does_not_change_the_count() {
    let counter = TokenCounter::default();
    let plain = b"# README\n\nInstall with cargo.".to_vec();
    let mut with_bom = vec![0xEF, 0xBB, 0xBF];
    with_bom.extend_from_slice(&plain);

    let a = counter.count(decode_text(&plain).unwrap()).unwrap();
    let b = counter.count(decode_text(&with_bom).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn long_line_oriented_text_counts_quickly() {
    let counter = TokenCounter::default();
    let line = "2024-03-01T12:00:00Z ERROR auth: token refresh failed for user 42\n";
    let text = line.repeat(2_000);
    let single = counter.count(line).unwrap();
    let total = counter.count(&text).unwrap();
    assert!(total > 0);
    assert!(total <= single * 2_000 + 1);
}
