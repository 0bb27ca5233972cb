use budgetlock_core::errors::{IntakeError, TokenizeError};
use budgetlock_core::models::TokenCount;
use budgetlock_core::traits::{IRawFile, ITokenizer};
use budgetlock_observability::tracing_setup::events;
use budgetlock_tokens::{decode_text, estimate_from_size};

/// Result of counting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedFile {
    /// Bytes actually read. May differ from the handle's declared size when
    /// the file changed between stat and read.
    pub size_bytes: u64,
    pub count: TokenCount,
    /// Why the exact count failed, when the size estimate was used.
    pub fallback: Option<TokenizeError>,
}

/// Count the tokens of one file.
///
/// Reads the bytes, decodes them as UTF-8, and counts with `tokenizer`.
/// When decoding or counting fails the result is the size estimate
/// `ceil(size_bytes / 4)`, marked estimated. A read failure is returned
/// as an error. `index` is the file's position in its batch.
pub async fn count_tokens<F>(
    file: &F,
    index: usize,
    tokenizer: &dyn ITokenizer,
) -> Result<TokenCount, IntakeError>
where
    F: IRawFile + ?Sized,
{
    let counted = count_file(file, index, tokenizer).await?;
    if let Some(failure) = &counted.fallback {
        events::fallback_used(file.name(), &failure.to_string(), counted.count.tokens);
    }
    Ok(counted.count)
}

/// [`count_tokens`] without logging, keeping the byte length read and the
/// fallback cause for the caller.
pub async fn count_file<F>(
    file: &F,
    index: usize,
    tokenizer: &dyn ITokenizer,
) -> Result<CountedFile, IntakeError>
where
    F: IRawFile + ?Sized,
{
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| IntakeError::ReadFailed {
            name: file.name().to_string(),
            index,
            reason: e.to_string(),
        })?;
    let size_bytes = bytes.len() as u64;

    let counted = match decode_text(&bytes).and_then(|text| tokenizer.count(text)) {
        Ok(tokens) => CountedFile {
            size_bytes,
            count: TokenCount::exact(tokens),
            fallback: None,
        },
        Err(failure) => CountedFile {
            size_bytes,
            count: TokenCount::estimated(estimate_from_size(size_bytes)),
            fallback: Some(failure),
        },
    };
    Ok(counted)
}
