use budgetlock_core::errors::TokenizeError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode bytes as strict UTF-8, dropping a leading byte-order mark.
pub fn decode_text(bytes: &[u8]) -> Result<&str, TokenizeError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(body).map_err(|e| TokenizeError::Decode {
        reason: e.to_string(),
    })
}
