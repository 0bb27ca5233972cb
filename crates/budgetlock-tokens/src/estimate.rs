use budgetlock_core::constants::FALLBACK_BYTES_PER_TOKEN;

/// Size-based token estimate: `ceil(size_bytes / 4)`.
pub fn estimate_from_size(size_bytes: u64) -> usize {
    usize::try_from(size_bytes.div_ceil(FALLBACK_BYTES_PER_TOKEN)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up() {
        assert_eq!(estimate_from_size(0), 0);
        assert_eq!(estimate_from_size(1), 1);
        assert_eq!(estimate_from_size(4), 1);
        assert_eq!(estimate_from_size(5), 2);
        assert_eq!(estimate_from_size(1024 * 450), 115_200);
    }
}
