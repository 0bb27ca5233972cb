use budgetlock_tokens::{estimate_from_size, TokenCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn count_is_reproducible(s in "[^<]*") {
        let counter = TokenCounter::default();
        let first = counter.count(&s).unwrap();
        let second = counter.count(&s).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cached_equals_uncached(s in "[^<]{0,200}") {
        let counter = TokenCounter::default();
        let uncached = counter.count(&s).unwrap();
        let cached = counter.count_cached(&s).unwrap();
        let cached_again = counter.count_cached(&s).unwrap();
        prop_assert_eq!(uncached, cached);
        prop_assert_eq!(cached, cached_again);
    }

    #[test]
    fn subadditivity(a in "[ -;=-~\n]{0,100}", b in "[ -;=-~\n]{0,100}") {
        let counter = TokenCounter::default();
        let combined = format!("{}{}", a, b);
        let count_a = counter.count(&a).unwrap();
        let count_b = counter.count(&b).unwrap();
        let count_combined = counter.count(&combined).unwrap();
        prop_assert!(
            count_combined <= count_a + count_b + 1,
            "subadditivity: {} <= {} + {} + 1",
            count_combined, count_a, count_b
        );
    }

    #[test]
    fn count_is_bounded_by_byte_length(s in "[^<]{1,100}") {
        let counter = TokenCounter::default();
        let count = counter.count(&s).unwrap();
        prop_assert!(count >= 1);
        prop_assert!(count <= s.len());
    }

    #[test]
    fn estimate_is_ceiling_of_quarter(size in 0u64..u64::from(u32::MAX)) {
        let estimate = estimate_from_size(size) as u64;
        prop_assert!(estimate * 4 >= size);
        prop_assert!(estimate * 4 < size + 4);
    }
}
