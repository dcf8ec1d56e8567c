//! Unit tests for the Identifiers module
//!
//! Tests cover policy number creation, sequencing, parsing,
//! and serde conversion.

use core_kernel::{CoreError, PolicyNumber};

mod policy_number_tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        let result = PolicyNumber::new(0);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_next_increments_by_one() {
        let number = PolicyNumber::new(1944).unwrap();
        assert_eq!(number.next().unwrap().value(), 1945);
    }

    #[test]
    fn test_next_fails_at_end_of_range() {
        let last = PolicyNumber::new(u64::MAX).unwrap();
        assert!(matches!(last.next(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_display_is_plain_integer() {
        let number = PolicyNumber::new(1944).unwrap();
        assert_eq!(number.to_string(), "1944");
    }

    #[test]
    fn test_from_str_trims_whitespace() {
        let parsed: PolicyNumber = " 1944 ".parse().unwrap();
        assert_eq!(parsed.value(), 1944);
    }

    #[test]
    fn test_from_str_rejects_non_numeric() {
        let result = "POL-1".parse::<PolicyNumber>();
        assert!(matches!(result, Err(CoreError::Parse { kind: "policy number", .. })));
    }

    #[test]
    fn test_ordering_follows_sequence() {
        let first = PolicyNumber::new(10).unwrap();
        assert!(first < first.next().unwrap());
    }

    #[test]
    fn test_serde_as_integer() {
        let number = PolicyNumber::new(7).unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "7");

        let back: PolicyNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, number);
        assert!(serde_json::from_str::<PolicyNumber>("0").is_err());
    }
}
