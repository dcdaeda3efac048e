//! Property-based tests for assertion matching.
//!
//! These tests use proptest to verify the counting semantics of each kind of
//! count specifier, and that a broken message filter always wins.

use crate::assertion::check_case;
use crate::model::{Assertion, Violations};
use gktest_types::ErrorKind;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for violation messages: short lowercase words.
fn arb_message() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}( [a-z]{1,8}){0,3}").unwrap()
}

fn arb_violations() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_message(), 0..8)
}

/// Strategy for patterns that never compile: an unclosed group or class suffix.
fn arb_broken_pattern() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-z ]{0,10}").unwrap(),
        prop_oneof![Just("[("), Just("("), Just("[a-")],
    )
        .prop_map(|(prefix, suffix)| format!("{prefix}{suffix}"))
}

fn kind_of(violations: &[String], assertions: &[Assertion]) -> Option<ErrorKind> {
    check_case(violations, assertions).err().map(|e| e.kind())
}

proptest! {
    #[test]
    fn no_assertions_pass_iff_no_violations(violations in arb_violations()) {
        let result = kind_of(&violations, &[]);
        if violations.is_empty() {
            prop_assert_eq!(result, None);
        } else {
            prop_assert_eq!(result, Some(ErrorKind::NumViolations));
        }
    }

    #[test]
    fn absent_count_passes_iff_any_violation(violations in arb_violations()) {
        let result = kind_of(&violations, &[Assertion::default()]);
        prop_assert_eq!(result.is_none(), !violations.is_empty());
    }

    #[test]
    fn no_literal_passes_iff_no_violation(violations in arb_violations()) {
        let assertion = Assertion {
            violations: Some(Violations::Str("no".to_string())),
            message: None,
        };
        prop_assert_eq!(kind_of(&violations, &[assertion]).is_none(), violations.is_empty());
    }

    #[test]
    fn integer_count_passes_iff_exact(violations in arb_violations(), n in 0i64..10) {
        let assertion = Assertion {
            violations: Some(Violations::Int(n)),
            message: None,
        };
        let passed = kind_of(&violations, &[assertion]).is_none();
        prop_assert_eq!(passed, violations.len() as i64 == n);
    }

    #[test]
    fn filtered_count_only_counts_matches(
        violations in arb_violations(),
        word in prop::string::string_regex("[a-z]{1,3}").unwrap(),
    ) {
        let expected = violations.iter().filter(|v| v.contains(word.as_str())).count();
        let assertion = Assertion {
            violations: Some(Violations::Int(expected as i64)),
            message: Some(word),
        };
        prop_assert_eq!(kind_of(&violations, &[assertion]), None);
    }

    #[test]
    fn broken_filter_is_always_invalid_regex(
        violations in arb_violations(),
        pattern in arb_broken_pattern(),
    ) {
        let assertion = Assertion {
            violations: None,
            message: Some(pattern),
        };
        prop_assert_eq!(kind_of(&violations, &[assertion]), Some(ErrorKind::InvalidRegex));
    }
}
