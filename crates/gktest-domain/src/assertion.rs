//! Assertion matching: does the set of violations observed for a case satisfy
//! the case's declared assertions?
//!
//! Each assertion is checked on its own against the full violation list,
//! narrowed only by its own message filter. Violations are not consumed, so two
//! assertions whose filters overlap may both count the same violation. The
//! first failing assertion fails the case.

use crate::model::{Assertion, Violations};
use gktest_types::VerifyError;
use regex::Regex;

const YES: &str = "yes";
const NO: &str = "no";

/// What an assertion requires of its candidate violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    AtLeastOne,
    Exactly(usize),
}

impl Expectation {
    /// Interpret a count specifier. Absent means "at least one".
    pub fn from_violations(violations: Option<&Violations>) -> Result<Self, VerifyError> {
        match violations {
            None => Ok(Expectation::AtLeastOne),
            Some(Violations::Str(s)) if s == YES => Ok(Expectation::AtLeastOne),
            Some(Violations::Str(s)) if s == NO => Ok(Expectation::Exactly(0)),
            Some(Violations::Str(s)) => Err(VerifyError::InvalidYaml(format!(
                "assertion violations must be {YES:?}, {NO:?}, or a non-negative integer, got {s:?}"
            ))),
            Some(Violations::Int(n)) => usize::try_from(*n)
                .map(Expectation::Exactly)
                .map_err(|_| {
                    VerifyError::InvalidYaml(format!(
                        "assertion violations must not be negative, got {n}"
                    ))
                }),
            Some(Violations::Unrecognized(v)) => Err(VerifyError::InvalidYaml(format!(
                "assertion violations has unrecognized type: {v}"
            ))),
        }
    }

    pub fn is_met(self, count: usize) -> bool {
        match self {
            Expectation::AtLeastOne => count >= 1,
            Expectation::Exactly(n) => count == n,
        }
    }
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::AtLeastOne => f.write_str("at least 1"),
            Expectation::Exactly(n) => write!(f, "exactly {n}"),
        }
    }
}

/// Check every assertion of a case against the violations its object produced.
///
/// A case without assertions expects no violations at all.
pub fn check_case(violations: &[String], assertions: &[Assertion]) -> Result<(), VerifyError> {
    if assertions.is_empty() {
        return check_assertion(violations, &Assertion::implicit_allow());
    }

    for assertion in assertions {
        check_assertion(violations, assertion)?;
    }
    Ok(())
}

fn check_assertion(violations: &[String], assertion: &Assertion) -> Result<(), VerifyError> {
    let filter = match assertion.message.as_deref() {
        Some(pattern) => Some(
            Regex::new(pattern)
                .map_err(|e| VerifyError::InvalidRegex(format!("{pattern:?}: {e}")))?,
        ),
        None => None,
    };

    let expectation = Expectation::from_violations(assertion.violations.as_ref())?;

    let count = match &filter {
        Some(re) => violations.iter().filter(|v| re.is_match(v)).count(),
        None => violations.len(),
    };

    if expectation.is_met(count) {
        return Ok(());
    }

    let scope = match assertion.message.as_deref() {
        Some(pattern) => format!(" matching {pattern:?}"),
        None => String::new(),
    };
    Err(VerifyError::NumViolations(format!(
        "got {count} violations{scope}, want {expectation}; violations: {violations:?}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assertion, messages, NEVER_VALIDATE};
    use gktest_types::ErrorKind;

    fn kind_of(result: Result<(), VerifyError>) -> Option<ErrorKind> {
        result.err().map(|e| e.kind())
    }

    #[test]
    fn no_assertions_expects_no_violations() {
        assert_eq!(kind_of(check_case(&[], &[])), None);
        assert_eq!(
            kind_of(check_case(&messages(&[NEVER_VALIDATE]), &[])),
            Some(ErrorKind::NumViolations)
        );
    }

    #[test]
    fn empty_assertion_expects_at_least_one() {
        let empty = Assertion::default();
        assert_eq!(
            kind_of(check_case(&[], std::slice::from_ref(&empty))),
            Some(ErrorKind::NumViolations)
        );
        assert_eq!(
            kind_of(check_case(&messages(&[NEVER_VALIDATE]), &[empty])),
            None
        );
    }

    #[test]
    fn yes_and_no_literals() {
        let violations = messages(&[NEVER_VALIDATE]);
        assert_eq!(
            kind_of(check_case(&violations, &[assertion(Some("yes"), None)])),
            None
        );
        assert_eq!(
            kind_of(check_case(&violations, &[assertion(Some("no"), None)])),
            Some(ErrorKind::NumViolations)
        );
        assert_eq!(kind_of(check_case(&[], &[assertion(Some("no"), None)])), None);
    }

    #[test]
    fn integer_count_must_match_exactly() {
        let violations = messages(&["first message", "second message"]);
        let exactly = |n| Assertion {
            violations: Some(Violations::Int(n)),
            message: None,
        };
        assert_eq!(kind_of(check_case(&violations, &[exactly(2)])), None);
        assert_eq!(
            kind_of(check_case(&violations, &[exactly(1)])),
            Some(ErrorKind::NumViolations)
        );
        assert_eq!(
            kind_of(check_case(&violations, &[exactly(3)])),
            Some(ErrorKind::NumViolations)
        );
    }

    #[test]
    fn each_assertion_filters_independently() {
        let violations = messages(&["first message", "second message"]);
        let both = [
            assertion(None, Some("first message")),
            assertion(None, Some("second message")),
        ];
        assert_eq!(kind_of(check_case(&violations, &both)), None);

        let one_missing = [
            assertion(None, Some("first message")),
            assertion(None, Some("third message")),
        ];
        assert_eq!(
            kind_of(check_case(&violations, &one_missing)),
            Some(ErrorKind::NumViolations)
        );
    }

    #[test]
    fn overlapping_filters_may_count_the_same_violation() {
        let violations = messages(&[NEVER_VALIDATE]);
        let twice = [
            assertion(Some("yes"), Some("never")),
            assertion(Some("yes"), Some("validate")),
        ];
        assert_eq!(kind_of(check_case(&violations, &twice)), None);
    }

    #[test]
    fn message_filter_is_an_unanchored_regex() {
        let violations = messages(&["first message", "second message"]);
        let re = Assertion {
            violations: Some(Violations::Int(2)),
            message: Some("[cdefinorst]+ [aegms]+".to_string()),
        };
        assert_eq!(kind_of(check_case(&violations, &[re])), None);
        assert_eq!(
            kind_of(check_case(&violations, &[assertion(None, Some("ond mess"))])),
            None
        );
        assert_eq!(
            kind_of(check_case(&violations, &[assertion(None, Some("First"))])),
            Some(ErrorKind::NumViolations)
        );
    }

    #[test]
    fn invalid_regex_wins_over_count() {
        let bad = Assertion {
            violations: Some(Violations::Str("other".to_string())),
            message: Some("never validate [(".to_string()),
        };
        assert_eq!(
            kind_of(check_case(&messages(&[NEVER_VALIDATE]), &[bad])),
            Some(ErrorKind::InvalidRegex)
        );
    }

    #[test]
    fn first_failing_assertion_stops_the_case() {
        let violations = messages(&[NEVER_VALIDATE]);
        let assertions = [
            assertion(Some("no"), None),
            assertion(None, Some("[(")),
        ];
        assert_eq!(
            kind_of(check_case(&violations, &assertions)),
            Some(ErrorKind::NumViolations)
        );
    }

    #[test]
    fn unusable_count_specifiers_are_invalid_yaml() {
        let violations = messages(&[NEVER_VALIDATE]);
        for spec in [
            Violations::Str("other".to_string()),
            Violations::Str("Yes".to_string()),
            Violations::Int(-1),
            Violations::Unrecognized("true".to_string()),
        ] {
            let a = Assertion {
                violations: Some(spec.clone()),
                message: None,
            };
            assert_eq!(
                kind_of(check_case(&violations, &[a])),
                Some(ErrorKind::InvalidYaml),
                "{spec:?}"
            );
        }
    }

    #[test]
    fn failure_detail_names_the_filter_and_expectation() {
        let err = check_case(&[], &[assertion(Some("yes"), Some("never"))])
            .expect_err("no violations to match");
        let msg = err.to_string();
        assert!(msg.contains("got 0 violations matching \"never\""), "{msg}");
        assert!(msg.contains("want at least 1"), "{msg}");
    }
}
