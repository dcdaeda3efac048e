//! The result tree produced by a suite run.
//!
//! It mirrors the suite config tree: one [`TestResult`] per executed test, one
//! [`CaseResult`] per executed case. A test whose template or constraint failed
//! to load has no case results at all. `runtime` fields are informational only.

use crate::error::VerifyError;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuiteResult {
    pub runtime: Duration,
    pub test_results: Vec<TestResult>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestResult {
    pub name: String,
    /// Failure of the test-level stage (suite shape, template, constraint).
    pub error: Option<VerifyError>,
    pub runtime: Duration,
    pub case_results: Vec<CaseResult>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaseResult {
    pub name: String,
    pub error: Option<VerifyError>,
    pub runtime: Duration,
}

impl SuiteResult {
    pub fn is_failure(&self) -> bool {
        self.test_results.iter().any(TestResult::is_failure)
    }

    /// Every error in the tree, in config order, with the test and case names it belongs to.
    pub fn errors(&self) -> Vec<(&str, Option<&str>, &VerifyError)> {
        let mut out = Vec::new();
        for test in &self.test_results {
            if let Some(err) = &test.error {
                out.push((test.name.as_str(), None, err));
            }
            for case in &test.case_results {
                if let Some(err) = &case.error {
                    out.push((test.name.as_str(), Some(case.name.as_str()), err));
                }
            }
        }
        out
    }
}

impl TestResult {
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || self.case_results.iter().any(CaseResult::is_failure)
    }
}

impl CaseResult {
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_suite_is_not_a_failure() {
        assert!(!SuiteResult::default().is_failure());
    }

    #[test]
    fn case_failure_propagates_to_suite() {
        let result = SuiteResult {
            runtime: Duration::ZERO,
            test_results: vec![
                TestResult {
                    name: "allowed".to_string(),
                    case_results: vec![CaseResult::default()],
                    ..TestResult::default()
                },
                TestResult {
                    name: "denied".to_string(),
                    case_results: vec![CaseResult {
                        name: "missing label".to_string(),
                        error: Some(VerifyError::NumViolations("got 0".to_string())),
                        runtime: Duration::ZERO,
                    }],
                    ..TestResult::default()
                },
            ],
        };

        assert!(!result.test_results[0].is_failure());
        assert!(result.test_results[1].is_failure());
        assert!(result.is_failure());

        let errors = result.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "denied");
        assert_eq!(errors[0].1, Some("missing label"));
    }

    #[test]
    fn test_level_error_is_reported_without_case() {
        let result = SuiteResult {
            runtime: Duration::ZERO,
            test_results: vec![TestResult {
                name: "broken".to_string(),
                error: Some(VerifyError::InvalidSuite("missing template".to_string())),
                ..TestResult::default()
            }],
        };

        let errors = result.errors();
        assert_eq!(
            errors,
            vec![(
                "broken",
                None,
                &VerifyError::InvalidSuite("missing template".to_string())
            )]
        );
    }
}
