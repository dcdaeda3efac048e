use gktest_types::{ErrorKind, SuiteResult};
use std::time::Duration;

/// Timing-free, detail-free view of a result tree: just the error kinds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestOutline {
    pub error: Option<ErrorKind>,
    pub cases: Vec<CaseOutline>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseOutline {
    pub error: Option<ErrorKind>,
}

impl TestOutline {
    pub fn error(kind: ErrorKind) -> Self {
        Self {
            error: Some(kind),
            cases: Vec::new(),
        }
    }

    pub fn cases(cases: Vec<Option<ErrorKind>>) -> Self {
        Self {
            error: None,
            cases: cases.into_iter().map(|error| CaseOutline { error }).collect(),
        }
    }
}

pub fn outline(result: &SuiteResult) -> Vec<TestOutline> {
    result
        .test_results
        .iter()
        .map(|t| TestOutline {
            error: t.error.as_ref().map(|e| e.kind()),
            cases: t
                .case_results
                .iter()
                .map(|c| CaseOutline {
                    error: c.error.as_ref().map(|e| e.kind()),
                })
                .collect(),
        })
        .collect()
}

/// Zero every `runtime` so whole trees can be compared with `==`.
pub fn without_runtime(mut result: SuiteResult) -> SuiteResult {
    result.runtime = Duration::ZERO;
    for test in &mut result.test_results {
        test.runtime = Duration::ZERO;
        for case in &mut test.case_results {
            case.runtime = Duration::ZERO;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use gktest_types::{CaseResult, TestResult, VerifyError};

    #[test]
    fn outline_keeps_only_kinds() {
        let result = SuiteResult {
            runtime: Duration::from_millis(3),
            test_results: vec![
                TestResult {
                    error: Some(VerifyError::InvalidSuite("missing template".to_string())),
                    ..TestResult::default()
                },
                TestResult {
                    case_results: vec![
                        CaseResult::default(),
                        CaseResult {
                            error: Some(VerifyError::NumViolations("got 0".to_string())),
                            ..CaseResult::default()
                        },
                    ],
                    ..TestResult::default()
                },
            ],
        };

        assert_eq!(
            outline(&result),
            vec![
                TestOutline::error(ErrorKind::InvalidSuite),
                TestOutline::cases(vec![None, Some(ErrorKind::NumViolations)]),
            ]
        );
    }

    #[test]
    fn without_runtime_zeroes_every_level() {
        let result = SuiteResult {
            runtime: Duration::from_millis(5),
            test_results: vec![TestResult {
                runtime: Duration::from_millis(4),
                case_results: vec![CaseResult {
                    runtime: Duration::from_millis(1),
                    ..CaseResult::default()
                }],
                ..TestResult::default()
            }],
        };
        let zeroed = without_runtime(result);
        assert_eq!(zeroed.runtime, Duration::ZERO);
        assert_eq!(zeroed.test_results[0].runtime, Duration::ZERO);
        assert_eq!(zeroed.test_results[0].case_results[0].runtime, Duration::ZERO);
    }
}
