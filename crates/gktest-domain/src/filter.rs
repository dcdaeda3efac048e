use crate::model::{Case, Test};
use regex::Regex;

/// Narrows which tests and cases of a suite execute.
///
/// A missing pattern matches everything. Patterns are unanchored searches over
/// the test and case names.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    test: Option<Regex>,
    case: Option<Regex>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(test: Option<&str>, case: Option<&str>) -> Result<Self, regex::Error> {
        Ok(Self {
            test: test.map(Regex::new).transpose()?,
            case: case.map(Regex::new).transpose()?,
        })
    }

    pub fn matches_test(&self, test: &Test) -> bool {
        self.test.as_ref().is_none_or(|re| re.is_match(&test.name))
    }

    pub fn matches_case(&self, case: &Case) -> bool {
        self.case.as_ref().is_none_or(|re| re.is_match(&case.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_named(name: &str) -> Test {
        Test {
            name: name.to_string(),
            ..Test::default()
        }
    }

    fn case_named(name: &str) -> Case {
        Case {
            name: name.to_string(),
            ..Case::default()
        }
    }

    #[test]
    fn default_filter_matches_everything() {
        let filter = Filter::all();
        assert!(filter.matches_test(&test_named("")));
        assert!(filter.matches_case(&case_named("anything")));
    }

    #[test]
    fn patterns_are_unanchored() {
        let filter = Filter::new(Some("labels"), Some("^deny")).expect("valid patterns");
        assert!(filter.matches_test(&test_named("required-labels-v2")));
        assert!(!filter.matches_test(&test_named("allowed-repos")));
        assert!(filter.matches_case(&case_named("deny-missing-owner")));
        assert!(!filter.matches_case(&case_named("allow-deny-list")));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(Filter::new(Some("[("), None).is_err());
        assert!(Filter::new(None, Some("(")).is_err());
    }
}
