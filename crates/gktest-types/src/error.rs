//! Error taxonomy for suite verification.
//!
//! Every error is attributed to the stage that detected it. The detail string is
//! for humans; callers that need to branch on the failure use [`VerifyError::kind`].

use crate::ids;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failure recorded on a test or case result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The Rule Client factory failed; nothing could be evaluated.
    #[error("creating client: {0}")]
    CreatingClient(String),

    /// A test is missing its template or constraint reference.
    #[error("invalid suite: {0}")]
    InvalidSuite(String),

    #[error("adding template: {0}")]
    AddingTemplate(String),

    #[error("not a template: {0}")]
    NotATemplate(String),

    #[error("adding constraint: {0}")]
    AddingConstraint(String),

    #[error("not a constraint: {0}")]
    NotAConstraint(String),

    #[error("invalid case: {0}")]
    InvalidCase(String),

    /// An assertion's message filter is not a valid regular expression.
    #[error("invalid regex: {0}")]
    InvalidRegex(String),

    /// A count specifier or an object document could not be interpreted.
    #[error("invalid yaml: {0}")]
    InvalidYaml(String),

    /// The observed violations do not satisfy an assertion.
    #[error("unexpected number of violations: {0}")]
    NumViolations(String),

    #[error("reviewing object: {0}")]
    ReviewingObject(String),

    /// A referenced file does not exist. Never wrapped into another kind.
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("cancelled: {0}")]
    Cancelled(String),
}

/// Detail-free discriminant of [`VerifyError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    CreatingClient,
    InvalidSuite,
    AddingTemplate,
    NotATemplate,
    AddingConstraint,
    NotAConstraint,
    InvalidCase,
    InvalidRegex,
    InvalidYaml,
    NumViolations,
    ReviewingObject,
    NotFound,
    Cancelled,
}

impl VerifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerifyError::CreatingClient(_) => ErrorKind::CreatingClient,
            VerifyError::InvalidSuite(_) => ErrorKind::InvalidSuite,
            VerifyError::AddingTemplate(_) => ErrorKind::AddingTemplate,
            VerifyError::NotATemplate(_) => ErrorKind::NotATemplate,
            VerifyError::AddingConstraint(_) => ErrorKind::AddingConstraint,
            VerifyError::NotAConstraint(_) => ErrorKind::NotAConstraint,
            VerifyError::InvalidCase(_) => ErrorKind::InvalidCase,
            VerifyError::InvalidRegex(_) => ErrorKind::InvalidRegex,
            VerifyError::InvalidYaml(_) => ErrorKind::InvalidYaml,
            VerifyError::NumViolations(_) => ErrorKind::NumViolations,
            VerifyError::ReviewingObject(_) => ErrorKind::ReviewingObject,
            VerifyError::NotFound(_) => ErrorKind::NotFound,
            VerifyError::Cancelled(_) => ErrorKind::Cancelled,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::CreatingClient => ids::CODE_CREATING_CLIENT,
            ErrorKind::InvalidSuite => ids::CODE_INVALID_SUITE,
            ErrorKind::AddingTemplate => ids::CODE_ADDING_TEMPLATE,
            ErrorKind::NotATemplate => ids::CODE_NOT_A_TEMPLATE,
            ErrorKind::AddingConstraint => ids::CODE_ADDING_CONSTRAINT,
            ErrorKind::NotAConstraint => ids::CODE_NOT_A_CONSTRAINT,
            ErrorKind::InvalidCase => ids::CODE_INVALID_CASE,
            ErrorKind::InvalidRegex => ids::CODE_INVALID_REGEX,
            ErrorKind::InvalidYaml => ids::CODE_INVALID_YAML,
            ErrorKind::NumViolations => ids::CODE_NUM_VIOLATIONS,
            ErrorKind::ReviewingObject => ids::CODE_REVIEWING_OBJECT,
            ErrorKind::NotFound => ids::CODE_NOT_FOUND,
            ErrorKind::Cancelled => ids::CODE_CANCELLED,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
