//! Stable DTOs and codes used across the gktest workspace.
//!
//! This crate is intentionally boring:
//! - the error taxonomy attributed to each verification stage
//! - stable snake_case codes for those errors
//! - the Suite/Test/Case result tree
//! - canonical suite-relative path handling

#![forbid(unsafe_code)]

pub mod error;
pub mod ids;
pub mod path;
pub mod result;

pub use error::{ErrorKind, VerifyError};
pub use path::SuitePath;
pub use result::{CaseResult, SuiteResult, TestResult};
