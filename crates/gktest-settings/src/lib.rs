//! Suite document parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves suite documents provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{AssertionConfig, CaseConfig, SuiteConfigV1, TestConfig, ViolationsConfig};
pub use resolve::{is_suite_document, parse_filter};

use gktest_domain::model::Suite;

/// Parse a suite YAML document into the user-facing model.
pub fn parse_suite_yaml(input: &str) -> anyhow::Result<SuiteConfigV1> {
    let cfg: SuiteConfigV1 = serde_yaml::from_str(input)?;
    Ok(cfg)
}

/// Validate the document header and convert into the suite model the runner executes.
pub fn resolve_suite(cfg: SuiteConfigV1) -> anyhow::Result<Suite> {
    resolve::resolve_suite(cfg)
}

/// JSON schema of the suite document, for editor and CI tooling.
pub fn suite_json_schema() -> schemars::Schema {
    schemars::schema_for!(SuiteConfigV1)
}
