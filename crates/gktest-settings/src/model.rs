use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Suite document, `test.gatekeeper.sh/v1alpha1`.
///
/// This is a *user-facing* model: every field defaults so that structural
/// problems (a test without a template, a case without an object) are reported
/// per test or case by the runner instead of rejecting the whole document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuiteConfigV1 {
    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub api_version: String,

    #[serde(default)]
    pub tests: Vec<TestConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TestConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Path to the ConstraintTemplate, relative to the suite file.
    #[serde(default)]
    pub template: String,

    /// Path to the constraint, relative to the suite file.
    #[serde(default)]
    pub constraint: String,

    #[serde(default)]
    pub cases: Vec<CaseConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CaseConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Path to the object under review, relative to the suite file.
    #[serde(default)]
    pub object: String,

    /// Omit to expect no violations.
    #[serde(default)]
    pub assertions: Vec<AssertionConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssertionConfig {
    /// `yes`, `no`, or an exact count. Defaults to `yes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<ViolationsConfig>,

    /// Regular expression selecting which violation messages are counted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `violations` as written. Anything that is not an integer or a string is kept
/// so the case it belongs to can fail on its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ViolationsConfig {
    Int(i64),
    Str(String),
    Other(serde_json::Value),
}
