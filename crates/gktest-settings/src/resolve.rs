use crate::model::{AssertionConfig, CaseConfig, SuiteConfigV1, TestConfig, ViolationsConfig};
use anyhow::Context;
use gktest_domain::Filter;
use gktest_domain::model::{Assertion, Case, Suite, Test, Violations};
use gktest_types::ids;
use serde::Deserialize;

/// Separates the test pattern from the case pattern in a `run` expression.
const FILTER_SEPARATOR: &str = "//";

pub fn resolve_suite(cfg: SuiteConfigV1) -> anyhow::Result<Suite> {
    if cfg.kind != ids::KIND_SUITE {
        anyhow::bail!(
            "unknown suite kind: {:?} (expected {:?})",
            cfg.kind,
            ids::KIND_SUITE
        );
    }
    if cfg.api_version != ids::API_VERSION_SUITE_V1ALPHA1 {
        anyhow::bail!(
            "unsupported suite apiVersion: {:?} (expected {:?})",
            cfg.api_version,
            ids::API_VERSION_SUITE_V1ALPHA1
        );
    }

    Ok(Suite {
        tests: cfg.tests.into_iter().map(resolve_test).collect(),
    })
}

fn resolve_test(cfg: TestConfig) -> Test {
    Test {
        name: cfg.name,
        template: cfg.template,
        constraint: cfg.constraint,
        cases: cfg.cases.into_iter().map(resolve_case).collect(),
    }
}

fn resolve_case(cfg: CaseConfig) -> Case {
    Case {
        name: cfg.name,
        object: cfg.object,
        assertions: cfg.assertions.into_iter().map(resolve_assertion).collect(),
    }
}

fn resolve_assertion(cfg: AssertionConfig) -> Assertion {
    Assertion {
        violations: cfg.violations.map(|v| match v {
            ViolationsConfig::Int(n) => Violations::Int(n),
            ViolationsConfig::Str(s) => Violations::Str(s),
            ViolationsConfig::Other(value) => Violations::Unrecognized(value.to_string()),
        }),
        message: cfg.message,
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeMeta {
    #[serde(default)]
    kind: String,
    #[serde(default)]
    api_version: String,
}

/// Cheap header check used by discovery: is this YAML text a suite document?
///
/// Text that does not parse is not a suite.
pub fn is_suite_document(input: &str) -> bool {
    serde_yaml::from_str::<TypeMeta>(input)
        .map(|meta| {
            meta.kind == ids::KIND_SUITE && meta.api_version == ids::API_VERSION_SUITE_V1ALPHA1
        })
        .unwrap_or(false)
}

/// Parse a `run` expression: `<test pattern>//<case pattern>`.
///
/// Either side may be empty to match everything; an expression without the
/// separator only filters tests.
pub fn parse_filter(run: &str) -> anyhow::Result<Filter> {
    let (test, case) = match run.split_once(FILTER_SEPARATOR) {
        Some((test, case)) => (test, case),
        None => (run, ""),
    };
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    let test = non_empty(test);
    let case = non_empty(case);

    Filter::new(test.as_deref(), case.as_deref())
        .with_context(|| format!("invalid run filter: {run:?}"))
}
