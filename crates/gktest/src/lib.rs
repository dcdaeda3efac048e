//! Offline verification of admission policy templates and constraints.
//!
//! A suite pairs a constraint template with a constraint and lists objects that
//! must (or must not) violate it. [`Runner`] evaluates one suite through an
//! injected [`RuleClient`]; [`run_verify`] discovers suite files on disk and runs
//! each of them.
//!
//! ```no_run
//! use gktest::{Filter, RunContext, Runner, SuitePath};
//! # fn client() -> Result<Box<dyn gktest::RuleClient>, gktest::ClientError> { unimplemented!() }
//!
//! let suite = gktest::resolve_suite(gktest::parse_suite_yaml("kind: Suite\n")?)?;
//! let runner = Runner::new(gktest::DirFileProvider::new("policies"), client);
//! let result = runner.run(&RunContext::new(), &Filter::all(), &SuitePath::default(), &suite);
//! for (test, case, err) in result.errors() {
//!     eprintln!("{test} {case:?}: {err}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

#![forbid(unsafe_code)]

pub use gktest_app::{RunContext, Runner, SuiteOutcome, VerifyInput, VerifyOutput, run_verify};
pub use gktest_client::{
    ClientError, Constraint, ConstraintKey, ConstraintTemplate, NewClient, RuleClient,
};
pub use gktest_domain::model::{Assertion, Case, Suite, Test, Violations};
pub use gktest_domain::{Expectation, Filter, check_case};
pub use gktest_repo::{DirFileProvider, FileProvider, FsError, MapFileProvider, discover_suites};
pub use gktest_settings::{parse_filter, parse_suite_yaml, resolve_suite, suite_json_schema};
pub use gktest_types::{
    CaseResult, ErrorKind, SuitePath, SuiteResult, TestResult, VerifyError, ids,
};
