//! The `verify` use case: discover suite files and run each one.

use anyhow::Context;
use camino::Utf8Path;
use gktest_client::{ClientError, RuleClient};
use gktest_domain::Filter;
use gktest_domain::model::Suite;
use gktest_repo::DirFileProvider;
use gktest_types::{SuitePath, SuiteResult};
use tracing::{debug, info, warn};

use crate::context::RunContext;
use crate::runner::Runner;

/// Input for the verify use case.
#[derive(Clone, Debug)]
pub struct VerifyInput<'a> {
    /// Directory every suite path is resolved against.
    pub root: &'a Utf8Path,
    /// Suite file or directory, relative to `root`.
    pub target: &'a str,
    /// Descend into subdirectories of a directory target.
    pub recursive: bool,
    /// Optional `"<test-regex>//<case-regex>"` filter.
    pub run: Option<&'a str>,
}

/// One discovered suite and its result tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SuiteOutcome {
    pub path: SuitePath,
    pub result: SuiteResult,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerifyOutput {
    pub suites: Vec<SuiteOutcome>,
}

impl VerifyOutput {
    pub fn is_failure(&self) -> bool {
        self.suites.iter().any(|s| s.result.is_failure())
    }
}

/// Run the verify use case: parse the filter, discover suites, run every suite.
///
/// Only problems with the inputs themselves (bad filter, missing target, an
/// explicit suite file that does not parse) fail the call. A directory target
/// skips suite files that do not parse. Everything that goes wrong inside a
/// suite is reported in its result tree.
pub fn run_verify<C>(
    input: VerifyInput<'_>,
    ctx: &RunContext,
    new_client: C,
) -> anyhow::Result<VerifyOutput>
where
    C: Fn() -> Result<Box<dyn RuleClient>, ClientError> + 'static,
{
    let filter = match input.run {
        Some(run) => gktest_settings::parse_filter(run)?,
        None => Filter::all(),
    };

    let paths = gktest_repo::discover_suites(input.root, input.target, input.recursive)
        .context("discover suites")?;
    debug!(target: "gktest::verify", root = %input.root, suites = paths.len(), "discovered suites");

    let explicit_file = input
        .root
        .join(SuitePath::new(input.target).as_utf8_path())
        .is_file();
    let runner = Runner::new(DirFileProvider::new(input.root), new_client);

    let mut suites = Vec::with_capacity(paths.len());
    for path in paths {
        let suite = match load_suite(input.root, &path) {
            Ok(suite) => suite,
            Err(err) if !explicit_file => {
                warn!(
                    target: "gktest::verify",
                    suite = %path,
                    error = format!("{err:#}"),
                    "skipping unparseable suite"
                );
                continue;
            }
            Err(err) => return Err(err),
        };

        let result = runner.run(ctx, &filter, &path.parent(), &suite);
        info!(
            target: "gktest::verify",
            suite = %path,
            failed = result.is_failure(),
            "suite verified"
        );
        suites.push(SuiteOutcome { path, result });
    }

    Ok(VerifyOutput { suites })
}

fn load_suite(root: &Utf8Path, path: &SuitePath) -> anyhow::Result<Suite> {
    let abs = root.join(path.as_utf8_path());
    let text = std::fs::read_to_string(&abs).with_context(|| format!("read suite {path}"))?;
    let cfg =
        gktest_settings::parse_suite_yaml(&text).with_context(|| format!("parse suite {path}"))?;
    gktest_settings::resolve_suite(cfg).with_context(|| format!("resolve suite {path}"))
}
