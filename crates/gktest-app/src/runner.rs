//! Fold a suite config tree into a result tree.

use crate::context::RunContext;
use crate::evaluate;
use crate::loader;
use gktest_client::{ClientError, ConstraintKey, NewClient, RuleClient};
use gktest_domain::Filter;
use gktest_domain::model::{Case, Suite, Test};
use gktest_repo::FileProvider;
use gktest_types::{CaseResult, SuitePath, SuiteResult, TestResult, VerifyError};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs suites against a file source and a Rule Client factory.
///
/// A runner holds no per-run state: every [`Runner::run`] creates its own client,
/// so runs are independent and repeatable.
pub struct Runner {
    fs: Box<dyn FileProvider>,
    new_client: Box<NewClient>,
}

impl Runner {
    pub fn new<F, C>(fs: F, new_client: C) -> Self
    where
        F: FileProvider + 'static,
        C: Fn() -> Result<Box<dyn RuleClient>, ClientError> + 'static,
    {
        Self {
            fs: Box::new(fs),
            new_client: Box::new(new_client),
        }
    }

    /// Run every test of `suite` selected by `filter`.
    ///
    /// Paths inside the suite are resolved against `base_dir`. Never fails as a
    /// whole: every problem is recorded on the test or case it belongs to.
    pub fn run(
        &self,
        ctx: &RunContext,
        filter: &Filter,
        base_dir: &SuitePath,
        suite: &Suite,
    ) -> SuiteResult {
        let started = Instant::now();
        debug!(
            target: "gktest::runner",
            base_dir = %base_dir,
            tests = suite.tests.len(),
            "suite started"
        );
        let selected = suite.tests.iter().filter(|t| filter.matches_test(t));

        let mut client = match (self.new_client)() {
            Ok(client) => client,
            Err(err) => {
                warn!(target: "gktest::runner", error = %err, "rule client unavailable");
                let error = VerifyError::CreatingClient(err.to_string());
                let test_results = selected
                    .map(|test| TestResult {
                        name: test.name.clone(),
                        error: Some(error.clone()),
                        ..TestResult::default()
                    })
                    .collect();
                return SuiteResult {
                    runtime: started.elapsed(),
                    test_results,
                };
            }
        };

        let test_results = selected
            .map(|test| self.run_test(ctx, filter, base_dir, client.as_mut(), test))
            .collect();

        let result = SuiteResult {
            runtime: started.elapsed(),
            test_results,
        };
        info!(
            target: "gktest::runner",
            base_dir = %base_dir,
            tests = result.test_results.len(),
            failed = result.is_failure(),
            "suite finished"
        );
        result
    }

    fn run_test(
        &self,
        ctx: &RunContext,
        filter: &Filter,
        base_dir: &SuitePath,
        client: &mut dyn RuleClient,
        test: &Test,
    ) -> TestResult {
        let started = Instant::now();
        let mut result = TestResult {
            name: test.name.clone(),
            ..TestResult::default()
        };

        match self.prepare(ctx, base_dir, client, test) {
            Ok(constraint) => {
                result.case_results = test
                    .cases
                    .iter()
                    .filter(|c| filter.matches_case(c))
                    .map(|case| self.run_case(ctx, base_dir, client, &constraint, case))
                    .collect();
            }
            Err(err @ VerifyError::Cancelled(_)) => {
                info!(target: "gktest::runner", test = %test.name, reason = %err, "test skipped");
                result.error = Some(err);
            }
            Err(err) => {
                warn!(
                    target: "gktest::runner",
                    test = %test.name,
                    code = err.code(),
                    error = %err,
                    "test failed to load"
                );
                result.error = Some(err);
            }
        }

        result.runtime = started.elapsed();
        result
    }

    /// Everything that must succeed before any case of `test` can run.
    fn prepare(
        &self,
        ctx: &RunContext,
        base_dir: &SuitePath,
        client: &mut dyn RuleClient,
        test: &Test,
    ) -> Result<ConstraintKey, VerifyError> {
        if let Some(reason) = ctx.cancellation() {
            return Err(VerifyError::Cancelled(reason.to_string()));
        }
        if let Some(missing) = test.missing_reference() {
            return Err(VerifyError::InvalidSuite(format!(
                "test {:?} has no {missing} path",
                test.name
            )));
        }

        let template_path = base_dir.join(&test.template);
        let kind = loader::load_template(&*self.fs, client, &template_path)?;
        debug!(
            target: "gktest::runner",
            test = %test.name,
            template = %template_path,
            kind = %kind,
            "template added"
        );

        let constraint_path = base_dir.join(&test.constraint);
        let key = loader::load_constraint(&*self.fs, client, &constraint_path, &kind)?;
        debug!(
            target: "gktest::runner",
            test = %test.name,
            constraint = %key,
            "constraint added"
        );
        Ok(key)
    }

    fn run_case(
        &self,
        ctx: &RunContext,
        base_dir: &SuitePath,
        client: &dyn RuleClient,
        constraint: &ConstraintKey,
        case: &Case,
    ) -> CaseResult {
        let started = Instant::now();
        let error = self.check(ctx, base_dir, client, constraint, case).err();
        if let Some(err) = &error {
            debug!(
                target: "gktest::runner",
                case = %case.name,
                code = err.code(),
                error = %err,
                "case failed"
            );
        }
        CaseResult {
            name: case.name.clone(),
            error,
            runtime: started.elapsed(),
        }
    }

    fn check(
        &self,
        ctx: &RunContext,
        base_dir: &SuitePath,
        client: &dyn RuleClient,
        constraint: &ConstraintKey,
        case: &Case,
    ) -> Result<(), VerifyError> {
        if let Some(reason) = ctx.cancellation() {
            return Err(VerifyError::Cancelled(reason.to_string()));
        }
        if case.object.is_empty() {
            return Err(VerifyError::InvalidCase(format!(
                "case {:?} has no object path",
                case.name
            )));
        }

        let object = evaluate::read_object(&*self.fs, &base_dir.join(&case.object))?;
        let violations = evaluate::review(client, constraint, &object)?;
        gktest_domain::check_case(&violations, &case.assertions)
    }
}
