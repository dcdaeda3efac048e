use gktest::{ErrorKind, Filter, MapFileProvider, RunContext, Runner, SuitePath};
use gktest_test_util::fixtures::{CONSTRAINT_NEVER_VALIDATE, OBJECT, TEMPLATE_NEVER_VALIDATE};
use gktest_test_util::new_fixture_client;

const SUITE: &str = r#"
kind: Suite
apiVersion: test.gatekeeper.sh/v1alpha1
tests:
- name: never-validate
  template: template.yaml
  constraint: constraint.yaml
  cases:
  - name: denied
    object: object.yaml
    assertions:
    - message: never validate
  - name: wrongly-allowed
    object: object.yaml
    assertions:
    - violations: no
"#;

#[test]
fn facade_runs_a_parsed_suite() {
    let suite = gktest::resolve_suite(gktest::parse_suite_yaml(SUITE).expect("parse"))
        .expect("resolve");
    let fs = MapFileProvider::new()
        .with_file("template.yaml", TEMPLATE_NEVER_VALIDATE)
        .with_file("constraint.yaml", CONSTRAINT_NEVER_VALIDATE)
        .with_file("object.yaml", OBJECT);

    let result = Runner::new(fs, new_fixture_client).run(
        &RunContext::new(),
        &Filter::all(),
        &SuitePath::default(),
        &suite,
    );

    let errors = result.errors();
    assert_eq!(errors.len(), 1);
    let (test, case, err) = errors[0];
    assert_eq!(test, "never-validate");
    assert_eq!(case, Some("wrongly-allowed"));
    assert_eq!(err.kind(), ErrorKind::NumViolations);
    assert_eq!(err.code(), "num_violations");
}
