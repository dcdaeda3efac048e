//! Policy documents shared by runner tests.
//!
//! Templates carry rule bodies for [`FixtureClient`](crate::FixtureClient).

pub const TEMPLATE_ALWAYS_VALIDATE: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1beta1
metadata:
  name: alwaysvalidate
spec:
  crd:
    spec:
      names:
        kind: AlwaysValidate
  targets:
    - target: admission.k8s.gatekeeper.sh
      rego: |
        package k8salwaysvalidate
"#;

pub const TEMPLATE_NEVER_VALIDATE: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1beta1
metadata:
  name: nevervalidate
spec:
  crd:
    spec:
      names:
        kind: NeverValidate
  targets:
    - target: admission.k8s.gatekeeper.sh
      rego: |
        package k8snevervalidate
        violation "never validate"
"#;

pub const TEMPLATE_NEVER_VALIDATE_TWICE: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1beta1
metadata:
  name: nevervalidatetwice
spec:
  crd:
    spec:
      names:
        kind: NeverValidateTwice
  targets:
    - target: admission.k8s.gatekeeper.sh
      rego: |
        package k8snevervalidate
        violation "first message"
        violation "second message"
"#;

pub const TEMPLATE_REQUIRED_OWNER: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1
metadata:
  name: requiredowner
spec:
  crd:
    spec:
      names:
        kind: RequiredOwner
  targets:
    - target: admission.k8s.gatekeeper.sh
      rego: |
        package requiredowner
        violation "object must have an owner label" when metadata.labels.owner missing
"#;

pub const TEMPLATE_REVIEW_ERROR: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1beta1
metadata:
  name: reviewerror
spec:
  crd:
    spec:
      names:
        kind: ReviewError
  targets:
    - target: admission.k8s.gatekeeper.sh
      rego: |
        error "backend unavailable"
"#;

pub const TEMPLATE_UNSUPPORTED_VERSION: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1beta2
metadata:
  name: unsupportedversion
spec:
  crd:
    spec:
      names:
        kind: UnsupportedVersion
  targets:
    - target: admission.k8s.gatekeeper.sh
      rego: |
        violation "never validate"
"#;

pub const TEMPLATE_INVALID_YAML: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1beta1
metadata:
  name: alwaysvalidate
  {}: {}
spec:
  crd:
    spec:
      names:
        kind: AlwaysValidate
  targets:
    - target: admission.k8s.gatekeeper.sh
      rego: |
        violation "never validate"
"#;

pub const TEMPLATE_MARSHAL_ERROR: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1beta1
metadata:
  name: alwaysvalidate
spec: [a, b, c]
"#;

pub const TEMPLATE_COMPILE_ERROR: &str = r#"
kind: ConstraintTemplate
apiVersion: templates.gatekeeper.sh/v1beta1
metadata:
  name: compileerror
spec:
  crd:
    spec:
      names:
        kind: CompileError
  targets:
    - target: admission.k8s.gatekeeper.sh
      rego: |
        package k8sdisallowedtags
        violation[{"msg": msg}] {
          f
        }
"#;

pub const CONSTRAINT_ALWAYS_VALIDATE: &str = r#"
kind: AlwaysValidate
apiVersion: constraints.gatekeeper.sh/v1beta1
metadata:
  name: always-pass
"#;

pub const CONSTRAINT_NEVER_VALIDATE: &str = r#"
kind: NeverValidate
apiVersion: constraints.gatekeeper.sh/v1beta1
metadata:
  name: always-fail
"#;

pub const CONSTRAINT_NEVER_VALIDATE_TWICE: &str = r#"
kind: NeverValidateTwice
apiVersion: constraints.gatekeeper.sh/v1beta1
metadata:
  name: always-fail-twice
"#;

pub const CONSTRAINT_REQUIRED_OWNER: &str = r#"
kind: RequiredOwner
apiVersion: constraints.gatekeeper.sh/v1beta1
metadata:
  name: must-have-owner
"#;

pub const CONSTRAINT_REVIEW_ERROR: &str = r#"
kind: ReviewError
apiVersion: constraints.gatekeeper.sh/v1beta1
metadata:
  name: review-error
"#;

pub const CONSTRAINT_INVALID_YAML: &str = r#"
kind: AlwaysValidate
apiVersion: constraints.gatekeeper.sh/v1beta1
metadata:
  name: always-pass
  {}: {}
"#;

pub const CONSTRAINT_WRONG_TEMPLATE: &str = r#"
kind: Other
apiVersion: constraints.gatekeeper.sh/v1beta1
metadata:
  name: other
"#;

pub const OBJECT: &str = r#"
kind: Object
apiVersion: v1
metadata:
  name: object
"#;

pub const OBJECT_WITH_OWNER: &str = r#"
kind: Object
apiVersion: v1
metadata:
  name: owned
  labels:
    owner: team-a
"#;
