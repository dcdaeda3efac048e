//! Stable identifiers for error kinds and policy document types.
//!
//! Codes are short snake_case discriminators; document identifiers are the
//! Kubernetes-style `kind` and API group strings the loader recognizes.

// Error codes
pub const CODE_CREATING_CLIENT: &str = "creating_client";
pub const CODE_INVALID_SUITE: &str = "invalid_suite";
pub const CODE_ADDING_TEMPLATE: &str = "adding_template";
pub const CODE_NOT_A_TEMPLATE: &str = "not_a_template";
pub const CODE_ADDING_CONSTRAINT: &str = "adding_constraint";
pub const CODE_NOT_A_CONSTRAINT: &str = "not_a_constraint";
pub const CODE_INVALID_CASE: &str = "invalid_case";
pub const CODE_INVALID_REGEX: &str = "invalid_regex";
pub const CODE_INVALID_YAML: &str = "invalid_yaml";
pub const CODE_NUM_VIOLATIONS: &str = "num_violations";
pub const CODE_REVIEWING_OBJECT: &str = "reviewing_object";
pub const CODE_NOT_FOUND: &str = "not_found";
pub const CODE_CANCELLED: &str = "cancelled";

// Suite documents
pub const KIND_SUITE: &str = "Suite";
pub const API_VERSION_SUITE_V1ALPHA1: &str = "test.gatekeeper.sh/v1alpha1";

// Constraint templates
pub const KIND_CONSTRAINT_TEMPLATE: &str = "ConstraintTemplate";
pub const GROUP_TEMPLATES: &str = "templates.gatekeeper.sh";
pub const TEMPLATE_VERSIONS: &[&str] = &["v1alpha1", "v1beta1", "v1"];

// Constraints
pub const GROUP_CONSTRAINTS: &str = "constraints.gatekeeper.sh";
pub const CONSTRAINT_VERSIONS: &[&str] = &["v1alpha1", "v1beta1", "v1"];

// Targets
pub const TARGET_ADMISSION: &str = "admission.k8s.gatekeeper.sh";
