//! The Rule Client seam.
//!
//! gktest never compiles or evaluates policy rules itself. A backend implements
//! [`RuleClient`] and the runner receives a factory producing one fresh client
//! per suite run.

#![forbid(unsafe_code)]

pub mod document;

pub use document::{
    Constraint, ConstraintKey, ConstraintTemplate, CrdNames, CrdSpec, ObjectMeta, TemplateCrd,
    TemplateSpec, TemplateTarget, TypeMeta,
};

use thiserror::Error;

/// Errors a Rule Client reports back to the runner.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("creating client: {0}")]
    Create(String),

    /// The template's rule body did not compile.
    #[error("compiling template {template}: {message}")]
    Compile { template: String, message: String },

    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    /// The document does not have the shape of any constraint.
    #[error("not a constraint: {0}")]
    NotAConstraint(String),

    /// The constraint is shaped correctly but no registered template governs its kind.
    #[error("no template registered for constraint kind {0:?}")]
    UnknownKind(String),

    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("unknown constraint {0}")]
    UnknownConstraint(ConstraintKey),

    #[error("reviewing object: {0}")]
    Review(String),
}

/// Compile templates, bind constraints, and review objects.
pub trait RuleClient {
    /// Compile and register a template. Returns the constraint kind the template governs.
    fn add_template(&mut self, template: &ConstraintTemplate) -> Result<String, ClientError>;

    /// Bind a constraint to the template registered for its kind.
    fn add_constraint(&mut self, constraint: &Constraint) -> Result<ConstraintKey, ClientError>;

    /// Evaluate one bound constraint against an object. Returns violation messages in
    /// the order the rule produced them; empty means the object is compliant.
    fn review(
        &self,
        constraint: &ConstraintKey,
        object: &serde_json::Value,
    ) -> Result<Vec<String>, ClientError>;
}

/// Zero-argument factory producing a ready Rule Client.
pub type NewClient = dyn Fn() -> Result<Box<dyn RuleClient>, ClientError>;
