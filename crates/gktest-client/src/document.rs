//! Policy documents handed to a Rule Client.
//!
//! Only the fields the runner and a backend need are modeled. Everything
//! defaults, so shape problems surface in [`ConstraintTemplate::validate`] with a
//! readable message instead of a generic decode error.

use gktest_types::ids;
use serde::{Deserialize, Serialize};

/// `apiVersion` and `kind` of any Kubernetes-style document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
}

impl TypeMeta {
    /// Split `apiVersion` into group and version. The core group is empty.
    pub fn group_version(&self) -> (&str, &str) {
        match self.api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", self.api_version.as_str()),
        }
    }

    pub fn group(&self) -> &str {
        self.group_version().0
    }

    pub fn version(&self) -> &str {
        self.group_version().1
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintTemplate {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: TemplateSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSpec {
    #[serde(default)]
    pub crd: TemplateCrd,
    #[serde(default)]
    pub targets: Vec<TemplateTarget>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCrd {
    #[serde(default)]
    pub spec: CrdSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrdSpec {
    #[serde(default)]
    pub names: CrdNames,
    /// OpenAPI schema of the constraint parameters, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrdNames {
    #[serde(default)]
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTarget {
    #[serde(default)]
    pub target: String,
    /// Rule body in the backend's language.
    #[serde(default)]
    pub rego: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub libs: Vec<String>,
}

impl ConstraintTemplate {
    /// The constraint kind this template declares.
    pub fn constraint_kind(&self) -> &str {
        &self.spec.crd.spec.names.kind
    }

    /// Structural checks every backend relies on.
    ///
    /// - the CRD must name a constraint kind
    /// - `metadata.name` must be that kind lowercased
    /// - exactly one target
    pub fn validate(&self) -> Result<(), String> {
        let kind = self.constraint_kind();
        if kind.is_empty() {
            return Err("spec.crd.spec.names.kind must be set".to_string());
        }
        let expected = kind.to_lowercase();
        if self.metadata.name != expected {
            return Err(format!(
                "metadata.name {:?} must be the lowercase constraint kind {expected:?}",
                self.metadata.name
            ));
        }
        if self.spec.targets.len() != 1 {
            return Err(format!(
                "expected exactly 1 target, found {}",
                self.spec.targets.len()
            ));
        }
        Ok(())
    }
}

/// An instantiation of a template. Parameters stay untyped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: serde_json::Value,
}

impl Constraint {
    pub fn type_meta(&self) -> TypeMeta {
        TypeMeta {
            api_version: self.api_version.clone(),
            kind: self.kind.clone(),
        }
    }

    /// Whether this document is shaped like any constraint at all.
    pub fn is_constraint_shaped(&self) -> bool {
        !self.kind.is_empty() && self.type_meta().group() == ids::GROUP_CONSTRAINTS
    }

    pub fn key(&self) -> ConstraintKey {
        ConstraintKey {
            kind: self.kind.clone(),
            name: self.metadata.name.clone(),
        }
    }
}

/// Identifies a bound constraint within one Rule Client.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintKey {
    pub kind: String,
    pub name: String,
}

impl std::fmt::Display for ConstraintKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}
