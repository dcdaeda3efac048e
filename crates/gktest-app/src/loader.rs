//! Load a test's template and constraint and register them with the Rule Client.
//!
//! Every failure is attributed to the document being loaded: template problems
//! are `AddingTemplate`/`NotATemplate`, constraint problems are
//! `AddingConstraint`/`NotAConstraint`. A missing file is always `NotFound`.

use gktest_client::{
    ClientError, Constraint, ConstraintKey, ConstraintTemplate, RuleClient, TypeMeta,
};
use gktest_repo::{FileProvider, FsError};
use gktest_types::{SuitePath, VerifyError, ids};
use serde_yaml::Value;

/// Read a file, keeping "not found" distinct from every other read failure.
pub(crate) fn read_file(
    fs: &dyn FileProvider,
    path: &SuitePath,
    on_error: fn(String) -> VerifyError,
) -> Result<Vec<u8>, VerifyError> {
    fs.read(path).map_err(|err| match err {
        FsError::NotFound(p) => VerifyError::NotFound(p.to_string()),
        other => on_error(other.to_string()),
    })
}

/// Decode one YAML document that must be a mapping with string keys throughout.
pub(crate) fn decode_document(bytes: &[u8]) -> Result<Value, String> {
    let value: Value = serde_yaml::from_slice(bytes).map_err(|e| e.to_string())?;
    if !value.is_mapping() {
        return Err("document must be a mapping".to_string());
    }
    check_string_keys(&value, "")?;
    Ok(value)
}

fn check_string_keys(value: &Value, at: &str) -> Result<(), String> {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let key = k.as_str().ok_or_else(|| {
                    format!("{}: mapping keys must be strings, found {k:?}", display_at(at))
                })?;
                check_string_keys(v, &format!("{at}.{key}"))?;
            }
            Ok(())
        }
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, v)| check_string_keys(v, &format!("{at}[{i}]"))),
        Value::Tagged(tagged) => check_string_keys(&tagged.value, at),
        _ => Ok(()),
    }
}

fn display_at(at: &str) -> &str {
    if at.is_empty() { "." } else { at }
}

fn type_meta(value: &Value) -> Result<TypeMeta, String> {
    serde_yaml::from_value(value.clone()).map_err(|e| e.to_string())
}

/// Load, validate, and register a template. Returns the constraint kind it governs.
pub(crate) fn load_template(
    fs: &dyn FileProvider,
    client: &mut dyn RuleClient,
    path: &SuitePath,
) -> Result<String, VerifyError> {
    let adding = |detail: String| VerifyError::AddingTemplate(format!("{path}: {detail}"));

    let bytes = read_file(fs, path, VerifyError::AddingTemplate)?;
    let value = decode_document(&bytes).map_err(adding)?;
    let meta = type_meta(&value).map_err(adding)?;

    if meta.kind != ids::KIND_CONSTRAINT_TEMPLATE || meta.group() != ids::GROUP_TEMPLATES {
        return Err(VerifyError::NotATemplate(format!(
            "{path}: got kind {:?} apiVersion {:?}, want {} in {}",
            meta.kind,
            meta.api_version,
            ids::KIND_CONSTRAINT_TEMPLATE,
            ids::GROUP_TEMPLATES
        )));
    }
    if !ids::TEMPLATE_VERSIONS.contains(&meta.version()) {
        return Err(adding(format!(
            "unsupported template version {:?} (supported: {})",
            meta.version(),
            ids::TEMPLATE_VERSIONS.join(", ")
        )));
    }

    let template: ConstraintTemplate =
        serde_yaml::from_value(value).map_err(|e| adding(e.to_string()))?;
    template.validate().map_err(adding)?;

    client
        .add_template(&template)
        .map_err(|e| adding(e.to_string()))
}

/// Load a constraint and bind it to the template loaded for the same test.
pub(crate) fn load_constraint(
    fs: &dyn FileProvider,
    client: &mut dyn RuleClient,
    path: &SuitePath,
    template_kind: &str,
) -> Result<ConstraintKey, VerifyError> {
    let adding = |detail: String| VerifyError::AddingConstraint(format!("{path}: {detail}"));

    let bytes = read_file(fs, path, VerifyError::AddingConstraint)?;
    let value = decode_document(&bytes).map_err(adding)?;
    let meta = type_meta(&value).map_err(adding)?;

    if meta.kind.is_empty() || meta.group() != ids::GROUP_CONSTRAINTS {
        return Err(VerifyError::NotAConstraint(format!(
            "{path}: got kind {:?} apiVersion {:?}, want a kind in {}",
            meta.kind,
            meta.api_version,
            ids::GROUP_CONSTRAINTS
        )));
    }
    if !ids::CONSTRAINT_VERSIONS.contains(&meta.version()) {
        return Err(adding(format!(
            "unsupported constraint version {:?}",
            meta.version()
        )));
    }

    let constraint: Constraint =
        serde_yaml::from_value(value).map_err(|e| adding(e.to_string()))?;
    if constraint.metadata.name.is_empty() {
        return Err(adding("metadata.name must be set".to_string()));
    }
    if constraint.kind != template_kind {
        return Err(adding(format!(
            "constraint kind {:?} does not match template kind {template_kind:?}",
            constraint.kind
        )));
    }

    client.add_constraint(&constraint).map_err(|err| match err {
        ClientError::NotAConstraint(detail) => {
            VerifyError::NotAConstraint(format!("{path}: {detail}"))
        }
        other => adding(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_non_string_keys() {
        let err = decode_document(b"metadata:\n  name: x\n  1: y\n").expect_err("int key");
        assert!(err.contains(".metadata"), "{err}");

        let err = decode_document(b"items:\n- {[a]: b}\n").expect_err("seq key");
        assert!(err.contains(".items[0]"), "{err}");
    }

    #[test]
    fn decode_requires_a_mapping() {
        assert!(decode_document(b"- a\n- b\n").is_err());
        assert!(decode_document(b"").is_err());
        assert!(decode_document(b"kind: [unterminated").is_err());
    }

    #[test]
    fn decode_accepts_plain_documents() {
        let value = decode_document(b"kind: Pod\nmetadata:\n  labels:\n    app: web\n")
            .expect("valid document");
        assert_eq!(value["metadata"]["labels"]["app"].as_str(), Some("web"));
    }
}
