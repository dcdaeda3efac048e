//! A tiny line-based Rule Client used to drive the runner in tests.
//!
//! Rule bodies (the template target's `rego` field) are read line by line:
//!
//! ```text
//! package requiredlabels                      # ignored
//! violation "always reported"
//! violation "missing owner" when metadata.labels.owner missing
//! error "backend exploded"                    # review fails
//! ```
//!
//! Anything else is a compile error.

use gktest_client::{ClientError, Constraint, ConstraintKey, ConstraintTemplate, RuleClient};
use gktest_types::ids;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Rule {
    Always(String),
    WhenMissing { message: String, path: Vec<String> },
    Fail(String),
}

#[derive(Debug, Default)]
pub struct FixtureClient {
    /// Compiled rules by constraint kind.
    templates: BTreeMap<String, Vec<Rule>>,
    /// Bound constraints and the kind whose rules they run.
    constraints: BTreeMap<ConstraintKey, String>,
}

/// Factory suitable for `Runner::new`.
pub fn new_fixture_client() -> Result<Box<dyn RuleClient>, ClientError> {
    Ok(Box::new(FixtureClient::default()))
}

impl RuleClient for FixtureClient {
    fn add_template(&mut self, template: &ConstraintTemplate) -> Result<String, ClientError> {
        let target = match template.spec.targets.as_slice() {
            [target] => target,
            targets => {
                return Err(ClientError::InvalidTemplate(format!(
                    "expected exactly 1 target, found {}",
                    targets.len()
                )));
            }
        };
        if target.target != ids::TARGET_ADMISSION {
            return Err(ClientError::InvalidTemplate(format!(
                "unknown target {:?}",
                target.target
            )));
        }

        let kind = template.constraint_kind().to_string();
        if kind.is_empty() {
            return Err(ClientError::InvalidTemplate(
                "template declares no constraint kind".to_string(),
            ));
        }

        let rules = compile(&target.rego).map_err(|message| ClientError::Compile {
            template: template.metadata.name.clone(),
            message,
        })?;
        self.templates.insert(kind.clone(), rules);
        Ok(kind)
    }

    fn add_constraint(&mut self, constraint: &Constraint) -> Result<ConstraintKey, ClientError> {
        if !constraint.is_constraint_shaped() {
            return Err(ClientError::NotAConstraint(format!(
                "{} {}",
                constraint.api_version, constraint.kind
            )));
        }
        if !self.templates.contains_key(&constraint.kind) {
            return Err(ClientError::UnknownKind(constraint.kind.clone()));
        }
        if constraint.metadata.name.is_empty() {
            return Err(ClientError::InvalidConstraint(
                "metadata.name must be set".to_string(),
            ));
        }

        let key = constraint.key();
        self.constraints.insert(key.clone(), constraint.kind.clone());
        Ok(key)
    }

    fn review(
        &self,
        constraint: &ConstraintKey,
        object: &Value,
    ) -> Result<Vec<String>, ClientError> {
        let rules = self
            .constraints
            .get(constraint)
            .and_then(|kind| self.templates.get(kind))
            .ok_or_else(|| ClientError::UnknownConstraint(constraint.clone()))?;

        let mut out = Vec::new();
        for rule in rules {
            match rule {
                Rule::Always(message) => out.push(message.clone()),
                Rule::WhenMissing { message, path } => {
                    if lookup(object, path).is_none() {
                        out.push(message.clone());
                    }
                }
                Rule::Fail(message) => return Err(ClientError::Review(message.clone())),
            }
        }
        Ok(out)
    }
}

/// Accepts every template and refuses every constraint binding with a fixed error.
#[derive(Clone, Debug)]
pub struct RejectingClient {
    error: ClientError,
}

impl RejectingClient {
    pub fn new(error: ClientError) -> Self {
        Self { error }
    }

    /// Factory suitable for `Runner::new`.
    pub fn factory(
        error: ClientError,
    ) -> impl Fn() -> Result<Box<dyn RuleClient>, ClientError> + 'static {
        move || Ok(Box::new(RejectingClient::new(error.clone())) as Box<dyn RuleClient>)
    }
}

impl RuleClient for RejectingClient {
    fn add_template(&mut self, template: &ConstraintTemplate) -> Result<String, ClientError> {
        Ok(template.constraint_kind().to_string())
    }

    fn add_constraint(&mut self, _constraint: &Constraint) -> Result<ConstraintKey, ClientError> {
        Err(self.error.clone())
    }

    fn review(
        &self,
        constraint: &ConstraintKey,
        _object: &Value,
    ) -> Result<Vec<String>, ClientError> {
        Err(ClientError::UnknownConstraint(constraint.clone()))
    }
}

fn compile(source: &str) -> Result<Vec<Rule>, String> {
    let mut rules = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("package ") {
            continue;
        }

        let rule = if let Some(rest) = line.strip_prefix("violation ") {
            let (message, rest) = quoted(rest).ok_or_else(|| syntax(idx, raw))?;
            match rest.trim() {
                "" => Rule::Always(message),
                cond => {
                    let path = cond
                        .strip_prefix("when ")
                        .and_then(|c| c.strip_suffix(" missing"))
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .ok_or_else(|| syntax(idx, raw))?;
                    Rule::WhenMissing {
                        message,
                        path: path.split('.').map(str::to_string).collect(),
                    }
                }
            }
        } else if let Some(rest) = line.strip_prefix("error ") {
            match quoted(rest) {
                Some((message, tail)) if tail.trim().is_empty() => Rule::Fail(message),
                _ => return Err(syntax(idx, raw)),
            }
        } else {
            return Err(syntax(idx, raw));
        };
        rules.push(rule);
    }
    Ok(rules)
}

fn syntax(idx: usize, line: &str) -> String {
    format!("line {}: unexpected {:?}", idx + 1, line.trim())
}

/// Split a leading `"..."` string off `s`.
fn quoted(s: &str) -> Option<(String, &str)> {
    let body = s.trim_start().strip_prefix('"')?;
    let end = body.find('"')?;
    Some((body[..end].to_string(), &body[end + 1..]))
}

fn lookup<'a>(value: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, seg| v.get(seg.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compile_accepts_known_lines() {
        let rules = compile(
            "package x\n\n# comment\nviolation \"a\"\nviolation \"b\" when metadata.labels.owner missing\nerror \"c\"\n",
        )
        .expect("compile");
        assert_eq!(
            rules,
            vec![
                Rule::Always("a".to_string()),
                Rule::WhenMissing {
                    message: "b".to_string(),
                    path: vec![
                        "metadata".to_string(),
                        "labels".to_string(),
                        "owner".to_string()
                    ],
                },
                Rule::Fail("c".to_string()),
            ]
        );
    }

    #[test]
    fn compile_rejects_unknown_lines() {
        let err = compile("package x\nviolation[{\"msg\": msg}] {\n  f\n}\n").expect_err("rego");
        assert!(err.starts_with("line 2"), "{err}");
        assert!(compile("violation \"unterminated\n").is_err());
        assert!(compile("violation \"a\" when\n").is_err());
    }

    #[test]
    fn when_missing_looks_up_nested_fields() {
        let path = vec!["metadata".to_string(), "labels".to_string(), "owner".to_string()];
        let with = json!({"metadata": {"labels": {"owner": "team-a"}}});
        let without = json!({"metadata": {"name": "x"}});
        assert!(lookup(&with, &path).is_some());
        assert!(lookup(&without, &path).is_none());
    }
}
