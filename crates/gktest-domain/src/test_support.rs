use crate::model::{Assertion, Violations};

pub const NEVER_VALIDATE: &str = "never validate";

pub fn messages(msgs: &[&str]) -> Vec<String> {
    msgs.iter().map(|m| m.to_string()).collect()
}

pub fn assertion(violations: Option<&str>, message: Option<&str>) -> Assertion {
    Assertion {
        violations: violations.map(|v| Violations::Str(v.to_string())),
        message: message.map(|m| m.to_string()),
    }
}
