//! The declarative Suite/Test/Case/Assertion tree. Pure data, read-only to the engine.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suite {
    pub tests: Vec<Test>,
}

/// One template + constraint pair and the cases run against it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Test {
    pub name: String,
    /// Path of the constraint template, relative to the suite's base directory.
    pub template: String,
    /// Path of the constraint, relative to the suite's base directory.
    pub constraint: String,
    pub cases: Vec<Case>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    /// Path of the object to review, relative to the suite's base directory.
    pub object: String,
    /// Empty means "expect no violations".
    pub assertions: Vec<Assertion>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assertion {
    /// Absent means "at least one".
    pub violations: Option<Violations>,
    /// Regular expression selecting which violation messages this assertion counts.
    pub message: Option<String>,
}

/// Count specifier as written in the suite.
///
/// Values are kept as written; interpretation (and rejection) happens when the
/// case is evaluated, so a bad specifier fails only its own case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violations {
    Int(i64),
    Str(String),
    /// A value that is neither an integer nor a string, rendered for diagnostics.
    Unrecognized(String),
}

impl Test {
    /// Both the template and the constraint must be referenced.
    pub fn missing_reference(&self) -> Option<&'static str> {
        if self.template.is_empty() {
            Some("template")
        } else if self.constraint.is_empty() {
            Some("constraint")
        } else {
            None
        }
    }
}

impl Assertion {
    /// The assertion synthesized for a case that declares none.
    pub fn implicit_allow() -> Self {
        Assertion {
            violations: Some(Violations::Int(0)),
            message: None,
        }
    }
}
