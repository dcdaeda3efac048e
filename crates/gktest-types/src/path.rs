use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Canonical path of a file referenced from a suite, relative to the file provider root.
///
/// Normalization is purely lexical and deterministic:
/// - always forward slashes (`/`)
/// - `.` segments and empty segments are dropped
/// - `..` removes the preceding segment when there is one to remove
/// - the empty path is spelled `.`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuitePath(String);

impl Default for SuitePath {
    fn default() -> Self {
        SuitePath::new(".")
    }
}

impl SuitePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(clean(&s.as_ref().replace('\\', "/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_utf8_path(&self) -> &Utf8Path {
        Utf8Path::new(&self.0)
    }

    pub fn is_root(&self) -> bool {
        self.0 == "."
    }

    /// Resolve `segment` against this path; the segment is always treated as relative.
    pub fn join(&self, segment: &str) -> SuitePath {
        if self.is_root() {
            return SuitePath::new(segment);
        }
        SuitePath::new(format!("{}/{}", self.0, segment))
    }

    /// Lexical parent. Climbs further when the path is `.` or ends in `..`.
    pub fn parent(&self) -> SuitePath {
        if self.is_root() || self.0 == ".." || self.0.ends_with("/..") {
            return SuitePath::new(format!("{}/..", self.0));
        }
        match self.0.rsplit_once('/') {
            Some(("", _)) => SuitePath::new("/"),
            Some((dir, _)) => SuitePath::new(dir),
            None => SuitePath::default(),
        }
    }
}

impl std::fmt::Display for SuitePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for SuitePath {
    fn from(value: &Utf8Path) -> Self {
        SuitePath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for SuitePath {
    fn from(value: Utf8PathBuf) -> Self {
        SuitePath::new(value.as_str())
    }
}

fn clean(input: &str) -> String {
    let rooted = input.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for seg in input.split('/') {
        match seg {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `..` at the root of an absolute path stays at the root.
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
