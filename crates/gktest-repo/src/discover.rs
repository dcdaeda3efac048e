use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use gktest_types::SuitePath;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Discover suite documents under `root`.
///
/// Behavior:
/// - If `target` is a file, it must be a suite document.
/// - If `target` is a directory, every `.yaml`/`.yml` file directly inside it (or
///   anywhere below it when `recursive`) that is a suite document is returned.
///   Other YAML files (templates, constraints, objects) are skipped.
///
/// Returned paths are relative to `root`, sorted.
pub fn discover_suites(
    root: &Utf8Path,
    target: &str,
    recursive: bool,
) -> anyhow::Result<Vec<SuitePath>> {
    let target_rel = SuitePath::new(target);
    let abs = if target_rel.is_root() {
        root.to_path_buf()
    } else {
        root.join(target_rel.as_utf8_path())
    };

    let meta = std::fs::metadata(&abs).with_context(|| format!("read target {abs}"))?;
    if meta.is_file() {
        let text = std::fs::read_to_string(&abs).with_context(|| format!("read {abs}"))?;
        if !gktest_settings::is_suite_document(&text) {
            anyhow::bail!("{target_rel} is not a suite document");
        }
        return Ok(vec![target_rel]);
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut out: Vec<SuitePath> = Vec::new();

    for file in WalkDir::new(&abs)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        .filter(|p| matches!(p.extension(), Some("yaml" | "yml")))
    {
        let text = match std::fs::read_to_string(&file) {
            Ok(text) => text,
            Err(err) => {
                debug!(
                    target: "gktest::discover",
                    path = %file,
                    error = %err,
                    "skipping unreadable file"
                );
                continue;
            }
        };
        if !gktest_settings::is_suite_document(&text) {
            continue;
        }

        let rel = file.strip_prefix(root).unwrap_or(&file);
        out.push(SuitePath::new(rel.as_str()));
    }

    // Stable order.
    out.sort();
    Ok(out)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
