//! Repository adapters: read files referenced by suites, discover suite files.
//!
//! This crate is allowed to do filesystem IO. The runner only ever sees the
//! [`FileProvider`] trait, so suites can equally be run from memory.

#![forbid(unsafe_code)]

mod discover;
mod provider;

pub use discover::discover_suites;
pub use provider::{DirFileProvider, FileProvider, FsError, MapFileProvider};
