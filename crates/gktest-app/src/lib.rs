//! Use case orchestration for gktest.
//!
//! This crate provides the application layer: the [`Runner`] that folds a suite
//! config tree into a result tree, and the `verify` use case that discovers and
//! runs suite files. It delegates matching to the domain crate, file access to
//! the repo crate, and policy evaluation to an injected Rule Client.

#![forbid(unsafe_code)]

mod context;
mod evaluate;
mod loader;
mod runner;
mod verify;

pub use context::RunContext;
pub use runner::Runner;
pub use verify::{run_verify, SuiteOutcome, VerifyInput, VerifyOutput};
