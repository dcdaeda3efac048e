//! Shared test utilities for the gktest workspace.
//!
//! The runner needs a real [`RuleClient`](gktest_client::RuleClient) to be
//! exercised end to end, and the app crate's integration tests live outside
//! `#[cfg(test)]`, so the fixture backend lives in its own crate.

mod client;
pub mod fixtures;
mod outline;
mod provider;

pub use client::{FixtureClient, RejectingClient, new_fixture_client};
pub use outline::{CaseOutline, TestOutline, outline, without_runtime};
pub use provider::{CountingFileProvider, FailingFileProvider, InspectingFileProvider};
