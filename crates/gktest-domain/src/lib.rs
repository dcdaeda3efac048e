//! Pure suite model and assertion matching (no IO).
//!
//! Input: a suite config tree constructed elsewhere, plus the violation messages a
//! Rule Client produced for one case.
//! Output: pass, or the [`gktest_types::VerifyError`] describing why the case failed.

#![forbid(unsafe_code)]

pub mod assertion;
pub mod filter;
pub mod model;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use assertion::{check_case, Expectation};
pub use filter::Filter;
