//! Domain model shared by the directory client and its front ends.

pub mod domain;
pub mod error;
pub mod filter;
pub mod format;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
