//! Integration tests for bootstrap-venv
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! They are slower and should be run separately from unit tests.

#[cfg(unix)]
mod end_to_end;
#[cfg(unix)]
mod support;
