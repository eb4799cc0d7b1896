//! Unit tests for bootstrap-venv
//!
//! These tests use mocked process and network ports and run against a
//! temporary directory; no external programs or network access.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod helpers;
