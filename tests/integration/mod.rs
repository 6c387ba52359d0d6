//! Integration test suite for mcpsync
//!
//! End-to-end tests that run the compiled `mcpsync` binary against a temporary
//! project and home directory.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: help, version, global flags, placeholder commands
//! - **generate**: canonical file fan-out, tool selection, multiple base directories
//! - **import**: tool sources, merging, prefixing, error reporting

mod cli;
mod common;
mod generate;
mod import;
