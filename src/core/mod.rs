//! Core types for mcpsync
//!
//! This module holds the vocabulary shared by every other part of the crate:
//!
//! - [`SyncError`] and [`ErrorContext`] - typed failures and their user-facing rendering
//! - [`Tool`] - the closed set of coding tools mcpsync knows how to talk to
//!
//! Higher level modules ([`crate::mcp`], [`crate::cli`]) build on these without adding
//! their own error types.

pub mod error;
pub mod tool;

pub use error::{ErrorContext, SyncError, user_friendly_error};
pub use tool::Tool;
