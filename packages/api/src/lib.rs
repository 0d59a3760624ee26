//! # seafront-api
//!
//! Wire-level types for the Seafile v2 REST API.
//!
//! This crate holds the serde representations of the JSON payloads the
//! server exchanges, plus the status-code diagnostics table. It performs no
//! I/O; the `seafront-client` crate drives the actual HTTP calls.

pub mod status;
pub mod types;

pub use types::{AuthToken, Dirent, DirentKind, LibraryInfo};
