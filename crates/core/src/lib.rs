//! SER Core - Shared types library.
//!
//! This crate provides common types used across all SER components:
//! - `api` - HTTP backend serving the chat and admin surfaces
//! - `cli` - Command-line tools for migrations and user provisioning
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, status enums and the chat partner shape

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
