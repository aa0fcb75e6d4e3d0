//! Core types for SER.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod partner;
pub mod status;

pub use id::*;
pub use partner::Partner;
pub use status::*;
