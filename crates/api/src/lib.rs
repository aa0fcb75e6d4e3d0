//! SER API library.
//!
//! Session-gated chat and admin backend. The crate is a library so the router
//! can be built in tests against in-memory collaborators.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
