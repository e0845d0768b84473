//! Health Assessment backend
//!
//! HTTP surface over the shared engines. Exposed as a library so the
//! integration tests can build the router in-process.

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
