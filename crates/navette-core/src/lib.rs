//! Shared service plumbing for Navette services.
//!
//! Health endpoints, the request-id layer, and tracing initialization.
//! Domain logic never lives here.

pub mod health;
pub mod middleware;
pub mod tracing;
