//! Test utilities for Navette services.
//!
//! Provides provider-side webhook signing and payload builders.
//! Import in `[dev-dependencies]` only — never in production code.

pub mod payload;
pub mod sign;
