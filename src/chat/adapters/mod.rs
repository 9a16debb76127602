//! Adapters for the combined chat ports.
//!
//! # Available Adapters
//!
//! - [`memory`]: Thread-safe in-memory implementations of every port, for
//!   tests and deterministic local flows.

pub mod memory;
