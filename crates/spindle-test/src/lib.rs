//! Spindle Test - deterministic spin harness
//!
//! Drives the engine frame by frame the way a host scheduler would, records
//! what happened, and provides preconfigured scenarios for integration
//! tests and benchmarks.

pub mod harness;

pub use harness::*;
