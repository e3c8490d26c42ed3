//! AWS-oriented adapters and handler for the object transform pipeline.
//!
//! This crate owns runtime integration details (the Lambda handler, store
//! adapter seams) and exposes a single runtime module boundary for the
//! contract, trigger, transform, and response primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
