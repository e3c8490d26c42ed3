//! Shared transform pipeline domain primitives.
//!
//! This crate owns the trigger contract, the transform business rule, the
//! error taxonomy, and response shaping. It intentionally excludes AWS SDK
//! and Lambda runtime concerns.

pub mod contract;
pub mod error;
pub mod response;
pub mod transform;
pub mod trigger;
