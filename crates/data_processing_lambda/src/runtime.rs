//! Single in-crate boundary for the pure pipeline primitives.

pub use data_processing_core::{contract, error, response, transform, trigger};
