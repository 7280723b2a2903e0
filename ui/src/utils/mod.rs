//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: shared field checks (email shape, blank values, character length)

pub mod console_macros;
pub mod validation;

pub use validation::*;
