//! Infrastructure Services
//!
//! - **client**: remote authentication API client and the session holder
//! - **config**: limits, API location and storage keys
//! - **errors**: browser storage error types
//!
//! The services are WASM-first, using browser APIs and async traits without
//! Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
