//! Feature state: plain types, reducers and validation, free of Dioxus so they
//! can be tested natively.
//!
//! - **project**: the Theory of Change record, its form panel state and storage
//! - **auth**: the login/registration panel state, validation and submit flow

pub mod auth;
pub mod project;
