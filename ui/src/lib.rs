//! This crate contains the pages, components and state for the Theory of Change workspace.

pub mod app;
pub use app::{use_auth_provider, AuthContext, LoginPage, TheoryOfChange};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
