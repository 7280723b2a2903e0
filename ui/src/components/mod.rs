//! User Interface Components
//!
//! Reusable Dioxus components:
//!
//! - **forms**: the Theory of Change form panel and the login/registration panel
//! - **display**: progress bar and the read-only Theory of Change preview
//! - **input**: inputs, textareas and their error/warning feedback

pub mod display;
pub mod forms;
pub mod input;
