//! Input components for form validation and display

pub mod validated_input;
pub mod validation_feedback;

pub use validated_input::*;
pub use validation_feedback::*;
