pub mod form_panel;
pub mod login_form;

pub use form_panel::*;
pub use login_form::*;
