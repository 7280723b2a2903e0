pub mod auth_context;
pub mod login_page;
pub mod theory_of_change;

pub use auth_context::{use_auth_provider, AuthContext};
pub use login_page::LoginPage;
pub use theory_of_change::TheoryOfChange;
