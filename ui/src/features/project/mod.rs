pub mod form_validation;
pub mod storage;
pub mod types;

pub use form_validation::*;
pub use storage::ProjectStore;
pub use types::*;
