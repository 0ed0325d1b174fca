pub mod defaults;
pub mod loader;
pub mod validator;

pub use loader::{load_and_validate, load_settings_from_str, LoadError};
pub use validator::{validate_settings, ValidationError};
