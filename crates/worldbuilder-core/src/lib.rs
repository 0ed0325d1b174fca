pub mod constants;
pub mod math;
pub mod settings;
pub mod types;
