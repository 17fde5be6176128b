//! CLI command implementations

pub mod config;
pub mod load;
pub mod view_models;

pub use config::config_command;
pub use load::load_command;
pub use view_models::view_models_command;
