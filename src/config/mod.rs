//! Settings file loading and validation.
mod loader;
mod manager;
mod types;

pub use loader::load_resource_mapping;
pub use manager::ConfigManager;
pub use types::{
    CONFIG_FILE_NAME,
    ConfigError,
    MatrixSettings,
    ValidationError,
};
