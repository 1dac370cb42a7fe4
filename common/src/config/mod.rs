mod config_content_provider;
mod config_manager;
mod config_serializer;
mod solver_config;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use solver_config::{SolverConfig, MAX_BOARD_SIZE};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
