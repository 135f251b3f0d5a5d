mod config_port;
mod config_repository;

pub use config_port::{ConfigError, ConfigPort};
pub use config_repository::ConfigRepository;
