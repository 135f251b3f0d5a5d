pub mod chat;
pub mod config;

pub use chat::ChatModule;
pub use config::ConfigModule;
