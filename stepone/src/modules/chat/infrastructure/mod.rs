pub mod adapters;
pub mod repositories;
mod templates;

pub use adapters::RemotePlanner;
pub use repositories::{FileHistoryRepository, InMemoryHistoryRepository};
pub use templates::TemplateStore;
