mod file_history_repository;
mod in_memory_history_repository;

pub use file_history_repository::FileHistoryRepository;
pub use in_memory_history_repository::InMemoryHistoryRepository;
