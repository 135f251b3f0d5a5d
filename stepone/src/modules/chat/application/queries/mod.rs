mod list_history;

pub use list_history::{ListHistoryHandler, ListHistoryQuery, ListHistoryResponse};
