mod clear_history;
mod send_message;

pub use clear_history::{ClearHistoryCommand, ClearHistoryHandler, ClearHistoryResponse};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResponse};
