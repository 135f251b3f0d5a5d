mod event_bus;
mod state;

pub use event_bus::{AppEvent, EventBus};
pub use state::AppState;
