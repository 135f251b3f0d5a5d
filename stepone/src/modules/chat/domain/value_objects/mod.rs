mod emotion;
mod intent;
mod message_id;

pub use emotion::Emotion;
pub use intent::Intent;
pub use message_id::MessageId;
