pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{Message, MessageRole};
pub use services::{Classification, Classifier};
pub use value_objects::{Emotion, Intent, MessageId};
