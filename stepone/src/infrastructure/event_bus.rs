use tokio::sync::broadcast;

use crate::modules::chat::domain::{Emotion, MessageId};
use crate::modules::chat::ports::ReplySource;

#[derive(Clone, Debug)]
pub enum AppEvent {
    ReplyResolved {
        message_id: MessageId,
        emotion: Emotion,
        source: ReplySource,
    },
    FallbackEngaged,
    ConnectivityChanged {
        online: bool,
    },
    HistoryCleared {
        deleted_messages: usize,
    },
}

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    pub fn publish(&self, event: AppEvent) {
        tracing::debug!("[EventBus] Publishing event: {:?}", event);
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_and_subscribe() {
        let bus = EventBus::new();
        let mut receiver = bus.subscribe();

        bus.publish(AppEvent::ConnectivityChanged { online: false });

        match receiver.recv().await.unwrap() {
            AppEvent::ConnectivityChanged { online } => assert!(!online),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_noop() {
        let bus = EventBus::new();
        // 没有订阅者时发布不应 panic
        bus.publish(AppEvent::FallbackEngaged);
    }
}
