use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::chat::ports::HistoryRepository;

/// 清空对话命令
#[derive(Debug, Clone)]
pub struct ClearHistoryCommand;

/// 清空对话响应
#[derive(Debug, Clone)]
pub struct ClearHistoryResponse {
    /// 被删除的消息数量
    pub deleted_messages: usize,
}

/// 清空对话命令处理器
pub struct ClearHistoryHandler {
    history: Arc<dyn HistoryRepository>,
}

impl ClearHistoryHandler {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }
}

#[async_trait]
impl CommandHandler<ClearHistoryCommand, ClearHistoryResponse> for ClearHistoryHandler {
    async fn handle(
        &self,
        _command: ClearHistoryCommand,
    ) -> Result<ClearHistoryResponse, ApplicationError> {
        let deleted_messages = self.history.clear().await?;

        Ok(ClearHistoryResponse { deleted_messages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{Emotion, Intent, Message};
    use crate::modules::chat::infrastructure::InMemoryHistoryRepository;

    #[tokio::test]
    async fn test_clear_history() {
        let history = Arc::new(InMemoryHistoryRepository::new());

        for _ in 0..4 {
            let msg = Message::new_user("Test", Emotion::Healing, Intent::Other);
            history.append(&msg).await.unwrap();
        }

        let handler = ClearHistoryHandler::new(history.clone());
        let response = handler.handle(ClearHistoryCommand).await.unwrap();

        assert_eq!(response.deleted_messages, 4);
        assert_eq!(history.count().await.unwrap(), 0);
    }
}
