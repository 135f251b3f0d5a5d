use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::chat::domain::{Classifier, Message};
use crate::modules::chat::ports::{
    HistoryRepository, PlanRequest, PlannerPort, ReplySource,
};

/// 发送消息命令
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// 用户输入文本
    pub text: String,
}

impl SendMessageCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// 发送消息响应
#[derive(Debug, Clone)]
pub struct SendMessageResponse {
    /// 用户消息（已带分类标签）
    pub user_message: Message,
    /// 陪伴回复
    pub ai_message: Message,
    /// 回复来源（远端或本地兜底）
    pub source: ReplySource,
}

/// 发送消息命令处理器
///
/// 响应解析管线：分类 -> 远端规划（适配器内部兜底）-> 情绪归一 -> 入库
pub struct SendMessageHandler {
    history: Arc<dyn HistoryRepository>,
    planner: Arc<dyn PlannerPort>,
    classifier: Classifier,
}

impl SendMessageHandler {
    pub fn new(history: Arc<dyn HistoryRepository>, planner: Arc<dyn PlannerPort>) -> Self {
        Self {
            history,
            planner,
            classifier: Classifier::new(),
        }
    }
}

#[async_trait]
impl CommandHandler<SendMessageCommand, SendMessageResponse> for SendMessageHandler {
    async fn handle(
        &self,
        command: SendMessageCommand,
    ) -> Result<SendMessageResponse, ApplicationError> {
        // 空输入提前拒绝，不发起任何请求
        let text = command.text.trim();
        if text.is_empty() {
            return Err(ApplicationError::ValidationError(
                "Message text cannot be empty".to_string(),
            ));
        }

        // 分类输入
        let classification = self.classifier.classify(text);

        // 保存用户消息
        let user_message =
            Message::new_user(text, classification.emotion, classification.intent);
        self.history.append(&user_message).await?;

        // 请求规划服务
        let reply = self
            .planner
            .plan(PlanRequest::new(text, classification))
            .await?;

        // 服务端情绪优先，缺失时沿用本地检测结果
        let emotion = reply.emotion.unwrap_or(classification.emotion);

        // 保存陪伴回复
        let ai_message = Message::new_ai(&reply.message, emotion);
        self.history.append(&ai_message).await?;

        Ok(SendMessageResponse {
            user_message,
            ai_message,
            source: reply.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::Emotion;
    use crate::modules::chat::infrastructure::InMemoryHistoryRepository;
    use crate::modules::chat::ports::{HealthStatus, PlanReply, PlannerError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock Planner Port for testing
    struct MockPlanner {
        emotion: Option<Emotion>,
        calls: AtomicUsize,
    }

    impl MockPlanner {
        fn new(emotion: Option<Emotion>) -> Self {
            Self {
                emotion,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PlannerPort for MockPlanner {
        async fn plan(&self, _request: PlanRequest) -> Result<PlanReply, PlannerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(PlanReply {
                message: "🌿 One small step is enough.".to_string(),
                emotion: self.emotion,
                source: ReplySource::Remote,
            })
        }

        async fn health_check(&self) -> Result<HealthStatus, PlannerError> {
            Ok(HealthStatus {
                is_healthy: true,
                latency_ms: Some(1),
                error_message: None,
            })
        }
    }

    #[tokio::test]
    async fn test_send_message() {
        let history = Arc::new(InMemoryHistoryRepository::new());
        let planner = Arc::new(MockPlanner::new(None));
        let handler = SendMessageHandler::new(history.clone(), planner);

        let command = SendMessageCommand::new("I'm anxious and fed up");
        let response = handler.handle(command).await.unwrap();

        assert_eq!(response.user_message.text(), "I'm anxious and fed up");
        assert_eq!(response.user_message.emotion(), Some(Emotion::Anxious));
        assert_eq!(response.ai_message.text(), "🌿 One small step is enough.");
        // 服务端未给出情绪时沿用本地检测结果
        assert_eq!(response.ai_message.emotion(), Some(Emotion::Anxious));

        // 验证两条消息均已保存
        assert_eq!(history.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_server_emotion_wins_when_present() {
        let history = Arc::new(InMemoryHistoryRepository::new());
        let planner = Arc::new(MockPlanner::new(Some(Emotion::Hopeful)));
        let handler = SendMessageHandler::new(history, planner);

        let command = SendMessageCommand::new("I'm anxious about everything");
        let response = handler.handle(command).await.unwrap();

        assert_eq!(response.ai_message.emotion(), Some(Emotion::Hopeful));
    }

    #[tokio::test]
    async fn test_send_empty_message_issues_no_request() {
        let history = Arc::new(InMemoryHistoryRepository::new());
        let planner = Arc::new(MockPlanner::new(None));
        let handler = SendMessageHandler::new(history.clone(), planner.clone());

        let command = SendMessageCommand::new("   ");
        let result = handler.handle(command).await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(planner.calls.load(Ordering::SeqCst), 0);
        assert_eq!(history.count().await.unwrap(), 0);
    }
}
