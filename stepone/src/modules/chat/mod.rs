// Chat Module - 对话模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含实体、值对象和领域服务
// - ports: 端口层，定义与外部世界的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    // Traits
    ApplicationError,
    ClearHistoryCommand,
    ClearHistoryHandler,
    ClearHistoryResponse,
    CommandHandler,
    ListHistoryHandler,
    ListHistoryQuery,
    ListHistoryResponse,
    QueryHandler,
    SendMessageCommand,
    SendMessageHandler,
    SendMessageResponse,
};

pub use domain::{Classification, Classifier, Emotion, Intent, Message, MessageId, MessageRole};

pub use infrastructure::{
    FileHistoryRepository, InMemoryHistoryRepository, RemotePlanner, TemplateStore,
};

pub use ports::{
    HealthStatus, HistoryRepository, PaginatedResult, Pagination, PlanReply, PlanRequest,
    PlannerError, PlannerPort, PlannerSettings, RepositoryError, ReplySource, HISTORY_CAP,
};

use std::sync::Arc;

/// Chat 模块容器
///
/// 管理模块内的依赖注入
pub struct ChatModule {
    // Repository
    history: Arc<dyn HistoryRepository>,
    // Planner
    planner: Arc<dyn PlannerPort>,
    // Handlers
    send_message_handler: SendMessageHandler,
    clear_history_handler: ClearHistoryHandler,
    list_history_handler: ListHistoryHandler,
}

impl ChatModule {
    /// 创建新的 ChatModule 实例（内存存储，用于开发测试）
    pub fn new(planner: Arc<dyn PlannerPort>) -> Self {
        let history: Arc<dyn HistoryRepository> = Arc::new(InMemoryHistoryRepository::new());

        Self::with_parts(history, planner)
    }

    /// 创建带持久化存储的 ChatModule 实例（生产环境推荐）
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    /// * `planner` - 规划服务适配器
    ///
    /// # Errors
    /// 如果无法初始化文件存储，返回错误
    pub async fn new_with_persistence(
        data_dir: std::path::PathBuf,
        planner: Arc<dyn PlannerPort>,
    ) -> Result<Self, RepositoryError> {
        let history: Arc<dyn HistoryRepository> =
            Arc::new(FileHistoryRepository::new(data_dir).await?);

        Ok(Self::with_parts(history, planner))
    }

    /// 使用自定义仓储与规划服务创建 ChatModule
    pub fn with_parts(history: Arc<dyn HistoryRepository>, planner: Arc<dyn PlannerPort>) -> Self {
        let send_message_handler = SendMessageHandler::new(history.clone(), planner.clone());
        let clear_history_handler = ClearHistoryHandler::new(history.clone());
        let list_history_handler = ListHistoryHandler::new(history.clone());

        Self {
            history,
            planner,
            send_message_handler,
            clear_history_handler,
            list_history_handler,
        }
    }

    // Command handlers

    /// 发送消息并解析回复
    pub async fn send_message(
        &self,
        command: SendMessageCommand,
    ) -> Result<SendMessageResponse, ApplicationError> {
        self.send_message_handler.handle(command).await
    }

    /// 清空对话记录
    pub async fn clear_history(
        &self,
        command: ClearHistoryCommand,
    ) -> Result<ClearHistoryResponse, ApplicationError> {
        self.clear_history_handler.handle(command).await
    }

    // Query handlers

    /// 列出对话记录
    pub async fn list_history(
        &self,
        query: ListHistoryQuery,
    ) -> Result<ListHistoryResponse, ApplicationError> {
        self.list_history_handler.handle(query).await
    }

    // 首次问候标记

    /// 是否已经访问过
    pub async fn is_visited(&self) -> Result<bool, ApplicationError> {
        Ok(self.history.is_visited().await?)
    }

    /// 记录已访问
    pub async fn mark_visited(&self) -> Result<(), ApplicationError> {
        Ok(self.history.mark_visited().await?)
    }

    /// 规划服务健康检查
    pub async fn planner_health(&self) -> Result<HealthStatus, ApplicationError> {
        Ok(self.planner.health_check().await?)
    }

    // Accessors

    /// 获取对话日志仓储
    pub fn history(&self) -> &Arc<dyn HistoryRepository> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubPlanner;

    #[async_trait]
    impl PlannerPort for StubPlanner {
        async fn plan(&self, request: PlanRequest) -> Result<PlanReply, PlannerError> {
            Ok(PlanReply {
                message: format!("echo: {}", request.text),
                emotion: None,
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
    async fn test_chat_module_integration() {
        let module = ChatModule::new(Arc::new(StubPlanner));

        // 首次访问标记
        assert!(!module.is_visited().await.unwrap());
        module.mark_visited().await.unwrap();
        assert!(module.is_visited().await.unwrap());

        // 发送消息
        let response = module
            .send_message(SendMessageCommand::new("hello"))
            .await
            .unwrap();
        assert_eq!(response.ai_message.text(), "echo: hello");

        // 列出记录
        let list = module.list_history(ListHistoryQuery::default()).await.unwrap();
        assert_eq!(list.total, 2);

        // 清空记录
        let cleared = module.clear_history(ClearHistoryCommand).await.unwrap();
        assert_eq!(cleared.deleted_messages, 2);

        let list = module.list_history(ListHistoryQuery::default()).await.unwrap();
        assert_eq!(list.total, 0);
    }
}
