use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::chat::domain::Message;
use crate::modules::chat::ports::{
    HistoryRepository, PaginatedResult, Pagination, RepositoryError, HISTORY_CAP,
};

/// 内存对话日志仓储
///
/// 用于开发和测试，不落盘
pub struct InMemoryHistoryRepository {
    /// 按插入顺序保存的消息
    messages: RwLock<Vec<Message>>,
    /// 首次问候标记
    visited: RwLock<bool>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            visited: RwLock::new(false),
        }
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, message: &Message) -> Result<(), RepositoryError> {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());

        // 超过上限时先进先出淘汰
        while messages.len() > HISTORY_CAP {
            messages.remove(0);
        }

        Ok(())
    }

    async fn list(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResult<Message>, RepositoryError> {
        let messages = self.messages.read().await;

        let total = messages.len();
        let offset = pagination.offset() as usize;
        let limit = pagination.limit as usize;

        let items = if offset < total {
            messages[offset..total.min(offset + limit)].to_vec()
        } else {
            Vec::new()
        };

        Ok(PaginatedResult::new(items, total, pagination))
    }

    async fn last(&self) -> Result<Option<Message>, RepositoryError> {
        let messages = self.messages.read().await;
        Ok(messages.last().cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let messages = self.messages.read().await;
        Ok(messages.len())
    }

    async fn clear(&self) -> Result<usize, RepositoryError> {
        let mut messages = self.messages.write().await;
        let count = messages.len();
        messages.clear();
        Ok(count)
    }

    async fn is_visited(&self) -> Result<bool, RepositoryError> {
        Ok(*self.visited.read().await)
    }

    async fn mark_visited(&self) -> Result<(), RepositoryError> {
        let mut visited = self.visited.write().await;
        *visited = true;
        Ok(())
    }
}
