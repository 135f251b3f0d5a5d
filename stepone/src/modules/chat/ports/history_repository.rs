use async_trait::async_trait;
use thiserror::Error;

use super::super::domain::Message;

/// 对话日志的容量上限，超过后按先进先出淘汰
pub const HISTORY_CAP: usize = 200;

/// 仓储错误类型
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 分页参数
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn offset(&self) -> u32 {
        (self.page.saturating_sub(1)) * self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// 分页结果
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: usize, pagination: Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            limit: pagination.limit,
        }
    }

    pub fn has_next(&self) -> bool {
        (self.page as usize * self.limit as usize) < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// 对话日志仓储端口
///
/// 单条有界对话日志的持久化抽象：只追加，保持插入顺序，
/// 超过 [`HISTORY_CAP`] 时淘汰最旧的一条
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// 追加一条消息，必要时先淘汰最旧的消息
    async fn append(&self, message: &Message) -> Result<(), RepositoryError>;

    /// 按插入顺序分页读取
    async fn list(&self, pagination: Pagination)
        -> Result<PaginatedResult<Message>, RepositoryError>;

    /// 获取最后一条消息
    async fn last(&self) -> Result<Option<Message>, RepositoryError>;

    /// 获取消息数量
    async fn count(&self) -> Result<usize, RepositoryError>;

    /// 清空对话日志
    async fn clear(&self) -> Result<usize, RepositoryError>;

    /// 是否已经访问过（首次问候标记）
    async fn is_visited(&self) -> Result<bool, RepositoryError>;

    /// 记录已访问
    async fn mark_visited(&self) -> Result<(), RepositoryError>;
}
