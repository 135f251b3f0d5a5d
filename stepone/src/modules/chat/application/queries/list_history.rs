use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::chat::domain::Message;
use crate::modules::chat::ports::{HistoryRepository, PaginatedResult, Pagination};

/// 列出对话记录查询
#[derive(Debug, Clone)]
pub struct ListHistoryQuery {
    pub page: u32,
    pub limit: u32,
}

impl ListHistoryQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

impl Default for ListHistoryQuery {
    fn default() -> Self {
        Self { page: 1, limit: 50 }
    }
}

/// 列出对话记录响应
#[derive(Debug, Clone)]
pub struct ListHistoryResponse {
    pub messages: Vec<Message>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

impl From<PaginatedResult<Message>> for ListHistoryResponse {
    fn from(result: PaginatedResult<Message>) -> Self {
        let has_more = result.has_next();
        Self {
            messages: result.items,
            total: result.total,
            page: result.page,
            limit: result.limit,
            has_more,
        }
    }
}

/// 列出对话记录查询处理器
pub struct ListHistoryHandler {
    history: Arc<dyn HistoryRepository>,
}

impl ListHistoryHandler {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }
}

#[async_trait]
impl QueryHandler<ListHistoryQuery, ListHistoryResponse> for ListHistoryHandler {
    async fn handle(&self, query: ListHistoryQuery) -> Result<ListHistoryResponse, ApplicationError> {
        let pagination = Pagination::new(query.page, query.limit);
        let result = self.history.list(pagination).await?;

        Ok(result.into())
    }
}
