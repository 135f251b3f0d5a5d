// Chat Application Layer
// CQRS 式用例层：命令承载写路径，查询只读

pub mod commands;
pub mod queries;

pub use commands::*;
pub use queries::*;

use async_trait::async_trait;
use thiserror::Error;

use super::ports::{PlannerError, RepositoryError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Planner error: {0}")]
    PlannerError(#[from] PlannerError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 命令处理器：有副作用的用例入口
#[async_trait]
pub trait CommandHandler<C, R>: Send + Sync
where
    C: Send + Sync,
{
    async fn handle(&self, command: C) -> Result<R, ApplicationError>;
}

/// 查询处理器：只读用例入口
#[async_trait]
pub trait QueryHandler<Q, R>: Send + Sync
where
    Q: Send + Sync,
{
    async fn handle(&self, query: Q) -> Result<R, ApplicationError>;
}
