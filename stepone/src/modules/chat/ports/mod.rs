mod history_repository;
mod planner_port;

pub use history_repository::{
    HistoryRepository, PaginatedResult, Pagination, RepositoryError, HISTORY_CAP,
};
pub use planner_port::{
    HealthStatus, PlanReply, PlanRequest, PlannerError, PlannerPort, PlannerSettings, ReplySource,
};
