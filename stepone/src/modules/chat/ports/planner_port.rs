use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::super::domain::{Classification, Emotion};

/// 规划服务错误类型
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {code} - {message}")]
    ApiError { code: String, message: String },

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 回复来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// 远端规划服务
    Remote,
    /// 本地模板兜底
    Local,
}

/// 规划请求
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// 用户原始文本
    pub text: String,
    /// 分类结果
    pub classification: Classification,
}

impl PlanRequest {
    pub fn new(text: impl Into<String>, classification: Classification) -> Self {
        Self {
            text: text.into(),
            classification,
        }
    }
}

/// 规划回复
#[derive(Debug, Clone)]
pub struct PlanReply {
    /// 回复内容
    pub message: String,
    /// 服务端给出的情绪标签（缺失或无法解析时为 None）
    pub emotion: Option<Emotion>,
    /// 回复来源
    pub source: ReplySource,
}

/// 健康状态
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub is_healthy: bool,
    pub latency_ms: Option<u64>,
    pub error_message: Option<String>,
}

/// 规划端点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub retry_backoff_ms: u64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 5,
            retry_backoff_ms: 400,
        }
    }
}

/// 规划服务端口 - 核心抽象接口
///
/// 对 `RemotePlanner` 而言 `plan` 永不失败：远端出错时在内部
/// 退回本地模板生成，错误不向上传播
#[async_trait]
pub trait PlannerPort: Send + Sync {
    /// 解析一条用户输入，返回陪伴回复
    async fn plan(&self, request: PlanRequest) -> Result<PlanReply, PlannerError>;

    /// 健康检查（用于启动时的在线/离线提示）
    async fn health_check(&self) -> Result<HealthStatus, PlannerError>;
}
