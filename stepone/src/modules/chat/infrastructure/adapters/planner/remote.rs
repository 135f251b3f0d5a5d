// Remote Planner Adapter - StepOne 规划端点
//
// POST /api/plan 的 HTTP 适配器：请求超时中止，退避后重试一次，
// 重试仍失败时转入本地模板兜底，错误不向上传播

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::modules::chat::domain::Emotion;
use crate::modules::chat::infrastructure::TemplateStore;
use crate::modules::chat::ports::{
    HealthStatus, PlanReply, PlanRequest, PlannerError, PlannerPort, PlannerSettings, ReplySource,
};

/// 规划请求报文
#[derive(Debug, Serialize)]
struct PlanRequestBody {
    text: String,
    emotion: String,
    intent: String,
}

/// 规划响应报文
#[derive(Debug, Deserialize)]
struct PlanResponseBody {
    message: String,
    emotion: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// 远端规划适配器
pub struct RemotePlanner {
    settings: PlannerSettings,
    client: Client,
    templates: TemplateStore,
}

impl RemotePlanner {
    pub fn new(settings: PlannerSettings) -> Result<Self, PlannerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| PlannerError::NetworkError(e.to_string()))?;

        Ok(Self {
            settings,
            client,
            templates: TemplateStore::new(),
        })
    }

    /// 获取 API URL
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// 单次请求，超时与非 2xx 均视为失败
    async fn request_once(&self, request: &PlanRequest) -> Result<PlanReply, PlannerError> {
        let body = PlanRequestBody {
            text: request.text.clone(),
            emotion: request.classification.emotion.to_string(),
            intent: request.classification.intent.to_string(),
        };

        debug!(
            "Sending plan request: emotion={}, intent={}",
            body.emotion, body.intent
        );

        let response = self
            .client
            .post(self.api_url("api/plan"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlannerError::Timeout(self.settings.timeout_secs)
                } else {
                    PlannerError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Planning API error: {} - {}", status, error_text);
            return Err(PlannerError::ApiError {
                code: status.as_str().to_string(),
                message: error_text,
            });
        }

        let parsed: PlanResponseBody = response
            .json()
            .await
            .map_err(|e| PlannerError::InvalidResponse(e.to_string()))?;

        if let Some(tags) = &parsed.tags {
            debug!("Plan reply tags: {:?}", tags);
        }

        // 无法解析的情绪标签按缺失处理，下游会改用本地检测结果
        let emotion = parsed
            .emotion
            .as_deref()
            .and_then(|s| s.parse::<Emotion>().ok());

        Ok(PlanReply {
            message: parsed.message,
            emotion,
            source: ReplySource::Remote,
        })
    }

    /// 本地模板兜底回复
    fn local_reply(&self, request: &PlanRequest) -> PlanReply {
        let classification = request.classification;
        PlanReply {
            message: self
                .templates
                .generate(classification.emotion, classification.intent),
            emotion: None,
            source: ReplySource::Local,
        }
    }
}

#[async_trait]
impl PlannerPort for RemotePlanner {
    async fn plan(&self, request: PlanRequest) -> Result<PlanReply, PlannerError> {
        match self.request_once(&request).await {
            Ok(reply) => Ok(reply),
            Err(first_err) => {
                warn!("Planning request failed: {}, retrying once", first_err);
                tokio::time::sleep(Duration::from_millis(self.settings.retry_backoff_ms)).await;

                match self.request_once(&request).await {
                    Ok(reply) => Ok(reply),
                    Err(retry_err) => {
                        warn!(
                            "Planning retry failed: {}, falling back to local templates",
                            retry_err
                        );
                        Ok(self.local_reply(&request))
                    }
                }
            }
        }
    }

    async fn health_check(&self) -> Result<HealthStatus, PlannerError> {
        let start = std::time::Instant::now();

        match self.client.get(self.api_url("")).send().await {
            Ok(response) => {
                let latency = start.elapsed().as_millis() as u64;
                if response.status().is_success() || response.status().is_redirection() {
                    Ok(HealthStatus {
                        is_healthy: true,
                        latency_ms: Some(latency),
                        error_message: None,
                    })
                } else {
                    Ok(HealthStatus {
                        is_healthy: false,
                        latency_ms: Some(latency),
                        error_message: Some(format!("API returned {}", response.status())),
                    })
                }
            }
            Err(e) => Ok(HealthStatus {
                is_healthy: false,
                latency_ms: None,
                error_message: Some(e.to_string()),
            }),
        }
    }
}
