// Config Domain Entities
//
// 配置领域实体定义

use serde::{Deserialize, Serialize};

use super::value_objects::ColorMode;

/// 通用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeneralConfig {
    pub color_mode: ColorMode,
}

/// 规划服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub retry_backoff_ms: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 5,
            retry_backoff_ms: 400,
        }
    }
}

/// 对话记录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryConfig {
    /// 启动时回放的消息条数
    pub replay_count: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { replay_count: 10 }
    }
}

/// 应用配置聚合根
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub planner: PlannerConfig,
    pub history: HistoryConfig,
}

impl AppConfig {
    /// 创建新的默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并部分配置更新
    pub fn merge(&mut self, partial: PartialAppConfig) {
        if let Some(general) = partial.general {
            if let Some(color_mode) = general.color_mode {
                self.general.color_mode = color_mode;
            }
        }

        if let Some(planner) = partial.planner {
            if let Some(base_url) = planner.base_url {
                self.planner.base_url = base_url;
            }
            if let Some(timeout_secs) = planner.timeout_secs {
                self.planner.timeout_secs = timeout_secs;
            }
            if let Some(retry_backoff_ms) = planner.retry_backoff_ms {
                self.planner.retry_backoff_ms = retry_backoff_ms;
            }
        }

        if let Some(history) = partial.history {
            if let Some(replay_count) = history.replay_count {
                self.history.replay_count = replay_count;
            }
        }
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.planner.base_url.trim().is_empty() {
            errors.push("Planner base URL must not be empty".to_string());
        }

        if self.planner.timeout_secs == 0 || self.planner.timeout_secs > 60 {
            errors.push("Planner timeout must be between 1 and 60 seconds".to_string());
        }

        if self.planner.retry_backoff_ms > 5000 {
            errors.push("Retry backoff must not exceed 5000 ms".to_string());
        }

        if self.history.replay_count == 0 || self.history.replay_count > 200 {
            errors.push("History replay count must be between 1 and 200".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 部分配置更新（用于合并）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialAppConfig {
    pub general: Option<PartialGeneralConfig>,
    pub planner: Option<PartialPlannerConfig>,
    pub history: Option<PartialHistoryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialGeneralConfig {
    pub color_mode: Option<ColorMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialPlannerConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub retry_backoff_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialHistoryConfig {
    pub replay_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.general.color_mode, ColorMode::Auto);
        assert_eq!(config.planner.timeout_secs, 5);
        assert_eq!(config.planner.retry_backoff_ms, 400);
    }

    #[test]
    fn test_app_config_merge() {
        let mut config = AppConfig::default();
        let partial = PartialAppConfig {
            planner: Some(PartialPlannerConfig {
                base_url: Some("http://plan.example.com".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        config.merge(partial);
        assert_eq!(config.planner.base_url, "http://plan.example.com");
        // 其他字段保持不变
        assert_eq!(config.planner.timeout_secs, 5);
    }

    #[test]
    fn test_app_config_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.planner.timeout_secs = 0;
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.history.replay_count = 0;
        assert!(invalid_config.validate().is_err());
    }
}
