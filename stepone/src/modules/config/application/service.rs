// Config Service
//
// 配置读写的统一入口：更新走 加载 -> 合并 -> 验证 -> 保存

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::modules::config::domain::{AppConfig, PartialAppConfig};
use crate::modules::config::ports::{ConfigError, ConfigPort, ConfigRepository};

/// 配置服务
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }

    /// 获取仓储引用
    pub fn repository(&self) -> &Arc<dyn ConfigRepository> {
        &self.repository
    }
}

#[async_trait]
impl ConfigPort for ConfigService {
    async fn get_all(&self) -> Result<AppConfig, ConfigError> {
        self.repository.load().await
    }

    /// 部分更新：合并进当前配置，验证通过后整体保存
    async fn update(&self, partial: PartialAppConfig) -> Result<AppConfig, ConfigError> {
        let mut config = self.repository.load().await?;
        config.merge(partial);

        config
            .validate()
            .map_err(|errors| ConfigError::ValidationError { errors })?;

        self.repository.save(&config).await?;
        debug!("Config updated");

        Ok(config)
    }

    /// 清除已保存的配置，回到默认值
    async fn reset(&self) -> Result<AppConfig, ConfigError> {
        self.repository.clear().await?;
        self.repository.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::domain::PartialPlannerConfig;
    use crate::modules::config::infrastructure::InMemoryConfigRepository;

    fn service_with_memory_repo() -> ConfigService {
        ConfigService::new(Arc::new(InMemoryConfigRepository::new()))
    }

    #[tokio::test]
    async fn test_get_all_returns_defaults_when_unset() {
        let service = service_with_memory_repo();

        let config = service.get_all().await.unwrap();
        assert_eq!(config.planner.timeout_secs, 5);
        assert_eq!(config.planner.retry_backoff_ms, 400);
    }

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let service = service_with_memory_repo();

        let updated = service
            .update(PartialAppConfig {
                planner: Some(PartialPlannerConfig {
                    base_url: Some("http://plan.example.com".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.planner.base_url, "http://plan.example.com");
        // 未更新的字段保持默认值
        assert_eq!(updated.planner.timeout_secs, 5);

        let reloaded = service.get_all().await.unwrap();
        assert_eq!(reloaded.planner.base_url, "http://plan.example.com");
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_config() {
        let service = service_with_memory_repo();

        let result = service
            .update(PartialAppConfig {
                planner: Some(PartialPlannerConfig {
                    timeout_secs: Some(0),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));

        // 非法更新不应落库
        let config = service.get_all().await.unwrap();
        assert_eq!(config.planner.timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let service = service_with_memory_repo();

        service
            .update(PartialAppConfig {
                planner: Some(PartialPlannerConfig {
                    timeout_secs: Some(10),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await
            .unwrap();

        let reset = service.reset().await.unwrap();
        assert_eq!(reset.planner.timeout_secs, 5);
        assert_eq!(reset.planner.base_url, "http://127.0.0.1:8000");
    }
}
