// In-Memory Config Repository
//
// 内存配置仓储：未保存过配置时按默认值提供

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::config::domain::AppConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 内存配置仓储（测试与开发用）
pub struct InMemoryConfigRepository {
    config: RwLock<Option<AppConfig>>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self {
            config: RwLock::new(None),
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: RwLock::new(Some(config)),
        }
    }
}

impl Default for InMemoryConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        Ok(self.config.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        *self.config.write().await = Some(config.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        *self.config.write().await = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        Ok(self.config.read().await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_before_save_yields_defaults() {
        let repo = InMemoryConfigRepository::new();

        assert!(!repo.exists().await.unwrap());
        let config = repo.load().await.unwrap();
        assert_eq!(config.planner.retry_backoff_ms, 400);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let repo = InMemoryConfigRepository::new();
        let mut config = AppConfig::default();
        config.planner.timeout_secs = 10;

        repo.save(&config).await.unwrap();

        assert!(repo.exists().await.unwrap());
        assert_eq!(repo.load().await.unwrap().planner.timeout_secs, 10);
    }

    #[tokio::test]
    async fn test_clear_drops_saved_config() {
        let repo = InMemoryConfigRepository::with_config(AppConfig::default());
        assert!(repo.exists().await.unwrap());

        repo.clear().await.unwrap();

        assert!(!repo.exists().await.unwrap());
        assert_eq!(repo.load().await.unwrap().planner.timeout_secs, 5);
    }
}
