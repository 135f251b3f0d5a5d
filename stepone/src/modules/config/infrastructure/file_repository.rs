// File-based Config Repository
//
// JSON 文件配置仓储：首次读取后缓存在内存，保存时同步刷新缓存

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::modules::config::domain::AppConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

const CONFIG_FILE_NAME: &str = "config.json";

/// 文件配置仓储
pub struct FileConfigRepository {
    config_path: PathBuf,
    cache: RwLock<Option<AppConfig>>,
}

impl FileConfigRepository {
    /// 创建新的文件配置仓储
    ///
    /// # Arguments
    /// * `app_data_dir` - 应用数据目录
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            config_path: app_data_dir.join(CONFIG_FILE_NAME),
            cache: RwLock::new(None),
        }
    }

    /// 读取配置文件，文件不存在时返回 None
    async fn read_file(&self) -> Result<Option<AppConfig>, ConfigError> {
        match tokio::fs::read_to_string(&self.config_path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::StorageError(e.to_string())),
        }
    }

    async fn write_file(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        tokio::fs::write(&self.config_path, content)
            .await
            .map_err(|e| ConfigError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl ConfigRepository for FileConfigRepository {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if let Some(config) = self.cache.read().await.clone() {
            return Ok(config);
        }

        let config = self.read_file().await?.unwrap_or_default();
        *self.cache.write().await = Some(config.clone());

        Ok(config)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.write_file(config).await?;
        *self.cache.write().await = Some(config.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        match tokio::fs::remove_file(&self.config_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::StorageError(e.to_string())),
        }

        *self.cache.write().await = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        Ok(self.config_path.exists())
    }
}
