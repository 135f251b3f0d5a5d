// Config Module
//
// 配置管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含配置实体和值对象
// - ports: 端口层，定义配置读写的抽象接口
// - infrastructure: 基础设施层，实现具体的配置存储适配器
// - application: 应用层，提供配置服务门面

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{
    AppConfig, ColorMode, GeneralConfig, HistoryConfig, PartialAppConfig, PartialGeneralConfig,
    PartialHistoryConfig, PartialPlannerConfig, PlannerConfig,
};

// Ports
pub use ports::{ConfigError, ConfigPort, ConfigRepository};

// Infrastructure
pub use infrastructure::{FileConfigRepository, InMemoryConfigRepository};

// Application
pub use application::ConfigService;

use std::sync::Arc;

/// Config 模块容器
///
/// 管理模块内的依赖注入
pub struct ConfigModule {
    service: ConfigService,
}

impl ConfigModule {
    /// 使用内存仓储创建（用于测试）
    pub fn new_in_memory() -> Self {
        let repository = Arc::new(InMemoryConfigRepository::new());
        Self {
            service: ConfigService::new(repository),
        }
    }

    /// 使用文件存储创建
    pub fn new_with_store(app_data_dir: std::path::PathBuf) -> Self {
        let repository = Arc::new(FileConfigRepository::new(app_data_dir));
        Self {
            service: ConfigService::new(repository),
        }
    }

    /// 使用自定义仓储创建
    pub fn with_repository(repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            service: ConfigService::new(repository),
        }
    }

    /// 获取配置服务
    pub fn service(&self) -> &ConfigService {
        &self.service
    }

    /// 获取全部配置
    pub async fn get_all(&self) -> Result<AppConfig, ConfigError> {
        self.service.get_all().await
    }

    /// 更新配置
    pub async fn update(&self, partial: PartialAppConfig) -> Result<AppConfig, ConfigError> {
        self.service.update(partial).await
    }

    /// 重置配置
    pub async fn reset(&self) -> Result<AppConfig, ConfigError> {
        self.service.reset().await
    }
}
