pub mod cli;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use cli::Repl;
use infrastructure::{AppState, EventBus};
use modules::chat::{ChatModule, PlannerPort, PlannerSettings, RemotePlanner};
use modules::config::AppConfig;
use modules::ConfigModule;

pub fn run() {
    // 初始化日志（写到 stderr，避免干扰会话输出）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    tracing::info!("StepOne starting...");

    let runtime = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    let app_state = Arc::new(AppState::new());
    let event_bus = Arc::new(EventBus::new());

    // 获取应用数据目录
    let data_dir = dirs::data_dir()
        .map(|dir| dir.join("stepone"))
        .unwrap_or_else(|| std::path::PathBuf::from(".stepone"));

    tracing::info!("App data directory: {:?}", data_dir);

    // 初始化 Config 模块（使用文件存储）
    let config_module = ConfigModule::new_with_store(data_dir.clone());
    let config = runtime
        .block_on(config_module.get_all())
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            AppConfig::default()
        });

    cli::theme::init_colors(config.general.color_mode);

    // 初始化规划服务适配器
    let planner_settings = PlannerSettings {
        base_url: config.planner.base_url.clone(),
        timeout_secs: config.planner.timeout_secs,
        retry_backoff_ms: config.planner.retry_backoff_ms,
    };
    let planner: Arc<dyn PlannerPort> = Arc::new(
        RemotePlanner::new(planner_settings).expect("failed to construct planner HTTP client"),
    );

    // 初始化 Chat 模块（使用持久化存储）
    let chat_module = runtime.block_on(async {
        match ChatModule::new_with_persistence(data_dir.clone(), planner.clone()).await {
            Ok(module) => {
                tracing::info!("Chat module initialized with persistent storage");
                module
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize persistent storage: {}, falling back to memory",
                    e
                );
                ChatModule::new(planner.clone())
            }
        }
    });

    let repl = Repl::new(
        Arc::new(chat_module),
        app_state,
        event_bus,
        config.history.replay_count,
    );

    if let Err(e) = repl.run(&runtime) {
        tracing::error!("Session ended with error: {}", e);
    }
}
