use std::sync::Arc;
use tokio::sync::RwLock;

/// 应用全局状态
///
/// 注意:对话记录由 ChatModule 管理，这里只保留应用级别的状态
pub struct AppState {
    /// 规划服务是否可达（用于在线/离线提示）
    pub online: Arc<RwLock<bool>>,
    /// 是否有请求在途（在途期间禁用发送）
    pub sending: Arc<RwLock<bool>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            online: Arc::new(RwLock::new(true)),
            sending: Arc::new(RwLock::new(false)),
        }
    }

    /// 尝试占用发送通道，已有请求在途时返回 false
    pub async fn begin_send(&self) -> bool {
        let mut sending = self.sending.write().await;
        if *sending {
            return false;
        }
        *sending = true;
        true
    }

    /// 释放发送通道
    pub async fn end_send(&self) {
        let mut sending = self.sending.write().await;
        *sending = false;
    }

    pub async fn is_online(&self) -> bool {
        *self.online.read().await
    }

    pub async fn set_online(&self, online: bool) {
        let mut flag = self.online.write().await;
        *flag = online;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
