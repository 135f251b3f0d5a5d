// 文件持久化对话日志仓储实现
//
// 使用单个 JSON 文件存储消息列表和首次问候标记，
// 每次变更后整体重写落盘

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::modules::chat::domain::Message;
use crate::modules::chat::ports::{
    HistoryRepository, PaginatedResult, Pagination, RepositoryError, HISTORY_CAP,
};

const HISTORY_FILE_NAME: &str = "history.json";

/// 持久化数据结构
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct HistoryStore {
    /// 按插入顺序保存的消息
    messages: Vec<Message>,
    /// 首次问候标记
    visited: bool,
}

/// 文件持久化对话日志仓储
pub struct FileHistoryRepository {
    store: RwLock<HistoryStore>,
    file_path: PathBuf,
}

impl FileHistoryRepository {
    /// 创建新的文件对话日志仓储
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    pub async fn new(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let file_path = data_dir.join(HISTORY_FILE_NAME);

        // 确保目录存在
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        }

        // 尝试加载现有数据
        let store = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

            serde_json::from_str(&content).unwrap_or_default()
        } else {
            HistoryStore::default()
        };

        Ok(Self {
            store: RwLock::new(store),
            file_path,
        })
    }

    /// 将数据持久化到文件
    async fn persist(&self) -> Result<(), RepositoryError> {
        let store = self.store.read().await;
        let content = serde_json::to_string_pretty(&*store)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&self.file_path, content)
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryRepository {
    async fn append(&self, message: &Message) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            store.messages.push(message.clone());

            // 超过上限时先进先出淘汰
            while store.messages.len() > HISTORY_CAP {
                store.messages.remove(0);
            }
        }
        self.persist().await
    }

    async fn list(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResult<Message>, RepositoryError> {
        let store = self.store.read().await;

        let total = store.messages.len();
        let offset = pagination.offset() as usize;
        let limit = pagination.limit as usize;

        let items = if offset < total {
            store.messages[offset..total.min(offset + limit)].to_vec()
        } else {
            Vec::new()
        };

        Ok(PaginatedResult::new(items, total, pagination))
    }

    async fn last(&self) -> Result<Option<Message>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.messages.last().cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.messages.len())
    }

    async fn clear(&self) -> Result<usize, RepositoryError> {
        let count;
        {
            let mut store = self.store.write().await;
            count = store.messages.len();
            store.messages.clear();
        }
        self.persist().await?;
        Ok(count)
    }

    async fn is_visited(&self) -> Result<bool, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.visited)
    }

    async fn mark_visited(&self) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            store.visited = true;
        }
        self.persist().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{Emotion, Intent};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_append_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileHistoryRepository::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        for i in 0..5 {
            let msg = Message::new_user(format!("Message {}", i), Emotion::Healing, Intent::Other);
            repo.append(&msg).await.unwrap();
        }

        let result = repo.list(Pagination::new(1, 3)).await.unwrap();
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.total, 5);
        assert_eq!(result.items[0].text(), "Message 0");
    }

    #[tokio::test]
    async fn test_history_survives_reload() {
        let temp_dir = TempDir::new().unwrap();

        {
            let repo = FileHistoryRepository::new(temp_dir.path().to_path_buf())
                .await
                .unwrap();
            let msg = Message::new_user("persisted", Emotion::Anxious, Intent::Vent);
            repo.append(&msg).await.unwrap();
            repo.mark_visited().await.unwrap();
        }

        let reloaded = FileHistoryRepository::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        assert_eq!(reloaded.count().await.unwrap(), 1);
        assert!(reloaded.is_visited().await.unwrap());

        let last = reloaded.last().await.unwrap().unwrap();
        assert_eq!(last.text(), "persisted");
        assert_eq!(last.emotion(), Some(Emotion::Anxious));
        assert_eq!(last.intent(), Some(Intent::Vent));
    }

    #[tokio::test]
    async fn test_cap_evicts_oldest_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileHistoryRepository::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        for i in 0..(HISTORY_CAP + 1) {
            let msg = Message::new_user(format!("Message {}", i), Emotion::Healing, Intent::Other);
            repo.append(&msg).await.unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), HISTORY_CAP);

        let result = repo.list(Pagination::new(1, 1)).await.unwrap();
        assert_eq!(result.items[0].text(), "Message 1");
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        tokio::fs::write(temp_dir.path().join(HISTORY_FILE_NAME), "not json")
            .await
            .unwrap();

        let repo = FileHistoryRepository::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(!repo.is_visited().await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_persists() {
        let temp_dir = TempDir::new().unwrap();

        {
            let repo = FileHistoryRepository::new(temp_dir.path().to_path_buf())
                .await
                .unwrap();
            for _ in 0..3 {
                let msg = Message::new_user("Test", Emotion::Healing, Intent::Other);
                repo.append(&msg).await.unwrap();
            }
            assert_eq!(repo.clear().await.unwrap(), 3);
        }

        let reloaded = FileHistoryRepository::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();
        assert_eq!(reloaded.count().await.unwrap(), 0);
    }
}
