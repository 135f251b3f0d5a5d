use super::super::value_objects::{Emotion, Intent};

/// 分类结果
///
/// 派生数据，不单独持久化；用户消息会带上这组标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    pub emotion: Emotion,
}

/// 输入分类服务
///
/// 领域服务：把用户原始文本映射为情绪/意图标签对
#[derive(Debug, Clone, Default)]
pub struct Classifier;

impl Classifier {
    /// 创建新的分类器
    pub fn new() -> Self {
        Self
    }

    /// 分类一段文本，空输入返回默认标签
    pub fn classify(&self, text: &str) -> Classification {
        Classification {
            intent: Intent::detect_from_text(text),
            emotion: Emotion::detect_from_text(text),
        }
    }
}
