use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::{Emotion, Intent, MessageId};

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// 用户消息
    User,
    /// AI 陪伴回复
    Ai,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Ai => "ai",
        }
    }
}

/// 消息实体
///
/// 追加进对话日志后不可变，由对话存储独占管理
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// 消息唯一标识
    id: MessageId,
    /// 消息角色
    role: MessageRole,
    /// 消息内容
    text: String,
    /// 情绪标签（用户消息为分类结果，AI 消息为回复情绪）
    emotion: Option<Emotion>,
    /// 意图标签（仅用户消息）
    intent: Option<Intent>,
    /// 创建时间
    created_at: DateTime<Utc>,
}

impl Message {
    /// 创建用户消息（携带分类标签）
    pub fn new_user(text: impl Into<String>, emotion: Emotion, intent: Intent) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::User,
            text: text.into(),
            emotion: Some(emotion),
            intent: Some(intent),
            created_at: Utc::now(),
        }
    }

    /// 创建 AI 回复消息
    pub fn new_ai(text: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::Ai,
            text: text.into(),
            emotion: Some(emotion),
            intent: None,
            created_at: Utc::now(),
        }
    }

    // Getters
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emotion(&self) -> Option<Emotion> {
        self.emotion
    }

    pub fn intent(&self) -> Option<Intent> {
        self.intent
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_message() {
        let msg = Message::new_user("I'm worried about work", Emotion::Anxious, Intent::Vent);

        assert_eq!(msg.role(), MessageRole::User);
        assert_eq!(msg.text(), "I'm worried about work");
        assert_eq!(msg.emotion(), Some(Emotion::Anxious));
        assert_eq!(msg.intent(), Some(Intent::Vent));
    }

    #[test]
    fn test_create_ai_message() {
        let msg = Message::new_ai("One small step is enough for today.", Emotion::Healing);

        assert_eq!(msg.role(), MessageRole::Ai);
        assert_eq!(msg.emotion(), Some(Emotion::Healing));
        assert!(msg.intent().is_none());
    }

    #[test]
    fn test_message_serde_shape() {
        let msg = Message::new_user("hello", Emotion::Healing, Intent::Other);
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["emotion"], "healing");
        assert_eq!(json["intent"], "other");
        assert!(json["createdAt"].is_string());
    }
}
