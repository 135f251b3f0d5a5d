use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 情绪类型
///
/// 值对象：表示用户输入或服务端回复中检测到的情绪状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// 焦虑
    Anxious,
    /// 低落
    Low,
    /// 有希望
    Hopeful,
    /// 疗愈（默认）
    Healing,
}

impl Emotion {
    /// 获取所有可用的情绪类型
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Anxious,
            Emotion::Low,
            Emotion::Hopeful,
            Emotion::Healing,
        ]
    }

    /// 转换为主题名称（用于终端主题映射）
    pub fn to_theme_name(&self) -> &'static str {
        match self {
            Emotion::Anxious => "anxious",
            Emotion::Low => "low",
            Emotion::Hopeful => "hopeful",
            Emotion::Healing => "healing",
        }
    }

    /// 检测文本中的情绪（按顺序关键词匹配，先命中先生效）
    pub fn detect_from_text(text: &str) -> Self {
        let text_lower = text.to_lowercase();

        if text_lower.contains("anxious")
            || text_lower.contains("anxiety")
            || text_lower.contains("worried")
            || text_lower.contains("worry")
            || text_lower.contains("nervous")
            || text_lower.contains("panic")
            || text_lower.contains("overwhelmed")
            || text_lower.contains("stress")
            || text_lower.contains("😰")
        {
            return Emotion::Anxious;
        }

        if text_lower.contains("tired")
            || text_lower.contains("exhausted")
            || text_lower.contains("depressed")
            || text_lower.contains("hopeless")
            || text_lower.contains("empty")
            || text_lower.contains("lonely")
            || text_lower.contains("sad")
            || text_lower.contains("numb")
            || text_lower.contains("😢")
        {
            return Emotion::Low;
        }

        if text_lower.contains("hopeful")
            || text_lower.contains("hope")
            || text_lower.contains("excited")
            || text_lower.contains("getting better")
            || text_lower.contains("looking forward")
            || text_lower.contains("motivated")
            || text_lower.contains("proud")
            || text_lower.contains("🌱")
        {
            return Emotion::Hopeful;
        }

        Emotion::Healing
    }
}

impl Default for Emotion {
    fn default() -> Self {
        Self::Healing
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Emotion::Anxious => "anxious",
            Emotion::Low => "low",
            Emotion::Hopeful => "hopeful",
            Emotion::Healing => "healing",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anxious" => Ok(Emotion::Anxious),
            "low" => Ok(Emotion::Low),
            "hopeful" => Ok(Emotion::Hopeful),
            "healing" => Ok(Emotion::Healing),
            _ => Err(format!("Unknown emotion: {}", s)),
        }
    }
}
