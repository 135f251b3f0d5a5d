use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 意图类型
///
/// 值对象：表示用户这句话想要什么
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// 倾诉
    Vent,
    /// 求助
    Help,
    /// 习惯养成
    Habit,
    /// 计划
    Plan,
    /// 其他（默认）
    Other,
}

impl Intent {
    /// 获取所有可用的意图类型
    pub fn all() -> &'static [Intent] {
        &[
            Intent::Vent,
            Intent::Help,
            Intent::Habit,
            Intent::Plan,
            Intent::Other,
        ]
    }

    /// 检测文本中的意图（按顺序关键词匹配，先命中先生效）
    pub fn detect_from_text(text: &str) -> Self {
        let text_lower = text.to_lowercase();

        if text_lower.contains("vent")
            || text_lower.contains("just need to talk")
            || text_lower.contains("need to get this out")
            || text_lower.contains("listen to me")
            || text_lower.contains("fed up")
            || text_lower.contains("sick of")
            || text_lower.contains("can't take")
        {
            return Intent::Vent;
        }

        if text_lower.contains("help")
            || text_lower.contains("advice")
            || text_lower.contains("what should i do")
            || text_lower.contains("how do i")
            || text_lower.contains("how can i")
            || text_lower.contains("any suggestion")
        {
            return Intent::Help;
        }

        if text_lower.contains("habit")
            || text_lower.contains("routine")
            || text_lower.contains("every day")
            || text_lower.contains("daily")
            || text_lower.contains("keep doing")
            || text_lower.contains("streak")
        {
            return Intent::Habit;
        }

        if text_lower.contains("plan")
            || text_lower.contains("goal")
            || text_lower.contains("schedule")
            || text_lower.contains("tomorrow")
            || text_lower.contains("next week")
            || text_lower.contains("first step")
        {
            return Intent::Plan;
        }

        Intent::Other
    }
}

impl Default for Intent {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intent::Vent => "vent",
            Intent::Help => "help",
            Intent::Habit => "habit",
            Intent::Plan => "plan",
            Intent::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vent" => Ok(Intent::Vent),
            "help" => Ok(Intent::Help),
            "habit" => Ok(Intent::Habit),
            "plan" => Ok(Intent::Plan),
            "other" => Ok(Intent::Other),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}
