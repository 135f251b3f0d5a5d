// Config Value Objects
//
// 配置相关的值对象定义

use serde::{Deserialize, Serialize};

/// 终端着色模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// 跟随终端能力
    #[default]
    Auto,
    /// 强制着色
    Always,
    /// 关闭着色
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl From<&str> for ColorMode {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!(ColorMode::from("always"), ColorMode::Always);
        assert_eq!(ColorMode::from("NEVER"), ColorMode::Never);
        assert_eq!(ColorMode::from("whatever"), ColorMode::Auto);
    }
}
