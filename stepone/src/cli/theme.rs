// 终端主题
//
// 情绪 -> 终端配色的映射，以及各类提示条的统一样式

use colored::{ColoredString, Colorize};

use crate::modules::chat::domain::Emotion;
use crate::modules::config::ColorMode;

/// 根据配置初始化终端着色
pub fn init_colors(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => colored::control::unset_override(),
    }
}

/// 陪伴回复的情绪配色
pub fn companion_line(text: &str, emotion: Emotion) -> ColoredString {
    match emotion {
        Emotion::Anxious => text.yellow(),
        Emotion::Low => text.blue(),
        Emotion::Hopeful => text.magenta(),
        Emotion::Healing => text.green(),
    }
}

/// 用户消息回显样式
pub fn user_line(text: &str) -> ColoredString {
    text.normal()
}

/// 瞬时提示条样式
pub fn notice(text: &str) -> ColoredString {
    text.dimmed().italic()
}

/// 启动横幅样式
pub fn banner(text: &str) -> ColoredString {
    text.cyan().bold()
}
