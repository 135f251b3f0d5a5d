// Template Store - 本地模板回复
//
// 远端规划服务不可用时的兜底回复来源：
// 按 情绪 -> 意图 查找候选池，缺失时退回 healing/other 池，
// 再从解析出的池中均匀随机取一条

use rand::seq::SliceRandom;

use crate::modules::chat::domain::{Emotion, Intent};

/// 候选池全部为空时的固定回复
const DEFAULT_REPLY: &str =
    "🌿 I'm here with you. Whenever you're ready, one small step is enough.";

/// 本地模板库
#[derive(Debug, Clone, Default)]
pub struct TemplateStore;

impl TemplateStore {
    /// 创建新的模板库
    pub fn new() -> Self {
        Self
    }

    /// 生成一条本地回复
    pub fn generate(&self, emotion: Emotion, intent: Intent) -> String {
        let pool = Self::resolve_pool(emotion, intent);
        Self::pick(pool)
    }

    /// 解析候选池：emotion -> intent 缺失时退回 healing/other
    fn resolve_pool(emotion: Emotion, intent: Intent) -> &'static [&'static str] {
        let pool = Self::pool(emotion, intent);
        if pool.is_empty() {
            Self::pool(Emotion::Healing, Intent::Other)
        } else {
            pool
        }
    }

    /// 从池中均匀随机取一条，空池返回固定回复
    fn pick(pool: &'static [&'static str]) -> String {
        pool.choose(&mut rand::thread_rng())
            .map(|s| (*s).to_string())
            .unwrap_or_else(|| DEFAULT_REPLY.to_string())
    }

    fn pool(emotion: Emotion, intent: Intent) -> &'static [&'static str] {
        match (emotion, intent) {
            (Emotion::Anxious, Intent::Vent) => &[
                "🌿 That sounds like a lot to carry. Letting it out here already counts as a step.",
                "🌿 It makes sense that you feel wound up. You don't have to untangle everything tonight.",
                "🌿 Thank you for saying it out loud. Your worry is allowed to just sit here for a while.",
            ],
            (Emotion::Anxious, Intent::Help) => &[
                "🌿 When everything feels urgent, pick the smallest piece first. One breath, then one step.",
                "🌿 Let's shrink it: what is the one thing that would make today 1% lighter?",
            ],
            (Emotion::Anxious, Intent::Plan) => &[
                "🌿 A plan can be tiny and still be a plan. Start with the first five minutes.",
                "🌿 Write down just tomorrow's first step. The rest of the week can wait its turn.",
            ],
            (Emotion::Low, Intent::Vent) => &[
                "🌿 Heavy days are real days too. You showed up here, and that matters.",
                "🌿 You don't need a reason to feel drained. Rest is not something you have to earn.",
                "🌿 I hear how tired you are. Nothing more is required of you right now.",
            ],
            (Emotion::Low, Intent::Help) => &[
                "🌿 On low days, aim for gentle, not perfect. A glass of water and a short walk count.",
                "🌿 Start smaller than feels reasonable. Momentum likes tiny beginnings.",
            ],
            (Emotion::Low, Intent::Habit) => &[
                "🌿 A habit that survives bad days has to be small. What's the two-minute version?",
                "🌿 Missing a day doesn't erase the streak in your body. Just pick it up again, softly.",
            ],
            (Emotion::Hopeful, Intent::Plan) => &[
                "🌿 That spark is worth protecting. Pin down one concrete step while it's warm.",
                "🌿 Lovely. Let's turn that hope into a first step you can finish before bed.",
                "🌿 You sound ready. Choose the smallest next action and give it a time and a place.",
            ],
            (Emotion::Hopeful, Intent::Habit) => &[
                "🌿 Building on a good day is the best time. Keep the bar low so future-you can clear it too.",
                "🌿 One small repeat at a time. You're already doing the hard part by caring.",
            ],
            (Emotion::Hopeful, Intent::Other) => &[
                "🌿 I'm glad something feels lighter today. Savor it, you earned this moment.",
                "🌿 That's wonderful to hear. Let this feeling be proof that things can move.",
            ],
            (Emotion::Healing, Intent::Vent) => &[
                "🌿 I'm listening. Take all the space you need here.",
                "🌿 Whatever is on your mind is welcome here, at whatever pace suits you.",
            ],
            (Emotion::Healing, Intent::Other) => &[
                "🌿 I'm here with you. One small step at a time is more than enough.",
                "🌿 However today went, you made it here. That's worth acknowledging.",
                "🌿 Take a slow breath. We can figure out the next little thing together.",
            ],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_is_member_of_resolved_pool() {
        let store = TemplateStore::new();

        for emotion in Emotion::all() {
            for intent in Intent::all() {
                let reply = store.generate(*emotion, *intent);
                let pool = TemplateStore::resolve_pool(*emotion, *intent);
                assert!(
                    pool.contains(&reply.as_str()),
                    "reply for {}/{} not in pool",
                    emotion,
                    intent
                );
            }
        }
    }

    #[test]
    fn test_missing_combination_falls_back_to_healing_other() {
        let pool = TemplateStore::resolve_pool(Emotion::Anxious, Intent::Habit);
        assert_eq!(pool, TemplateStore::pool(Emotion::Healing, Intent::Other));
    }

    #[test]
    fn test_empty_pool_returns_fixed_default() {
        assert_eq!(TemplateStore::pick(&[]), DEFAULT_REPLY);
    }

    #[test]
    fn test_fallback_pool_is_never_empty() {
        assert!(!TemplateStore::pool(Emotion::Healing, Intent::Other).is_empty());
    }
}
