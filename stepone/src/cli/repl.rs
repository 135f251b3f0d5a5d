// CLI REPL - 终端会话界面
//
// 读取用户输入，交给 ChatModule 解析回复，并按情绪主题渲染；
// 在线/离线提示、首次问候、空输入提示均在这里呈现

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{debug, warn};

use super::theme;
use crate::infrastructure::{AppEvent, AppState, EventBus};
use crate::modules::chat::domain::MessageRole;
use crate::modules::chat::ports::ReplySource;
use crate::modules::chat::{
    ApplicationError, ChatModule, ClearHistoryCommand, ListHistoryQuery, SendMessageCommand,
    HISTORY_CAP,
};
use crate::shared::{AppError, AppResult};

const PROMPT: &str = "you ❯ ";
const COMPANION_LABEL: &str = "🌿 stepone ❯";

/// 首次进入时的问候语
const GREETING: &str =
    "🌿 Welcome to StepOne. However today went, you made it here — tell me what's on your mind.";

/// 空输入时的瞬时提示
const EMPTY_INPUT_NOTICE: &str = "Take your time — send a few words whenever you're ready.";

/// 终端会话
pub struct Repl {
    chat: Arc<ChatModule>,
    state: Arc<AppState>,
    event_bus: Arc<EventBus>,
    replay_count: u32,
}

impl Repl {
    pub fn new(
        chat: Arc<ChatModule>,
        state: Arc<AppState>,
        event_bus: Arc<EventBus>,
        replay_count: u32,
    ) -> Self {
        Self {
            chat,
            state,
            event_bus,
            replay_count,
        }
    }

    /// 运行会话循环，直到用户退出
    pub fn run(&self, runtime: &Runtime) -> AppResult<()> {
        let mut editor = DefaultEditor::new().map_err(|e| AppError::Unknown(e.to_string()))?;
        let mut events = self.event_bus.subscribe();

        runtime.block_on(self.startup())?;
        self.drain_events(&mut events);

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    let input = line.trim();

                    match input {
                        "/quit" | "/exit" => {
                            println!("{}", theme::notice("🌿 Take care. See you next time."));
                            break;
                        }
                        "/clear" => runtime.block_on(self.handle_clear())?,
                        "/history" => runtime.block_on(self.render_history(HISTORY_CAP as u32))?,
                        "" => {
                            // 空输入不发起请求，只给瞬时提示
                            println!("{}", theme::notice(EMPTY_INPUT_NOTICE));
                        }
                        text => runtime.block_on(self.handle_send(text)),
                    }

                    self.drain_events(&mut events);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", theme::notice("(ctrl-d or /quit to leave)"));
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", theme::notice("🌿 Take care. See you next time."));
                    break;
                }
                Err(e) => {
                    warn!("Readline error: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// 启动流程：横幅、连通性探测、记录回放、首次问候
    async fn startup(&self) -> AppResult<()> {
        println!("{}", theme::banner("StepOne — one small step at a time"));

        // 连通性探测，离线时给出提示条
        let health = self.chat.planner_health().await?;
        self.state.set_online(health.is_healthy).await;
        if !health.is_healthy {
            self.event_bus
                .publish(AppEvent::ConnectivityChanged { online: false });
        }

        self.render_history(self.replay_count).await?;

        // 首次进入时问候一次
        if !self.chat.is_visited().await? {
            println!(
                "{} {}",
                COMPANION_LABEL,
                theme::companion_line(GREETING, Default::default())
            );
            self.chat.mark_visited().await?;
        }

        Ok(())
    }

    /// 发送一条消息并渲染回复
    async fn handle_send(&self, text: &str) {
        // 在途期间禁用发送
        if !self.state.begin_send().await {
            println!(
                "{}",
                theme::notice("One message at a time — a reply is still on its way.")
            );
            return;
        }

        let result = self
            .chat
            .send_message(SendMessageCommand::new(text))
            .await;
        self.state.end_send().await;

        match result {
            Ok(response) => {
                let emotion = response.ai_message.emotion().unwrap_or_default();

                self.event_bus.publish(AppEvent::ReplyResolved {
                    message_id: response.ai_message.id(),
                    emotion,
                    source: response.source,
                });

                // 回复来源驱动在线状态翻转
                match response.source {
                    ReplySource::Local => {
                        if self.state.is_online().await {
                            self.state.set_online(false).await;
                            self.event_bus
                                .publish(AppEvent::ConnectivityChanged { online: false });
                        }
                        self.event_bus.publish(AppEvent::FallbackEngaged);
                    }
                    ReplySource::Remote => {
                        if !self.state.is_online().await {
                            self.state.set_online(true).await;
                            self.event_bus
                                .publish(AppEvent::ConnectivityChanged { online: true });
                        }
                    }
                }

                println!(
                    "{} {}",
                    COMPANION_LABEL,
                    theme::companion_line(response.ai_message.text(), emotion)
                );
            }
            Err(ApplicationError::ValidationError(msg)) => {
                println!("{}", theme::notice(&msg));
            }
            Err(e) => {
                // 规划适配器内部兜底，正常不会走到这里
                warn!("Send failed: {}", e);
                println!(
                    "{}",
                    theme::notice("Something went quiet on our side. Let's try again in a moment.")
                );
            }
        }
    }

    /// 清空对话记录
    async fn handle_clear(&self) -> AppResult<()> {
        let response = self.chat.clear_history(ClearHistoryCommand).await?;
        self.event_bus.publish(AppEvent::HistoryCleared {
            deleted_messages: response.deleted_messages,
        });
        Ok(())
    }

    /// 回放最近的对话记录
    async fn render_history(&self, count: u32) -> AppResult<()> {
        let list = self
            .chat
            .list_history(ListHistoryQuery::new(1, HISTORY_CAP as u32))
            .await?;

        let tail_start = list.messages.len().saturating_sub(count as usize);
        for message in &list.messages[tail_start..] {
            match message.role() {
                MessageRole::User => {
                    println!("{} {}", PROMPT.trim_end(), theme::user_line(message.text()));
                }
                MessageRole::Ai => {
                    println!(
                        "{} {}",
                        COMPANION_LABEL,
                        theme::companion_line(
                            message.text(),
                            message.emotion().unwrap_or_default()
                        )
                    );
                }
            }
        }

        Ok(())
    }

    /// 渲染积压的应用事件（提示条）
    fn drain_events(&self, events: &mut tokio::sync::broadcast::Receiver<AppEvent>) {
        while let Ok(event) = events.try_recv() {
            match event {
                AppEvent::ConnectivityChanged { online: false } => {
                    println!(
                        "{}",
                        theme::notice("Planning service unreachable — replying locally for now.")
                    );
                }
                AppEvent::ConnectivityChanged { online: true } => {
                    println!("{}", theme::notice("Back online."));
                }
                AppEvent::FallbackEngaged => {
                    debug!("Reply served from local templates");
                }
                AppEvent::HistoryCleared { deleted_messages } => {
                    println!(
                        "{}",
                        theme::notice(&format!(
                            "Conversation cleared ({} messages).",
                            deleted_messages
                        ))
                    );
                }
                AppEvent::ReplyResolved {
                    message_id,
                    emotion,
                    source,
                } => {
                    debug!(
                        "Reply {} resolved: emotion={}, source={:?}",
                        message_id.short(),
                        emotion,
                        source
                    );
                }
            }
        }
    }
}
