//! NotificationIntake - バックグラウンドの push ハンドラ
//!
//! アプリがフォアグラウンドにない（メモリ上にすらない）間に動く。
//! 1 回の呼び出しで 1 つのイベントを処理し、その後は何も保持しない。
//!
//! # 状態
//! - **Backgrounded**: push ペイロードが届く -> 常駐する通知を表示
//! - **Foregrounded via click**: 通知がクリックされた -> 通知を閉じ、
//!   アプリのウィンドウを前面に出す（なければ新しく開く）
//!
//! 相関用の tag はそのまま引き回すだけで、ここでは解釈しない。
//! ディープリンクはアプリ側の責務。

use std::sync::Arc;

use crate::config::NotificationConfig;
use crate::domain::{
    ClickOutcome, DomainEvent, NotificationRequest, PushPayload, RecordedEvent,
};
use crate::ports::{Clock, EventSink, NotificationHost};

/// ホストがハンドラに渡すイベント
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeEvent {
    /// バックグラウンド中に届いた push
    Message(PushPayload),
    /// この tag の通知がクリックされた
    Click { tag: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeOutcome {
    Displayed(NotificationRequest),
    Resumed(ClickOutcome),
}

/// ペイロードから通知を組み立てる（欠けた項目はプレースホルダで埋める）
pub fn build_request(payload: &PushPayload, config: &NotificationConfig) -> NotificationRequest {
    NotificationRequest {
        title: payload
            .title()
            .unwrap_or(config.placeholder_title.as_str())
            .to_string(),
        body: payload
            .body()
            .unwrap_or(config.placeholder_body.as_str())
            .to_string(),
        icon: config.icon.clone(),
        badge: config.icon.clone(),
        tag: payload
            .correlation_tag()
            .unwrap_or_else(|| config.default_tag.clone()),
        require_interaction: true,
        data: payload.data.clone().unwrap_or_default(),
    }
}

pub struct NotificationIntake {
    host: Arc<dyn NotificationHost>,
    config: NotificationConfig,
    events: Arc<dyn EventSink>,
    clock: Arc<dyn Clock>,
}

impl NotificationIntake {
    pub fn new(
        host: Arc<dyn NotificationHost>,
        config: NotificationConfig,
        events: Arc<dyn EventSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            host,
            config,
            events,
            clock,
        }
    }

    fn emit(&self, event: DomainEvent) {
        self.events.emit(&RecordedEvent {
            at: self.clock.now(),
            event,
        });
    }

    pub async fn handle(&self, event: IntakeEvent) -> IntakeOutcome {
        match event {
            IntakeEvent::Message(payload) => {
                IntakeOutcome::Displayed(self.on_background_message(&payload).await)
            }
            IntakeEvent::Click { tag } => {
                IntakeOutcome::Resumed(self.on_notification_click(&tag).await)
            }
        }
    }

    /// Show a notification for `payload`. Returns what was requested, even if
    /// the host refused it.
    pub async fn on_background_message(&self, payload: &PushPayload) -> NotificationRequest {
        let request = build_request(payload, &self.config);
        tracing::info!(tag = %request.tag, "background message received");

        match self.host.show(&request).await {
            Ok(()) => self.emit(DomainEvent::NotificationShown {
                tag: request.tag.clone(),
            }),
            Err(err) => {
                tracing::warn!(tag = %request.tag, error = %err, "showing notification failed");
                self.emit(DomainEvent::DispatchFailed {
                    stage: "notify",
                    reason: err.to_string(),
                });
            }
        }
        request
    }

    /// Same as `on_background_message` for a raw JSON payload. A payload that
    /// does not parse is treated as empty, so placeholders are shown.
    pub async fn on_background_message_json(&self, raw: &str) -> NotificationRequest {
        let payload = serde_json::from_str::<PushPayload>(raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "push payload malformed, using placeholders");
            PushPayload::default()
        });
        self.on_background_message(&payload).await
    }

    /// Dismiss the notification, then focus an existing window or open a new one.
    pub async fn on_notification_click(&self, tag: &str) -> ClickOutcome {
        if let Err(err) = self.host.close(tag).await {
            tracing::warn!(tag, error = %err, "closing notification failed");
        }

        let outcome = self.resume_app().await;
        self.emit(DomainEvent::NotificationClicked {
            tag: tag.to_string(),
            focused_existing: matches!(outcome, ClickOutcome::Focused(_)),
        });
        outcome
    }

    async fn resume_app(&self) -> ClickOutcome {
        let clients = self.host.window_clients().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "listing window clients failed");
            Vec::new()
        });

        if let Some(client) = clients.into_iter().find(|c| c.focusable) {
            match self.host.focus(&client).await {
                Ok(()) => return ClickOutcome::Focused(client),
                Err(err) => tracing::warn!(client = %client.id, error = %err, "focus failed"),
            }
        }

        if !self.host.can_open_windows() {
            return ClickOutcome::Nothing;
        }
        match self.host.open_window(&self.config.open_url).await {
            Ok(()) => ClickOutcome::Opened(self.config.open_url.clone()),
            Err(err) => {
                tracing::warn!(error = %err, "opening app window failed");
                ClickOutcome::Nothing
            }
        }
    }
}
