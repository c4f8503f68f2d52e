//! AppBuilder - ports を `WidgetApp` に組み立てる
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）: 必須 port の欠落や不正な config は
//!   `BuildError` になり、ホストのコールバック内では失敗しない
//! - `Arc<dyn Trait>` による port の差し替え

use std::sync::Arc;

use crate::codec::SnapshotCodec;
use crate::config::{ConfigError, SyncConfig};
use crate::domain::{Language, StoreError, TaskSnapshot};
use crate::impls::NoopEventSink;
use crate::ports::{Clock, EventSink, NotificationHost, SharedStore, SurfaceHost, SystemClock};

use super::context::SyncContext;
use super::intake::NotificationIntake;
use super::relay::ActionRelay;
use super::renderer::WidgetRenderer;
use super::trigger::UpdateTrigger;

/// AppBuilder は 1 つの実行コンテキスト分のコンポーネントを構築
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new(SyncConfig::default())
///     .store(Arc::new(FileSharedStore::new("/data/prefs")))
///     .surface_host(host)
///     .build()?;
/// app.relay().on_receive(&intent);
/// ```
pub struct AppBuilder {
    config: SyncConfig,
    store: Option<Arc<dyn SharedStore>>,
    surfaces: Option<Arc<dyn SurfaceHost>>,
    notifications: Option<Arc<dyn NotificationHost>>,
    events: Option<Arc<dyn EventSink>>,
    clock: Option<Arc<dyn Clock>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("missing required port: {0}")]
    MissingPort(&'static str),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl AppBuilder {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            store: None,
            surfaces: None,
            notifications: None,
            events: None,
            clock: None,
        }
    }

    pub fn store(mut self, store: Arc<dyn SharedStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn surface_host(mut self, host: Arc<dyn SurfaceHost>) -> Self {
        self.surfaces = Some(host);
        self
    }

    /// 任意。無ければ `WidgetApp::intake()` は `None`
    pub fn notification_host(mut self, host: Arc<dyn NotificationHost>) -> Self {
        self.notifications = Some(host);
        self
    }

    /// 任意。既定は `NoopEventSink`
    pub fn event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    /// 任意。既定は `SystemClock`
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<WidgetApp, BuildError> {
        self.config.validate()?;
        let store = self.store.ok_or(BuildError::MissingPort("shared store"))?;
        let surfaces = self
            .surfaces
            .ok_or(BuildError::MissingPort("surface host"))?;
        let events = self.events.unwrap_or_else(|| Arc::new(NoopEventSink));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let ctx = SyncContext {
            store,
            surfaces,
            events: Arc::clone(&events),
            clock: Arc::clone(&clock),
            config: Arc::new(self.config),
        };
        let renderer = Arc::new(WidgetRenderer::new(ctx.clone()));
        let relay = ActionRelay::new(ctx.clone(), Arc::clone(&renderer));
        let trigger = Arc::new(UpdateTrigger::new(ctx.clone(), Arc::clone(&renderer)));
        let intake = self.notifications.map(|host| {
            NotificationIntake::new(host, ctx.config.notification.clone(), events, clock)
        });

        Ok(WidgetApp {
            ctx,
            renderer,
            relay,
            trigger,
            intake,
        })
    }
}

/// 1 つの実行コンテキストの全コンポーネント（同じ ports を共有）
pub struct WidgetApp {
    ctx: SyncContext,
    renderer: Arc<WidgetRenderer>,
    relay: ActionRelay,
    trigger: Arc<UpdateTrigger>,
    intake: Option<NotificationIntake>,
}

impl WidgetApp {
    pub fn config(&self) -> &SyncConfig {
        self.ctx.config()
    }

    pub fn context(&self) -> &SyncContext {
        &self.ctx
    }

    pub fn renderer(&self) -> &Arc<WidgetRenderer> {
        &self.renderer
    }

    pub fn relay(&self) -> &ActionRelay {
        &self.relay
    }

    pub fn trigger(&self) -> &Arc<UpdateTrigger> {
        &self.trigger
    }

    pub fn intake(&self) -> Option<&NotificationIntake> {
        self.intake.as_ref()
    }

    /// アプリが読むのと同じ形で現在のスナップショットを返す（無い・壊れている場合は空）
    pub fn read_snapshot(&self) -> TaskSnapshot {
        match self.ctx.read_tasks() {
            Ok(raw) => SnapshotCodec::decode_or_empty(raw.as_deref()),
            Err(err) => {
                tracing::warn!(error = %err, "snapshot unreadable, using empty list");
                TaskSnapshot::empty()
            }
        }
    }

    /// App-side write path: replace the snapshot, then refresh the widgets.
    ///
    /// Only the store write can fail; the refresh is best effort.
    pub fn publish_snapshot(&self, snapshot: &TaskSnapshot) -> Result<(), StoreError> {
        self.ctx
            .store
            .put(&self.ctx.config.tasks_key, &SnapshotCodec::encode(snapshot))?;
        self.trigger.update_widgets();
        Ok(())
    }

    /// App-side language change, followed by a widget refresh.
    pub fn publish_language(&self, language: Language) -> Result<(), StoreError> {
        self.ctx
            .store
            .put(&self.ctx.config.language_key, language.code())?;
        self.trigger.update_widgets();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SurfaceId;
    use crate::impls::{InMemorySharedStore, RecordingSurfaceHost};

    #[test]
    fn build_success() {
        let app = AppBuilder::new(SyncConfig::default())
            .store(Arc::new(InMemorySharedStore::new()))
            .surface_host(Arc::new(RecordingSurfaceHost::new(vec![SurfaceId::new(1)])))
            .build();
        assert!(app.is_ok());
        assert!(app.unwrap().intake().is_none());
    }

    #[test]
    fn build_missing_store() {
        let app = AppBuilder::new(SyncConfig::default())
            .surface_host(Arc::new(RecordingSurfaceHost::new(vec![])))
            .build();
        assert!(matches!(app, Err(BuildError::MissingPort("shared store"))));
    }

    #[test]
    fn build_missing_surface_host() {
        let app = AppBuilder::new(SyncConfig::default())
            .store(Arc::new(InMemorySharedStore::new()))
            .build();
        assert!(matches!(app, Err(BuildError::MissingPort("surface host"))));
    }

    #[test]
    fn build_invalid_config() {
        let config = SyncConfig {
            tasks_key: String::new(),
            ..SyncConfig::default()
        };
        let app = AppBuilder::new(config)
            .store(Arc::new(InMemorySharedStore::new()))
            .surface_host(Arc::new(RecordingSurfaceHost::new(vec![])))
            .build();
        assert!(matches!(app, Err(BuildError::InvalidConfig(_))));
    }
}
