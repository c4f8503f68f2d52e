//! SyncContext - ウィジェット側コンポーネントが共有する ports と config

use std::sync::Arc;

use crate::config::SyncConfig;
use crate::domain::{DomainEvent, Language, RecordedEvent, StoreError};
use crate::ports::{Clock, EventSink, SharedStore, SurfaceHost};

/// clone は安価（全フィールドが `Arc`）
#[derive(Clone)]
pub struct SyncContext {
    pub(crate) store: Arc<dyn SharedStore>,
    pub(crate) surfaces: Arc<dyn SurfaceHost>,
    pub(crate) events: Arc<dyn EventSink>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) config: Arc<SyncConfig>,
}

impl SyncContext {
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn SharedStore> {
        &self.store
    }

    pub(crate) fn emit(&self, event: DomainEvent) {
        self.events.emit(&RecordedEvent {
            at: self.clock.now(),
            event,
        });
    }

    /// Raw snapshot text, `None` if never written.
    pub(crate) fn read_tasks(&self) -> Result<Option<String>, StoreError> {
        self.store.get(&self.config.tasks_key)
    }

    /// 保存された言語設定。config の既定値が使われるのはここだけ
    /// （値が無い・認識できない・読めない場合）
    pub fn read_language(&self) -> Language {
        match self.store.get(&self.config.language_key) {
            Ok(code) => Language::resolve(code.as_deref(), self.config.default_language),
            Err(err) => {
                tracing::warn!(error = %err, "language preference unreadable, using default");
                self.config.default_language
            }
        }
    }
}
