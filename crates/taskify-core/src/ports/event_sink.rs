//! EventSink port - ドメインイベントの出力先
//!
//! 実装: `NoopEventSink`, `TracingEventSink`, `RecordingEventSink`（`impls` 内）

use crate::domain::RecordedEvent;

pub trait EventSink: Send + Sync {
    /// Must not fail; sinks swallow their own errors.
    fn emit(&self, event: &RecordedEvent);
}
