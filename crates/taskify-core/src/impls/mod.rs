//! Impls - port の実装
//!
//! # 含まれる実装
//! - **FileSharedStore**: ディレクトリ上のストア（アトミックな置き換え）
//! - **InMemorySharedStore**: 単一プロセス用のストア
//! - **FileSurfaceHost / RecordingSurfaceHost**: ウィジェット
//! - **InMemoryNotificationHost**: テスト用の通知ホスト
//! - **NoopEventSink / TracingEventSink / RecordingEventSink**

mod atomic;
pub mod event_sinks;
pub mod file_store;
pub mod file_surface;
pub mod memory_notifier;
pub mod memory_store;
pub mod recording_surface;

pub use self::event_sinks::{NoopEventSink, RecordingEventSink, TracingEventSink};
pub use self::file_store::FileSharedStore;
pub use self::file_surface::FileSurfaceHost;
pub use self::memory_notifier::InMemoryNotificationHost;
pub use self::memory_store::InMemorySharedStore;
pub use self::recording_surface::RecordingSurfaceHost;
