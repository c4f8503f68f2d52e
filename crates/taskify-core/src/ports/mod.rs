//! Ports - ホストとの境界ごとに 1 つの trait
//!
//! 3 つの実行コンテキスト（アプリ、ウィジェットプロセス、通知ハンドラ）は
//! メモリを共有しない。やり取りはすべてこれらの trait を通る:
//! - `SharedStore`: 値単位で置き換える永続 key-value ストア（source of truth）
//! - `SurfaceHost`: ウィジェットとシステムブロードキャスト
//! - `NotificationHost`: システム通知とアプリのウィンドウ
//! - `EventSink`, `Clock`: 周辺機能

pub mod clock;
pub mod event_sink;
pub mod notification_host;
pub mod shared_store;
pub mod surface_host;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::notification_host::NotificationHost;
pub use self::shared_store::SharedStore;
pub use self::surface_host::SurfaceHost;
