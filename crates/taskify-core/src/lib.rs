//! taskify-core
//!
//! Taskify ホーム画面ウィジェットのためのタスク状態同期と通知配送。
//!
//! アプリ本体・ウィジェットプロセス・バックグラウンドの push ハンドラの 3 つの
//! コンテキストは、メモリを共有せずに同じタスク一覧を扱う。接点は永続
//! key-value ストアだけで、値単位のアトミックな書き込みが唯一の調停点になる
//! （last writer wins）。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, snapshot, view, command, push, errors, events）
//! - **ports**: 抽象化レイヤー（SharedStore, SurfaceHost, NotificationHost, EventSink, Clock）
//! - **impls**: 実装（ファイル版とインメモリ版のアダプタ）
//! - **codec**: スナップショットのテキスト表現
//! - **app**: renderer, relay, trigger, intake, builder
//! - **config**: ストアのキーと既定値
//! - **observability**: スナップショットの集計ビュー

pub mod app;
pub mod codec;
pub mod config;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;

pub use app::{AppBuilder, BuildError, WidgetApp};
pub use codec::SnapshotCodec;
pub use config::{ConfigError, NotificationConfig, SyncConfig};
