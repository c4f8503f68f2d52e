//! ActionRelay - ウィジェットプロセスに戻ってきたコマンドを処理する
//!
//! # フロー（完了）
//! 1. ストアからスナップショット全体を読む
//! 2. デコードする（壊れたスナップショットなら書き込みを中止し、
//!    空リストで上書きはしない）
//! 3. 対象キーを持つレコードに完了フラグと由来フラグだけを立てる
//! 4. スナップショット全体をエンコードし、1 回の `put` で書き戻す
//! 5. 配置済みのウィジェットをすべて再描画する
//!
//! relay はロックを取らない。1 と 4 の間にアプリが書き込むと、
//! どちらか一方の更新が失われる（last writer wins）。

use std::sync::Arc;

use crate::codec::SnapshotCodec;
use crate::domain::{DispatchError, DomainEvent, Intent, TaskKey, TaskSnapshot, WidgetCommand};

use super::context::SyncContext;
use super::renderer::WidgetRenderer;

/// 完了コマンドの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    pub key: TaskKey,
    /// キーが一致したレコード数
    pub matched: usize,
    /// スナップショットを書き戻したか
    pub written: bool,
}

pub struct ActionRelay {
    ctx: SyncContext,
    renderer: Arc<WidgetRenderer>,
}

impl ActionRelay {
    pub fn new(ctx: SyncContext, renderer: Arc<WidgetRenderer>) -> Self {
        Self { ctx, renderer }
    }

    /// ホストからの入口。失敗を返さない（ここからエラーが漏れると
    /// ホストがウィジェットごと無効化しうる）
    pub fn on_receive(&self, intent: &Intent) {
        match WidgetCommand::from_intent(intent) {
            WidgetCommand::CompleteTask(key) if key.is_absent() => {
                tracing::debug!("completion without task key ignored");
            }
            WidgetCommand::CompleteTask(key) => {
                self.complete(key);
                self.renderer.render_all();
            }
            WidgetCommand::Update(surfaces) if surfaces.is_empty() => {
                self.renderer.render_all();
            }
            WidgetCommand::Update(surfaces) => {
                self.renderer.render_surfaces(&surfaces);
            }
            WidgetCommand::Unknown(action) => {
                tracing::debug!(%action, "unhandled widget action");
            }
        }
    }

    /// Complete `key`, logging instead of returning failures.
    pub fn complete(&self, key: TaskKey) -> Option<CompletionReport> {
        match self.try_complete(key) {
            Ok(report) => Some(report),
            Err(err) => {
                tracing::warn!(task_key = %key, error = %err, "completion from widget failed");
                self.ctx.emit(DomainEvent::DispatchFailed {
                    stage: "complete",
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    pub fn try_complete(&self, key: TaskKey) -> Result<CompletionReport, DispatchError> {
        let mut snapshot = match self.ctx.read_tasks()? {
            Some(raw) => SnapshotCodec::decode(&raw)?,
            None => TaskSnapshot::empty(),
        };

        let matched = snapshot.complete_from_widget(key);
        let written = matched > 0;
        if written {
            let encoded = SnapshotCodec::encode(&snapshot);
            self.ctx.store.put(&self.ctx.config.tasks_key, &encoded)?;
        }

        tracing::info!(task_key = %key, matched, "task completed from widget");
        self.ctx
            .emit(DomainEvent::TaskCompletedFromWidget { key, matched });
        Ok(CompletionReport {
            key,
            matched,
            written,
        })
    }
}
