//! App - ports の上に組み立てる同期サブシステムのコンポーネント
//!
//! # 主要コンポーネント
//! - **WidgetRenderer**: スナップショット -> 行数上限付きのウィジェット表示
//! - **ActionRelay**: ウィジェットのタップ -> スナップショットの read-modify-write -> 再描画
//! - **UpdateTrigger**: アプリ側からの「今すぐ更新」
//! - **NotificationIntake**: バックグラウンドの push ハンドラ
//! - **AppBuilder**: ワイヤリングと起動時検証
//!
//! # データフロー
//! - アプリの書き込み -> store -> trigger -> renderer
//! - タップ -> relay -> store -> renderer
//! - push -> intake -> 通知 -> （クリック）アプリのウィンドウ

pub mod builder;
pub mod context;
pub mod intake;
pub mod relay;
pub mod renderer;
pub mod trigger;

pub use self::builder::{AppBuilder, BuildError, WidgetApp};
pub use self::context::SyncContext;
pub use self::intake::{IntakeEvent, IntakeOutcome, NotificationIntake, build_request};
pub use self::relay::{ActionRelay, CompletionReport};
pub use self::renderer::WidgetRenderer;
pub use self::trigger::{METHOD_UPDATE_WIDGET, MethodResult, UpdateTrigger, WIDGET_CHANNEL};


#[cfg(test)]
mod tests {
    use super::test_support::Harness;
    use super::*;
    use crate::domain::{Intent, PushPayload, TaskKey, TaskRecord, TaskSnapshot};
    use serde_json::json;

    #[test]
    fn complete_from_widget_then_render_shows_empty_state() {
        let h = Harness::with_tasks(r#"[{"key":1,"title":"Buy milk","isCompleted":false}]"#);

        h.app
            .relay()
            .on_receive(&Intent::complete_task(TaskKey::new(1), "taskify"));

        let stored: serde_json::Value =
            serde_json::from_str(&h.store_get("flutter.widget_tasks").unwrap()).unwrap();
        assert_eq!(
            stored,
            json!([{ "key": 1, "title": "Buy milk", "isCompleted": true, "completedFromWidget": true }])
        );

        for surface in h.surfaces() {
            let view = h.host.view(surface).unwrap();
            assert!(view.is_empty_state());
            assert_eq!(view.title, None);
            assert_eq!(view.visible_rows(), 0);
        }
    }

    #[test]
    fn app_publish_is_visible_to_widget_immediately() {
        let h = Harness::empty();
        let snapshot = TaskSnapshot::new(vec![
            TaskRecord::new(TaskKey::new(10), "Pay rent"),
            TaskRecord::new(TaskKey::new(11), "Gym"),
        ]);
        h.app.publish_snapshot(&snapshot).unwrap();

        let view = h.host.view(h.surfaces()[0]).unwrap();
        assert_eq!(view.title.as_deref(), Some("2 задачи за деня"));
        assert_eq!(h.host.broadcasts().len(), 1);
        assert_eq!(h.app.read_snapshot(), snapshot);
    }

    #[test]
    fn app_overwrite_after_widget_completion_wins() {
        // app loaded its copy before the widget tap, then wrote it back
        let h = Harness::with_tasks(r#"[{"key":1,"title":"Buy milk"}]"#);
        let stale = h.app.read_snapshot();

        h.app.relay().complete(TaskKey::new(1));
        assert!(h.snapshot().records()[0].completed_from_widget());

        h.app.publish_snapshot(&stale).unwrap();
        let snapshot = h.snapshot();
        let record = &snapshot.records()[0];
        assert!(!record.is_completed());
        assert!(!record.completed_from_widget());
    }

    #[tokio::test]
    async fn push_then_click_resumes_app() {
        let h = Harness::empty();
        let intake = h.app.intake().unwrap();

        let payload: PushPayload = serde_json::from_value(json!({
            "notification": { "title": "Due soon", "body": "Buy milk" },
            "data": { "taskId": "1" }
        }))
        .unwrap();
        let shown = intake.handle(IntakeEvent::Message(payload)).await;
        assert!(matches!(shown, IntakeOutcome::Displayed(ref r) if r.tag == "1"));
        assert!(h.notifier.shown("1").is_some());

        let resumed = intake
            .handle(IntakeEvent::Click { tag: "1".into() })
            .await;
        assert!(matches!(resumed, IntakeOutcome::Resumed(_)));
        assert!(h.notifier.shown("1").is_none());
        assert_eq!(h.notifier.opened(), vec!["/".to_string()]);
    }
}
