//! WidgetRenderer - 共有スナップショットをウィジェットの表示に変換する
//!
//! # フロー
//! 1. ストアからスナップショットと言語設定を読む
//! 2. 寛容にデコードする（読めない状態は空の状態として扱う）
//! 3. 行数上限付きの `RenderedView` を導出する（`RenderedView::from_snapshot`）
//! 4. ホストのウィジェットに反映する
//!
//! ここからストアへの書き込みは一切なく、ホストにエラーも漏らさない。
//! 失敗はすべて（縮退した）描画かログ 1 行で終わる。

use crate::codec::SnapshotCodec;
use crate::domain::{DispatchError, DomainEvent, RenderedView, SurfaceId};

use super::context::SyncContext;

pub struct WidgetRenderer {
    ctx: SyncContext,
}

impl WidgetRenderer {
    pub fn new(ctx: SyncContext) -> Self {
        Self { ctx }
    }

    /// The view every surface would show right now.
    pub fn current_view(&self) -> RenderedView {
        self.derive().0
    }

    /// Returns the view and whether it was degraded to the empty state
    /// because the stored state could not be read.
    fn derive(&self) -> (RenderedView, bool) {
        let config = self.ctx.config();
        let language = self.ctx.read_language();
        let capacity = config.display_capacity;

        let raw = match self.ctx.read_tasks() {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "snapshot unreadable, rendering empty state");
                return (RenderedView::empty(language, capacity), true);
            }
        };

        match raw.as_deref().map(SnapshotCodec::decode) {
            None => (RenderedView::empty(language, capacity), false),
            Some(Ok(snapshot)) => (
                RenderedView::from_snapshot(
                    &snapshot,
                    language,
                    capacity,
                    &config.deep_link_scheme,
                ),
                false,
            ),
            Some(Err(err)) => {
                tracing::warn!(error = %err, "snapshot malformed, rendering empty state");
                (RenderedView::empty(language, capacity), true)
            }
        }
    }

    pub fn try_render(&self, surface: SurfaceId) -> Result<RenderedView, DispatchError> {
        let (view, degraded) = self.derive();
        self.ctx.surfaces.apply(surface, &view)?;
        tracing::debug!(%surface, rows = view.visible_rows(), degraded, "surface rendered");
        self.ctx.emit(DomainEvent::SurfaceRendered {
            surface,
            visible_rows: view.visible_rows(),
            empty_state: view.is_empty_state(),
            degraded,
        });
        Ok(view)
    }

    /// Render one surface. Failures are logged, never returned.
    pub fn render(&self, surface: SurfaceId) {
        if let Err(err) = self.try_render(surface) {
            tracing::warn!(%surface, error = %err, "render failed");
            self.ctx.emit(DomainEvent::DispatchFailed {
                stage: "render",
                reason: err.to_string(),
            });
        }
    }

    pub fn render_surfaces(&self, surfaces: &[SurfaceId]) {
        for &surface in surfaces {
            self.render(surface);
        }
    }

    /// Render every placed surface. Returns how many were attempted.
    pub fn render_all(&self) -> usize {
        let surfaces = self.ctx.surfaces.placed_surfaces();
        self.render_surfaces(&surfaces);
        surfaces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::Harness;
    use crate::domain::{Language, RowSlot};

    #[test]
    fn renders_pending_tasks_into_every_surface() {
        let h = Harness::with_tasks(
            r#"[{"key":1,"title":"Buy milk","isCompleted":false},
                {"key":2,"title":"Done","isCompleted":true}]"#,
        );
        assert_eq!(h.app.renderer().render_all(), 2);

        for surface in h.surfaces() {
            let view = h.host.view(surface).unwrap();
            assert_eq!(view.title.as_deref(), Some("1 задача за деня"));
            assert_eq!(view.visible_rows(), 1);
        }
    }

    #[test]
    fn language_preference_switches_strings() {
        let h = Harness::with_tasks(r#"[{"key":1,"title":"a"},{"key":2,"title":"b"}]"#);
        h.store_put("flutter.app_language", "en");
        let view = h.app.renderer().current_view();
        assert_eq!(view.title.as_deref(), Some("2 tasks for today"));
    }

    #[test]
    fn corrupt_snapshot_replaces_stale_content_with_empty_state() {
        let h = Harness::with_tasks(r#"[{"key":1,"title":"Buy milk"}]"#);
        let surface = h.surfaces()[0];
        h.app.renderer().render(surface);
        assert_eq!(h.host.view(surface).unwrap().visible_rows(), 1);

        h.store_put("flutter.widget_tasks", "{not json");
        h.app.renderer().render(surface);

        let view = h.host.view(surface).unwrap();
        assert_eq!(view, RenderedView::empty(Language::Bulgarian, 3));
        assert!(h.events().iter().any(|e| matches!(
            e,
            DomainEvent::SurfaceRendered { degraded: true, .. }
        )));
    }

    #[test]
    fn missing_snapshot_is_a_plain_empty_state() {
        let h = Harness::empty();
        let view = h.app.renderer().current_view();
        assert!(view.is_empty_state());
        assert_eq!(view.title, None);
        assert!(view.rows.iter().all(|r| *r == RowSlot::Hidden));
    }

    #[test]
    fn failing_surface_does_not_stop_the_others() {
        let h = Harness::with_failing_surface(r#"[{"key":1,"title":"a"}]"#);
        assert_eq!(h.app.renderer().render_all(), 2);

        assert!(h.host.view(h.surfaces()[0]).is_none());
        assert!(h.host.view(h.surfaces()[1]).is_some());
        assert!(h.events().iter().any(|e| matches!(
            e,
            DomainEvent::DispatchFailed { stage: "render", .. }
        )));
    }
}
