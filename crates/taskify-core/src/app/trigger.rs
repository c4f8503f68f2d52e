//! UpdateTrigger - アプリ側から「今すぐウィジェットを更新」を要求する
//!
//! アプリがスナップショットを書いた直後に呼ばれ、次の定期更新を待たずに
//! ウィジェットを描き直す。fire-and-forget で、アプリ自身の状態は
//! この結果に依存しない。

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::{DomainEvent, Intent};

use super::context::SyncContext;
use super::renderer::WidgetRenderer;

/// Method channel the app calls into.
pub const WIDGET_CHANNEL: &str = "com.example.task_manager/widget";

/// The one method on `WIDGET_CHANNEL`.
pub const METHOD_UPDATE_WIDGET: &str = "updateWidget";

/// Reply to a method-channel call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodResult {
    Success,
    NotImplemented,
}

pub struct UpdateTrigger {
    ctx: SyncContext,
    renderer: Arc<WidgetRenderer>,
}

impl UpdateTrigger {
    pub fn new(ctx: SyncContext, renderer: Arc<WidgetRenderer>) -> Self {
        Self { ctx, renderer }
    }

    pub fn handle_method_call(&self, method: &str) -> MethodResult {
        match method {
            METHOD_UPDATE_WIDGET => {
                self.update_widgets();
                MethodResult::Success
            }
            other => {
                tracing::debug!(method = other, "method not implemented");
                MethodResult::NotImplemented
            }
        }
    }

    /// Re-render every placed surface, then broadcast an update so any other
    /// listener of the same action refreshes too.
    pub fn update_widgets(&self) {
        let surfaces = self.ctx.surfaces.placed_surfaces();
        self.renderer.render_surfaces(&surfaces);

        let count = surfaces.len();
        if let Err(err) = self.ctx.surfaces.broadcast(&Intent::update(surfaces)) {
            tracing::warn!(error = %err, "widget update broadcast failed");
        }
        self.ctx
            .emit(DomainEvent::WidgetsRefreshRequested { surfaces: count });
    }

    /// Run `update_widgets` on the blocking pool. The handle may be dropped.
    pub fn request_update(self: &Arc<Self>) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::task::spawn_blocking(move || this.update_widgets())
    }
}
