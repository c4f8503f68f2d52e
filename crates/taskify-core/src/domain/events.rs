//! Domain events emitted by the widget, relay, trigger and intake.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{SurfaceId, TaskKey};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    SurfaceRendered {
        surface: SurfaceId,
        visible_rows: usize,
        empty_state: bool,
        /// The snapshot could not be read and the empty state was substituted.
        degraded: bool,
    },
    TaskCompletedFromWidget {
        key: TaskKey,
        matched: usize,
    },
    WidgetsRefreshRequested {
        surfaces: usize,
    },
    NotificationShown {
        tag: String,
    },
    NotificationClicked {
        tag: String,
        focused_existing: bool,
    },
    DispatchFailed {
        stage: &'static str,
        reason: String,
    },
}

/// An event plus the time it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: DomainEvent,
}
