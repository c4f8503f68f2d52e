//! Domain model (ids, task records, snapshot, views, commands, payloads, ...).

pub mod command;
pub mod errors;
pub mod events;
pub mod ids;
pub mod language;
pub mod push;
pub mod snapshot;
pub mod task;
pub mod view;

pub use command::{
    ACTION_APPWIDGET_UPDATE, ACTION_COMPLETE_TASK, EXTRA_TASK_KEY, Intent, WidgetCommand,
};
pub use errors::{DecodeError, DispatchError, NotificationError, StoreError, SurfaceError};
pub use events::{DomainEvent, RecordedEvent};
pub use ids::{SurfaceId, TaskKey};
pub use language::{Language, UnknownLanguage};
pub use push::{ClickOutcome, ClientWindow, NotificationRequest, PushNotification, PushPayload};
pub use snapshot::TaskSnapshot;
pub use task::TaskRecord;
pub use view::{PendingAction, RenderedView, RowSlot};
