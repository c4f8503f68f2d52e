//! Widget commands and the OS intent they arrive in.
//!
//! The host routes messages by a string action name. That string is decoded
//! once, at the boundary, into a closed `WidgetCommand` and matched
//! exhaustively from there on.

use serde::{Deserialize, Serialize};

use super::{SurfaceId, TaskKey};

/// Action name of the "complete task" broadcast.
pub const ACTION_COMPLETE_TASK: &str = "com.example.task_manager.ACTION_COMPLETE_TASK";

/// Action name of the host's widget update broadcast.
pub const ACTION_APPWIDGET_UPDATE: &str = "android.appwidget.action.APPWIDGET_UPDATE";

/// Extra carrying the task key of a completion.
pub const EXTRA_TASK_KEY: &str = "task_key";

/// An addressable message as the host delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub action: String,

    /// Integer extra `task_key`, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_key: Option<i64>,

    /// Surface ids for update broadcasts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub surface_ids: Vec<SurfaceId>,

    /// Data URI. Distinct URIs keep the host from collapsing pending actions
    /// for different tasks into one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl Intent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            task_key: None,
            surface_ids: Vec::new(),
            data: None,
        }
    }

    /// Completion intent bound to one row, e.g. `taskify://complete/7`.
    pub fn complete_task(key: TaskKey, scheme: &str) -> Self {
        Self {
            task_key: Some(key.value()),
            data: Some(format!("{scheme}://complete/{}", key.value())),
            ..Self::new(ACTION_COMPLETE_TASK)
        }
    }

    pub fn update(surface_ids: Vec<SurfaceId>) -> Self {
        Self {
            surface_ids,
            ..Self::new(ACTION_APPWIDGET_UPDATE)
        }
    }
}

/// Closed set of commands the widget process understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    /// Mark a task completed. Carries `TaskKey::ABSENT` when the extra was missing.
    CompleteTask(TaskKey),
    /// Re-render the listed surfaces.
    Update(Vec<SurfaceId>),
    /// Any other action name.
    Unknown(String),
}

impl WidgetCommand {
    pub fn from_intent(intent: &Intent) -> Self {
        match intent.action.as_str() {
            ACTION_COMPLETE_TASK => {
                WidgetCommand::CompleteTask(intent.task_key.map_or(TaskKey::ABSENT, TaskKey::new))
            }
            ACTION_APPWIDGET_UPDATE => WidgetCommand::Update(intent.surface_ids.clone()),
            other => WidgetCommand::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_intent_decodes_to_complete_task() {
        let intent = Intent::complete_task(TaskKey::new(7), "taskify");
        assert_eq!(intent.data.as_deref(), Some("taskify://complete/7"));
        assert_eq!(
            WidgetCommand::from_intent(&intent),
            WidgetCommand::CompleteTask(TaskKey::new(7))
        );
    }

    #[test]
    fn completion_without_extra_is_absent() {
        let intent = Intent::new(ACTION_COMPLETE_TASK);
        assert_eq!(
            WidgetCommand::from_intent(&intent),
            WidgetCommand::CompleteTask(TaskKey::ABSENT)
        );
    }

    #[test]
    fn update_and_unknown_actions() {
        let ids = vec![SurfaceId::new(1), SurfaceId::new(2)];
        assert_eq!(
            WidgetCommand::from_intent(&Intent::update(ids.clone())),
            WidgetCommand::Update(ids)
        );
        assert_eq!(
            WidgetCommand::from_intent(&Intent::new("android.intent.action.BOOT_COMPLETED")),
            WidgetCommand::Unknown("android.intent.action.BOOT_COMPLETED".to_string())
        );
    }

    #[test]
    fn distinct_tasks_get_distinct_data_uris() {
        let a = Intent::complete_task(TaskKey::new(1), "taskify");
        let b = Intent::complete_task(TaskKey::new(2), "taskify");
        assert_ne!(a.data, b.data);
    }
}
