//! Rendered view: what one widget surface shows.
//!
//! Derived on every render call from the snapshot and the language. Never
//! persisted, never cached.

use serde::{Deserialize, Serialize};

use super::{Intent, Language, TaskKey, TaskSnapshot};

/// What happens when the user taps a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingAction {
    /// Open (or resume) the main application.
    LaunchApp,
    /// Deliver `intent` back to the widget process.
    ///
    /// `request_code` is the task key, so each row owns a separate pending action.
    Broadcast { request_code: i64, intent: Intent },
}

/// One of the fixed row slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "visibility", rename_all = "snake_case")]
pub enum RowSlot {
    Visible {
        title: String,
        /// Checkbox action. `None` when the record has no usable key.
        action: Option<PendingAction>,
    },
    Hidden,
}

impl RowSlot {
    pub fn is_visible(&self) -> bool {
        matches!(self, RowSlot::Visible { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedView {
    /// Count title; `None` means the title view is hidden.
    pub title: Option<String>,
    /// Empty-state text; `None` means the empty container is hidden.
    pub empty_text: Option<String>,
    /// Always exactly `capacity` slots.
    pub rows: Vec<RowSlot>,
    /// Tap on the container, regardless of task state.
    pub container_action: PendingAction,
}

impl RenderedView {
    /// Empty state. Also used when the snapshot cannot be read.
    pub fn empty(language: Language, capacity: usize) -> Self {
        Self {
            title: None,
            empty_text: Some(language.empty_text().to_string()),
            rows: vec![RowSlot::Hidden; capacity],
            container_action: PendingAction::LaunchApp,
        }
    }

    /// Up to `capacity` incomplete tasks in snapshot order, titled with the
    /// full incomplete count.
    pub fn from_snapshot(
        snapshot: &TaskSnapshot,
        language: Language,
        capacity: usize,
        scheme: &str,
    ) -> Self {
        let pending: Vec<_> = snapshot.incomplete().collect();
        if pending.is_empty() {
            return Self::empty(language, capacity);
        }

        let rows = (0..capacity)
            .map(|i| match pending.get(i) {
                Some(record) => RowSlot::Visible {
                    title: record.title().into_owned(),
                    action: record
                        .is_addressable()
                        .then(|| complete_action(record.key(), scheme)),
                },
                None => RowSlot::Hidden,
            })
            .collect();

        Self {
            title: Some(language.count_title(pending.len())),
            empty_text: None,
            rows,
            container_action: PendingAction::LaunchApp,
        }
    }

    pub fn is_empty_state(&self) -> bool {
        self.empty_text.is_some()
    }

    pub fn visible_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.is_visible()).count()
    }
}

fn complete_action(key: TaskKey, scheme: &str) -> PendingAction {
    PendingAction::Broadcast {
        request_code: key.value(),
        intent: Intent::complete_task(key, scheme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskRecord;

    fn pending(n: i64) -> TaskSnapshot {
        TaskSnapshot::new(
            (1..=n)
                .map(|k| TaskRecord::new(TaskKey::new(k), format!("task {k}")))
                .collect(),
        )
    }

    #[test]
    fn no_incomplete_tasks_is_empty_state() {
        let snapshot = TaskSnapshot::new(vec![TaskRecord::new(TaskKey::new(1), "done").completed()]);
        let view = RenderedView::from_snapshot(&snapshot, Language::English, 3, "taskify");

        assert!(view.is_empty_state());
        assert_eq!(view.title, None);
        assert_eq!(view.empty_text.as_deref(), Some("All done!"));
        assert_eq!(view.rows, vec![RowSlot::Hidden; 3]);
    }

    #[test]
    fn single_task_uses_singular_title() {
        let view = RenderedView::from_snapshot(&pending(1), Language::English, 3, "taskify");
        assert_eq!(view.title.as_deref(), Some("1 task for today"));
        assert_eq!(view.visible_rows(), 1);
        assert!(!view.rows[1].is_visible());
        assert!(!view.rows[2].is_visible());
    }

    #[test]
    fn five_tasks_show_three_rows_and_count_five() {
        let view = RenderedView::from_snapshot(&pending(5), Language::Bulgarian, 3, "taskify");
        assert_eq!(view.title.as_deref(), Some("5 задачи за деня"));
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.visible_rows(), 3);
        assert_eq!(view.empty_text, None);
    }

    #[test]
    fn each_row_is_bound_to_its_own_key() {
        let view = RenderedView::from_snapshot(&pending(2), Language::English, 3, "taskify");
        let codes: Vec<_> = view
            .rows
            .iter()
            .filter_map(|row| match row {
                RowSlot::Visible {
                    action: Some(PendingAction::Broadcast { request_code, .. }),
                    ..
                } => Some(*request_code),
                _ => None,
            })
            .collect();
        assert_eq!(codes, vec![1, 2]);
    }

    #[test]
    fn row_without_key_has_no_action() {
        let snapshot = TaskSnapshot::new(vec![TaskRecord::new(TaskKey::ABSENT, "legacy")]);
        let view = RenderedView::from_snapshot(&snapshot, Language::English, 3, "taskify");
        assert_eq!(
            view.rows[0],
            RowSlot::Visible {
                title: "legacy".to_string(),
                action: None
            }
        );
    }

    #[test]
    fn container_always_launches_app() {
        assert_eq!(
            RenderedView::empty(Language::English, 3).container_action,
            PendingAction::LaunchApp
        );
        assert_eq!(
            RenderedView::from_snapshot(&pending(2), Language::English, 3, "taskify").container_action,
            PendingAction::LaunchApp
        );
    }
}
