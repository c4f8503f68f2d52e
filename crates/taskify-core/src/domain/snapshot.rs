//! Task snapshot: the single shared document.

use serde::{Deserialize, Serialize};

use super::{TaskKey, TaskRecord};

/// Ordered sequence of task records, stored as one blob under one store key.
///
/// The snapshot is always replaced as a whole. There is no partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskSnapshot {
    records: Vec<TaskRecord>,
}

impl TaskSnapshot {
    pub fn new(records: Vec<TaskRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TaskRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records not yet completed, in snapshot order.
    pub fn incomplete(&self) -> impl Iterator<Item = &TaskRecord> {
        self.records.iter().filter(|r| !r.is_completed())
    }

    /// Marks every record with `key` as completed from the widget.
    ///
    /// Keys are not assumed unique, so all matches are updated.
    /// Returns the number of records touched. The absent key matches nothing.
    pub fn complete_from_widget(&mut self, key: TaskKey) -> usize {
        if key.is_absent() {
            return 0;
        }
        let mut matched = 0;
        for record in self.records.iter_mut().filter(|r| r.key() == key) {
            record.complete_from_widget();
            matched += 1;
        }
        matched
    }
}

impl From<Vec<TaskRecord>> for TaskSnapshot {
    fn from(records: Vec<TaskRecord>) -> Self {
        Self::new(records)
    }
}
