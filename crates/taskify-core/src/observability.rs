use serde::{Deserialize, Serialize};

use crate::domain::TaskSnapshot;

/// Counts over one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStats {
    pub total: usize,
    pub incomplete: usize,
    pub completed_from_widget: usize,
    /// Records without a usable key.
    pub unaddressable: usize,
}

impl SnapshotStats {
    pub fn from_snapshot(snapshot: &TaskSnapshot) -> Self {
        let mut stats = SnapshotStats {
            total: snapshot.len(),
            ..Default::default()
        };
        for record in snapshot.records() {
            if !record.is_completed() {
                stats.incomplete += 1;
            }
            if record.completed_from_widget() {
                stats.completed_from_widget += 1;
            }
            if !record.is_addressable() {
                stats.unaddressable += 1;
            }
        }
        stats
    }
}
