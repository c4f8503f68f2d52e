//! RecordingSurfaceHost - keeps the last view per surface in memory.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use crate::domain::{Intent, RenderedView, SurfaceError, SurfaceId};
use crate::ports::SurfaceHost;

#[derive(Default)]
struct Recorded {
    views: BTreeMap<SurfaceId, RenderedView>,
    applies: usize,
    broadcasts: Vec<Intent>,
}

/// In-process `SurfaceHost` for tests and embedding.
///
/// Surfaces listed in `failing` reject every `apply`.
pub struct RecordingSurfaceHost {
    placed: Vec<SurfaceId>,
    failing: HashSet<SurfaceId>,
    recorded: Mutex<Recorded>,
}

impl RecordingSurfaceHost {
    pub fn new(placed: Vec<SurfaceId>) -> Self {
        Self {
            placed,
            failing: HashSet::new(),
            recorded: Mutex::new(Recorded::default()),
        }
    }

    pub fn failing_on(mut self, surface: SurfaceId) -> Self {
        self.failing.insert(surface);
        self
    }

    pub fn view(&self, surface: SurfaceId) -> Option<RenderedView> {
        self.recorded.lock().ok()?.views.get(&surface).cloned()
    }

    pub fn apply_count(&self) -> usize {
        self.recorded.lock().map(|r| r.applies).unwrap_or(0)
    }

    pub fn broadcasts(&self) -> Vec<Intent> {
        self.recorded
            .lock()
            .map(|r| r.broadcasts.clone())
            .unwrap_or_default()
    }
}

impl SurfaceHost for RecordingSurfaceHost {
    fn placed_surfaces(&self) -> Vec<SurfaceId> {
        self.placed.clone()
    }

    fn apply(&self, surface: SurfaceId, view: &RenderedView) -> Result<(), SurfaceError> {
        if self.failing.contains(&surface) {
            return Err(SurfaceError::Io(std::io::Error::other("surface rejected update")));
        }
        let mut recorded = self.recorded.lock().map_err(|_| SurfaceError::Poisoned)?;
        recorded.views.insert(surface, view.clone());
        recorded.applies += 1;
        Ok(())
    }

    fn broadcast(&self, intent: &Intent) -> Result<(), SurfaceError> {
        let mut recorded = self.recorded.lock().map_err(|_| SurfaceError::Poisoned)?;
        recorded.broadcasts.push(intent.clone());
        Ok(())
    }
}
