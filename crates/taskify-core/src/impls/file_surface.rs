//! FileSurfaceHost - writes each surface's view as a JSON file.
//!
//! Lets a separate process (a launcher, a test harness, a person with `cat`)
//! observe exactly what each widget would show.

use std::path::{Path, PathBuf};

use crate::domain::{Intent, RenderedView, SurfaceError, SurfaceId};
use crate::ports::SurfaceHost;

use super::atomic::write_atomic;

pub const BROADCAST_FILE: &str = "last_broadcast.json";

pub struct FileSurfaceHost {
    dir: PathBuf,
    placed: Vec<SurfaceId>,
}

impl FileSurfaceHost {
    pub fn new(dir: impl Into<PathBuf>, placed: Vec<SurfaceId>) -> Self {
        Self {
            dir: dir.into(),
            placed,
        }
    }

    pub fn view_path(&self, surface: SurfaceId) -> PathBuf {
        self.dir.join(format!("{surface}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn read_view(&self, surface: SurfaceId) -> Result<RenderedView, SurfaceError> {
        let text = std::fs::read_to_string(self.view_path(surface))?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl SurfaceHost for FileSurfaceHost {
    fn placed_surfaces(&self) -> Vec<SurfaceId> {
        self.placed.clone()
    }

    fn apply(&self, surface: SurfaceId, view: &RenderedView) -> Result<(), SurfaceError> {
        if !self.placed.contains(&surface) {
            return Err(SurfaceError::NotPlaced(surface.to_string()));
        }
        let json = serde_json::to_vec_pretty(view)?;
        write_atomic(&self.dir, &self.view_path(surface), &json)?;
        Ok(())
    }

    fn broadcast(&self, intent: &Intent) -> Result<(), SurfaceError> {
        let json = serde_json::to_vec_pretty(intent)?;
        write_atomic(&self.dir, &self.dir.join(BROADCAST_FILE), &json)?;
        tracing::info!(action = %intent.action, "broadcast sent");
        Ok(())
    }
}
