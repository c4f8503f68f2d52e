//! SurfaceHost port - OS が管理するウィジェット
//!
//! ウィジェットの所有者はホスト。この crate は完成した表示を流し込み、
//! 今どれが配置されているかを問い合わせるだけ。

use crate::domain::{Intent, RenderedView, SurfaceError, SurfaceId};

pub trait SurfaceHost: Send + Sync {
    /// Ids of every widget surface currently placed by the user.
    fn placed_surfaces(&self) -> Vec<SurfaceId>;

    /// Replace the content of one surface.
    fn apply(&self, surface: SurfaceId, view: &RenderedView) -> Result<(), SurfaceError>;

    /// Send a system-wide broadcast so other listeners of the same action react.
    fn broadcast(&self, intent: &Intent) -> Result<(), SurfaceError>;
}
