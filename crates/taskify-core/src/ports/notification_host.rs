//! NotificationHost port - システム通知とアプリのウィンドウ
//!
//! ホストが後から解決するので async（バックグラウンドのハンドラは
//! それらが片付くまで生き続ける）。

use async_trait::async_trait;

use crate::domain::{ClientWindow, NotificationError, NotificationRequest};

#[async_trait]
pub trait NotificationHost: Send + Sync {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError>;

    /// Dismiss the notification with `tag`. Unknown tags are ignored.
    async fn close(&self, tag: &str) -> Result<(), NotificationError>;

    /// All window clients, including ones this handler does not control.
    async fn window_clients(&self) -> Result<Vec<ClientWindow>, NotificationError>;

    async fn focus(&self, client: &ClientWindow) -> Result<(), NotificationError>;

    async fn open_window(&self, url: &str) -> Result<(), NotificationError>;

    /// Whether `open_window` is available on this host.
    fn can_open_windows(&self) -> bool {
        true
    }
}
