//! NotificationHost that prints to stdout. Windows come from `--window`.

use async_trait::async_trait;
use taskify_core::domain::{ClientWindow, NotificationError, NotificationRequest};
use taskify_core::ports::NotificationHost;

pub struct ConsoleNotificationHost {
    windows: Vec<ClientWindow>,
}

impl ConsoleNotificationHost {
    pub fn new(window_urls: &[String]) -> Self {
        let windows = window_urls
            .iter()
            .enumerate()
            .map(|(i, url)| ClientWindow {
                id: format!("window-{i}"),
                url: url.clone(),
                focusable: true,
            })
            .collect();
        Self { windows }
    }
}

#[async_trait]
impl NotificationHost for ConsoleNotificationHost {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let json = serde_json::to_string_pretty(request)
            .map_err(|e| NotificationError::Rejected(e.to_string()))?;
        println!("show notification:\n{json}");
        Ok(())
    }

    async fn close(&self, tag: &str) -> Result<(), NotificationError> {
        println!("close notification: {tag}");
        Ok(())
    }

    async fn window_clients(&self) -> Result<Vec<ClientWindow>, NotificationError> {
        Ok(self.windows.clone())
    }

    async fn focus(&self, client: &ClientWindow) -> Result<(), NotificationError> {
        println!("focus {} ({})", client.id, client.url);
        Ok(())
    }

    async fn open_window(&self, url: &str) -> Result<(), NotificationError> {
        println!("open window: {url}");
        Ok(())
    }
}
