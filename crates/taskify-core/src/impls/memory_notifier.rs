//! InMemoryNotificationHost - すべてを記録する通知ホスト（テスト用）

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{ClientWindow, NotificationError, NotificationRequest};
use crate::ports::NotificationHost;

#[derive(Default)]
struct HostState {
    shown: BTreeMap<String, NotificationRequest>,
    closed: Vec<String>,
    focused: Vec<String>,
    opened: Vec<String>,
}

pub struct InMemoryNotificationHost {
    windows: Vec<ClientWindow>,
    can_open: bool,
    state: Mutex<HostState>,
}

impl InMemoryNotificationHost {
    pub fn new(windows: Vec<ClientWindow>) -> Self {
        Self {
            windows,
            can_open: true,
            state: Mutex::new(HostState::default()),
        }
    }

    pub fn without_open_window(mut self) -> Self {
        self.can_open = false;
        self
    }

    /// Currently displayed notification for `tag`.
    pub fn shown(&self, tag: &str) -> Option<NotificationRequest> {
        self.state.lock().ok()?.shown.get(tag).cloned()
    }

    pub fn closed(&self) -> Vec<String> {
        self.state.lock().map(|s| s.closed.clone()).unwrap_or_default()
    }

    pub fn focused(&self) -> Vec<String> {
        self.state.lock().map(|s| s.focused.clone()).unwrap_or_default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.state.lock().map(|s| s.opened.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NotificationHost for InMemoryNotificationHost {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let mut state = self.state.lock().map_err(|_| NotificationError::Poisoned)?;
        // same tag replaces the previous notification
        state.shown.insert(request.tag.clone(), request.clone());
        Ok(())
    }

    async fn close(&self, tag: &str) -> Result<(), NotificationError> {
        let mut state = self.state.lock().map_err(|_| NotificationError::Poisoned)?;
        state.shown.remove(tag);
        state.closed.push(tag.to_string());
        Ok(())
    }

    async fn window_clients(&self) -> Result<Vec<ClientWindow>, NotificationError> {
        Ok(self.windows.clone())
    }

    async fn focus(&self, client: &ClientWindow) -> Result<(), NotificationError> {
        if !self.windows.iter().any(|w| w.id == client.id) {
            return Err(NotificationError::UnknownClient(client.id.clone()));
        }
        let mut state = self.state.lock().map_err(|_| NotificationError::Poisoned)?;
        state.focused.push(client.id.clone());
        Ok(())
    }

    async fn open_window(&self, url: &str) -> Result<(), NotificationError> {
        if !self.can_open {
            return Err(NotificationError::Rejected("open_window unsupported".into()));
        }
        let mut state = self.state.lock().map_err(|_| NotificationError::Poisoned)?;
        state.opened.push(url.to_string());
        Ok(())
    }

    fn can_open_windows(&self) -> bool {
        self.can_open
    }
}
