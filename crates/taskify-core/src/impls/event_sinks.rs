//! EventSink implementations.

use std::sync::Mutex;

use crate::domain::{DomainEvent, RecordedEvent};
use crate::ports::EventSink;

/// Drops every event.
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &RecordedEvent) {}
}

/// Logs events through `tracing` at `info` (failures at `warn`).
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, recorded: &RecordedEvent) {
        let json = serde_json::to_string(recorded).unwrap_or_default();
        match &recorded.event {
            DomainEvent::DispatchFailed { .. } => tracing::warn!(target: "taskify::events", "{json}"),
            _ => tracing::info!(target: "taskify::events", "{json}"),
        }
    }
}

/// Keeps every event in memory, in order.
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .map(|events| events.iter().map(|r| r.event.clone()).collect())
            .unwrap_or_default()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &RecordedEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
