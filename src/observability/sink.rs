//! Command event sinks.

use std::sync::{Arc, Mutex};

use axum::http::Method;

/// A single handled command request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    pub path: String,
    pub method: Method,
    /// Human-readable description of the endpoint, e.g. "Start Request received".
    pub description: String,
    pub request_id: Option<String>,
}

/// Destination for command events.
pub trait EventSink: Send + Sync + std::fmt::Debug {
    /// Record that a command fired. Must not block and never fails.
    fn record(&self, event: &CommandEvent);
}

/// Writes each event as an `info` line through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &CommandEvent) {
        tracing::info!(
            path = %event.path,
            method = %event.method,
            request_id = event.request_id.as_deref().unwrap_or("unknown"),
            "{}",
            event.description
        );
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &CommandEvent) {}
}

/// Keeps events in memory so tests can assert on them.
#[derive(Debug, Default, Clone)]
pub struct CapturingSink {
    events: Arc<Mutex<Vec<CommandEvent>>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<CommandEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CommandEvent>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventSink for CapturingSink {
    fn record(&self, event: &CommandEvent) {
        self.lock().push(event.clone());
    }
}

/// Pick the sink for the `log_requests` setting.
pub fn from_config(log_requests: bool) -> Arc<dyn EventSink> {
    if log_requests {
        Arc::new(TracingSink)
    } else {
        Arc::new(NullSink)
    }
}
