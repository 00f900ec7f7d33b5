//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::events::{ContactEvent, EventKind};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &ContactEvent);

    /// Called when the bus shuts down.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// The buffer is shared, so events stay inspectable after the sink has
/// been boxed into a bus.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<ContactEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared buffer.
    pub fn buffer(&self) -> Arc<Mutex<Vec<ContactEvent>>> {
        Arc::clone(&self.events)
    }

    /// Copy of the events collected so far.
    pub fn events(&self) -> Vec<ContactEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &ContactEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs events through `tracing`.
///
/// Root-find fallbacks are always logged at `WARN`; other events at the
/// configured level.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &ContactEvent) {
        if let EventKind::RootFindFallback {
            penetration,
            iterations,
            residual,
        } = event.kind
        {
            tracing::warn!(
                sequence = event.sequence,
                penetration,
                iterations,
                residual,
                "root_find_fallback"
            );
            return;
        }

        let sequence = event.sequence;
        let kind = &event.kind;
        if self.level == Level::ERROR {
            tracing::error!(sequence, event = ?kind, "contact_event");
        } else if self.level == Level::WARN {
            tracing::warn!(sequence, event = ?kind, "contact_event");
        } else if self.level == Level::INFO {
            tracing::info!(sequence, event = ?kind, "contact_event");
        } else if self.level == Level::DEBUG {
            tracing::debug!(sequence, event = ?kind, "contact_event");
        } else {
            tracing::trace!(sequence, event = ?kind, "contact_event");
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
