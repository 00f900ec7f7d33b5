//! Event bus: channel-backed dispatch to pluggable sinks.
//!
//! Producers `emit` into a `std::sync::mpsc` channel; `flush` drains it
//! into every registered sink.

use std::sync::mpsc;

use crate::events::ContactEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for contact telemetry.
pub struct EventBus {
    sender: mpsc::Sender<ContactEvent>,
    receiver: mpsc::Receiver<ContactEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A sender for producers on other threads.
    pub fn sender(&self) -> mpsc::Sender<ContactEvent> {
        self.sender.clone()
    }

    /// Emit an event. If the bus is disabled, this is a no-op.
    pub fn emit(&self, event: ContactEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives in `self`, so the send cannot fail.
        let _ = self.sender.send(event);
    }

    /// Dispatches all pending events to the sinks; returns how many were
    /// dispatched.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            count += 1;
        }
        count
    }

    /// Flushes and lets every sink finalize.
    pub fn shutdown(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Names of the registered sinks.
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
