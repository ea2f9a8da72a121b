//! Event emitter trait for registry event broadcasting.
//!
//! Implementations handle transport details (channels, terminal output, etc.).

use std::sync::{Arc, Mutex};

use crate::events::AppEvent;

/// Trait for emitting application events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and CLI contexts that don't need events
/// - `RecordingEmitter` - Keeps every event in memory for inspection
/// - Adapter-specific implementations
pub trait AppEventEmitter: Send + Sync {
    /// Emit an application event.
    ///
    /// This method should not block.
    fn emit(&self, event: AppEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn AppEventEmitter>;
}

/// A no-op event emitter.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    pub const fn new() -> Self {
        Self
    }
}

impl AppEventEmitter for NoopEmitter {
    fn emit(&self, _event: AppEvent) {}

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}

/// Emitter that stores events; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmitter {
    events: Arc<Mutex<Vec<AppEvent>>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event emitted so far.
    pub fn events(&self) -> Vec<AppEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl AppEventEmitter for RecordingEmitter {
    fn emit(&self, event: AppEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScenarioKey;

    #[test]
    fn test_noop_emitter() {
        let emitter: Arc<dyn AppEventEmitter> = Arc::new(NoopEmitter::new());
        emitter.emit(AppEvent::scenario_loaded(ScenarioKey::new("a"), 0));
        let _boxed: Box<dyn AppEventEmitter> = emitter.clone_box();
    }

    #[test]
    fn test_recording_emitter_shares_buffer_across_clones() {
        let emitter = RecordingEmitter::new();
        let boxed = emitter.clone_box();
        boxed.emit(AppEvent::connector_removed(ScenarioKey::new("a"), "x"));
        emitter.emit(AppEvent::scenario_loaded(ScenarioKey::new("a"), 0));

        let events = emitter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_name(), "connector:removed");
    }
}
