// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculations
// ============================================================================

use crate::domain::DateParts;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the numerology engine
///
/// Events carry no timestamps and no names: they exist for logging and
/// metrics, never for reconstructing a reading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Request received by the engine
    CalculationRequested { birth_date: DateParts },

    /// Request refused during validation
    CalculationRejected { reason: String },

    /// Reading assembled
    CalculationCompleted {
        life_path: u8,
        expression: u8,
        letters: u32,
        karmic_debts: Vec<u8>,
    },
}

/// Event handler trait for processing engine events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        tracing::debug!("Numerology engine event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events seen so far
    pub fn events(&self) -> Vec<CalculationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculationEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(CalculationEvent::CalculationRejected {
            reason: "empty".to_string(),
        });
        // Should not panic
    }

    #[test]
    fn test_recording_handler_keeps_order() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        handler.on_events(vec![
            CalculationEvent::CalculationRequested {
                birth_date: DateParts::new(15, 6, 1990),
            },
            CalculationEvent::CalculationRejected {
                reason: "first name and last name are both empty".to_string(),
            },
        ]);

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            CalculationEvent::CalculationRequested { .. }
        ));
        assert!(matches!(
            events[1],
            CalculationEvent::CalculationRejected { .. }
        ));

        handler.clear();
        assert_eq!(handler.len(), 0);
    }
}
