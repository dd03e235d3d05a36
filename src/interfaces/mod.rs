// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod letter_table;

pub use event_handler::{
    CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
pub use letter_table::{ChaldeanTable, LetterTable, PythagoreanTable};
