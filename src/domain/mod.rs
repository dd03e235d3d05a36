// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod birth_date;
pub mod config;
pub mod errors;
pub mod letters;
pub mod name;
pub mod reading;
pub mod request;

pub use birth_date::{BirthDate, DateParts};
pub use config::{EngineConfig, LetterSystem, PillarThresholds};
pub use errors::{CalculationError, CalculationResult};
pub use letters::{classify, normalize, LetterKind, YPolicy};
pub use name::{NameAnalysis, NameAnalysisSet};
pub use reading::{
    Challenges, CoreNumber, Cycle, Cycles, HeredityNumber, InclusionGrid, LetterAnalysis,
    LetterCount, PersonalityTraits, Pillar, PillarDigits, PillarReport, Reading, ReadingId,
    RealizationPeriod, RealizationPeriods, Realizations, StoredReading, Strength,
};
pub use request::CalculationRequest;
