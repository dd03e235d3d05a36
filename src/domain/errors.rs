// ============================================================================
// Calculation Errors
// Input validation failures reported before any computation starts
// ============================================================================

/// Reasons a calculation request is refused.
///
/// Every variant is a caller-input problem; the engine itself has no
/// internal failure modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    /// Malformed or impossible calendar date.
    #[error("invalid birth date: {0}")]
    InvalidDate(String),

    /// Both first and last name are empty after normalization.
    #[error("first name and last name are both empty")]
    EmptyName,

    /// A letter with no Latin equivalent, rejected in strict mode.
    #[error("unsupported character {character:?} in {field}")]
    UnsupportedCharacter {
        /// Offending character as typed
        character: char,
        /// Input field it came from
        field: String,
    },
}

/// Result type alias for calculations
pub type CalculationResult<T> = Result<T, CalculationError>;
