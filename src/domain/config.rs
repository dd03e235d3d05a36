// ============================================================================
// Engine Configuration
// Letter system, classification policy and validation bounds
// ============================================================================

use super::letters::YPolicy;
use super::reading::Strength;
use chrono::{Datelike, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Letter System
// ============================================================================

/// Which letter -> value table the engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterSystem {
    /// A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8
    #[default]
    Pythagorean,
    /// Traditional Chaldean values 1-8, no letter carries 9
    Chaldean,
}

// ============================================================================
// Pillar Thresholds
// ============================================================================

/// Letter counts at which a pillar is reported weak or strong.
///
/// A count `<= weak_max` is weak, a count `>= strong_min` is strong and
/// anything in between is moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PillarThresholds {
    pub weak_max: u32,
    pub strong_min: u32,
}

impl PillarThresholds {
    pub fn classify(&self, count: u32) -> Strength {
        if count <= self.weak_max {
            Strength::Weak
        } else if count >= self.strong_min {
            Strength::Strong
        } else {
            Strength::Moderate
        }
    }
}

impl Default for PillarThresholds {
    fn default() -> Self {
        Self {
            weak_max: 2,
            strong_min: 6,
        }
    }
}

// ============================================================================
// Complete Engine Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EngineConfig {
    pub letter_system: LetterSystem,

    pub y_policy: YPolicy,

    /// Reject alphabetic characters with no Latin equivalent instead of
    /// silently dropping them
    pub strict_characters: bool,

    /// Inclusive bounds on the birth year
    pub min_year: i32,
    /// The engine never reads the clock, so the default of 2100 admits
    /// future birth dates. Callers validating live input should cap this
    /// at the current year, e.g. with [`EngineConfig::up_to_current_year`].
    pub max_year: i32,

    pub pillar_thresholds: PillarThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            letter_system: LetterSystem::Pythagorean,
            y_policy: YPolicy::Vowel,
            strict_characters: false,
            min_year: 1900,
            max_year: 2100,
            pillar_thresholds: PillarThresholds::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(letter_system: LetterSystem, y_policy: YPolicy) -> Self {
        Self {
            letter_system,
            y_policy,
            ..Self::default()
        }
    }

    /// Builder method: Set the accepted birth-year range
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Builder method: Reject birth years after the current UTC year
    pub fn up_to_current_year(mut self) -> Self {
        self.max_year = Utc::now().year();
        self
    }

    /// Builder method: Reject unsupported characters
    pub fn with_strict_characters(mut self, strict: bool) -> Self {
        self.strict_characters = strict;
        self
    }

    /// Builder method: Set pillar strength thresholds
    pub fn with_pillar_thresholds(mut self, weak_max: u32, strong_min: u32) -> Self {
        self.pillar_thresholds = PillarThresholds {
            weak_max,
            strong_min,
        };
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_year < 1 {
            return Err("Minimum year must be at least 1".to_string());
        }

        if self.min_year > self.max_year {
            return Err(format!(
                "Year range is empty: {} > {}",
                self.min_year, self.max_year
            ));
        }

        if self.pillar_thresholds.weak_max >= self.pillar_thresholds.strong_min {
            return Err("Weak pillar threshold must be below strong threshold".to_string());
        }

        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// French-tradition defaults
    /// - Pythagorean table
    /// - Y always a vowel
    pub fn pythagorean() -> Self {
        Self::default()
    }

    /// Chaldean table, Y classified by its neighbours
    pub fn chaldean() -> Self {
        Self::new(LetterSystem::Chaldean, YPolicy::Contextual)
    }

    /// Pythagorean with non-Latin input rejected
    pub fn strict() -> Self {
        Self::default().with_strict_characters(true)
    }
}
