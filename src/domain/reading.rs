// ============================================================================
// Reading Domain Model
// The immutable result of one calculation
// ============================================================================

use super::name::NameAnalysisSet;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Pillars
// ============================================================================

/// The four inclusion-grid pillars. Digits 3, 6 and 7 each belong to two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Pillar {
    Physical,
    Emotional,
    Mental,
    Intuitive,
}

impl Pillar {
    pub const ALL: [Pillar; 4] = [
        Pillar::Physical,
        Pillar::Emotional,
        Pillar::Mental,
        Pillar::Intuitive,
    ];

    pub const fn digits(&self) -> [u8; 3] {
        match self {
            Pillar::Physical => [4, 5, 6],
            Pillar::Emotional => [2, 3, 6],
            Pillar::Mental => [1, 7, 8],
            Pillar::Intuitive => [3, 7, 9],
        }
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.digits().contains(&digit)
    }

    /// First pillar, in declaration order, holding `digit`
    pub fn of_digit(digit: u8) -> Option<Pillar> {
        Self::ALL.into_iter().find(|p| p.contains(digit))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pillar::Physical => "Physique",
            Pillar::Emotional => "Émotionnel",
            Pillar::Mental => "Mental",
            Pillar::Intuitive => "Intuitif",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Faible",
            Strength::Moderate => "Modéré",
            Strength::Strong => "Fort",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PillarReport {
    pub pillar: Pillar,
    pub count: u32,
    pub strength: Strength,
}

/// Digit membership of each pillar, as displayed next to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PillarDigits {
    pub physical: Vec<u8>,
    pub emotional: Vec<u8>,
    pub mental: Vec<u8>,
    pub intuitive: Vec<u8>,
}

impl Default for PillarDigits {
    fn default() -> Self {
        Self {
            physical: Pillar::Physical.digits().to_vec(),
            emotional: Pillar::Emotional.digits().to_vec(),
            mental: Pillar::Mental.digits().to_vec(),
            intuitive: Pillar::Intuitive.digits().to_vec(),
        }
    }
}

// ============================================================================
// Core Numbers
// ============================================================================

/// A core number with its grid linkage.
///
/// `secondary` carries the single-digit root of a master value so callers
/// can render "2/11" without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreNumber {
    pub value: u8,
    pub secondary: Option<u8>,
    /// Letters counted in the pillar holding the value's root digit
    pub pillar: u32,
    /// Letters whose value equals the root digit
    pub inclusion: u32,
}

impl fmt::Display for CoreNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(root) => write!(f, "{}/{}", root, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeredityNumber {
    pub value: u8,
    pub description: String,
    pub pillar: u32,
    pub inclusion: u32,
}

// ============================================================================
// Grid & Letter Analysis
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InclusionGrid {
    /// Digit 1..=9 -> number of letters carrying that value
    pub grid: BTreeMap<u8, u32>,
    pub pillars: PillarDigits,
    pub strengths: Vec<PillarReport>,
    pub legend: Vec<String>,
    /// Letters counted, equal to the sum of `grid`
    pub total: u32,
}

impl InclusionGrid {
    #[inline]
    pub fn count(&self, digit: u8) -> u32 {
        self.grid.get(&digit).copied().unwrap_or(0)
    }

    /// Digits absent from the name ("karmic lessons")
    pub fn missing_digits(&self) -> Vec<u8> {
        (1..=9).filter(|d| self.count(*d) == 0).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterCount {
    pub letter: char,
    pub value: u8,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LetterAnalysis {
    pub vowels: Vec<LetterCount>,
    pub consonants: Vec<LetterCount>,
    pub total_vowels: u32,
    pub total_consonants: u32,
    /// totalVowels / (totalVowels + totalConsonants), 4 decimal places
    pub vowel_ratio: Decimal,
    pub interpretation: String,
}

// ============================================================================
// Date-Derived Structures
// ============================================================================

/// One of the three life cycles
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Cycle {
    pub number: u8,
    pub from_age: u32,
    /// `None` for the last cycle, which lasts for the rest of life
    pub to_age: Option<u32>,
    pub years: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cycles {
    pub formatif: Cycle,
    pub productif: Cycle,
    pub moisson: Cycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RealizationPeriod {
    pub number: u8,
    pub from_age: u32,
    /// Age of the transition to the next period; `None` for the fourth
    pub to_age: Option<u32>,
}

/// Number and age span of each of the four realization periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RealizationPeriods {
    pub first: RealizationPeriod,
    pub second: RealizationPeriod,
    pub third: RealizationPeriod,
    pub fourth: RealizationPeriod,
}

/// Transition age of each realization period, keyed by ordinal.
///
/// The first three hold the age at which the period hands over to the
/// next one. The fourth lasts for life and holds the age it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Realizations {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub fourth: u32,
}

impl From<&RealizationPeriods> for Realizations {
    fn from(periods: &RealizationPeriods) -> Self {
        let transition = |period: &RealizationPeriod| period.to_age.unwrap_or(period.from_age);
        Self {
            first: transition(&periods.first),
            second: transition(&periods.second),
            third: transition(&periods.third),
            fourth: periods.fourth.from_age,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Challenges {
    pub first_minor: u8,
    pub second_minor: u8,
    pub major: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonalityTraits {
    pub intimate: u8,
    pub social: u8,
}

// ============================================================================
// Reading
// ============================================================================

/// Full numerology reading. Never mutated after assembly, and free of ids
/// and timestamps so that equal inputs give equal readings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Reading {
    pub life_path: CoreNumber,
    pub expression: CoreNumber,
    pub intimate: CoreNumber,
    pub realization: CoreNumber,
    pub health: u8,
    pub sentiment: u8,
    pub heredity_number: HeredityNumber,
    /// Ascending, without duplicates
    pub karmic_debts: Vec<u8>,
    pub inclusion_grid: InclusionGrid,
    pub letter_analysis: LetterAnalysis,
    pub cycles: Cycles,
    pub realizations: Realizations,
    pub realization_periods: RealizationPeriods,
    pub challenges: Challenges,
    pub personality_traits: PersonalityTraits,
    pub name_analysis: NameAnalysisSet,
    pub vibration: Vec<u8>,
}

// ============================================================================
// Storage Envelope
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReadingId(Uuid);

impl ReadingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReadingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A reading as handed to a storage collaborator, which owns the id and
/// the creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StoredReading {
    pub result_id: ReadingId,
    pub created_at: DateTime<Utc>,
    pub reading: Reading,
}

impl StoredReading {
    pub fn new(reading: Reading) -> Self {
        Self {
            result_id: ReadingId::new(),
            created_at: Utc::now(),
            reading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_of_digit_covers_all_digits() {
        let owners: Vec<Pillar> = (1..=9).filter_map(Pillar::of_digit).collect();
        assert_eq!(owners.len(), 9);
        assert_eq!(Pillar::of_digit(3), Some(Pillar::Emotional));
        assert_eq!(Pillar::of_digit(6), Some(Pillar::Physical));
        assert_eq!(Pillar::of_digit(7), Some(Pillar::Mental));
        assert_eq!(Pillar::of_digit(9), Some(Pillar::Intuitive));
        assert_eq!(Pillar::of_digit(0), None);
    }

    #[test]
    fn test_core_number_display() {
        let master = CoreNumber {
            value: 11,
            secondary: Some(2),
            pillar: 0,
            inclusion: 0,
        };
        assert_eq!(master.to_string(), "2/11");

        let plain = CoreNumber {
            value: 4,
            secondary: None,
            pillar: 0,
            inclusion: 0,
        };
        assert_eq!(plain.to_string(), "4");
    }

    #[test]
    fn test_realization_ages_from_periods() {
        let periods = RealizationPeriods {
            first: RealizationPeriod { number: 3, from_age: 0, to_age: Some(32) },
            second: RealizationPeriod { number: 7, from_age: 32, to_age: Some(41) },
            third: RealizationPeriod { number: 1, from_age: 41, to_age: Some(50) },
            fourth: RealizationPeriod { number: 7, from_age: 50, to_age: None },
        };

        let ages = Realizations::from(&periods);
        assert_eq!(
            [ages.first, ages.second, ages.third, ages.fourth],
            [32, 41, 50, 50]
        );
    }

    #[test]
    fn test_reading_ids_are_unique() {
        assert_ne!(ReadingId::new(), ReadingId::new());
        let uuid = Uuid::new_v4();
        assert_eq!(ReadingId::from_uuid(uuid).as_uuid(), &uuid);
    }
}
