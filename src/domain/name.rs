// ============================================================================
// Name Domain Model
// Per-component letter breakdowns
// ============================================================================

use super::letters::{classify, LetterKind, YPolicy};
use crate::interfaces::LetterTable;
use crate::numeric::{reduce, ReductionPolicy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Letter-by-letter breakdown of one name component.
///
/// `values[i] == consonants[i] + vowels[i]` for every index: a letter's
/// value lands in exactly one of the two parallel sequences, the other
/// holds 0. `kinds[i]` records the classification itself, so a letter worth
/// 0 in a custom table keeps its kind. An empty component yields empty
/// sequences and zero sums.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NameAnalysis {
    pub letters: Vec<char>,
    pub values: Vec<u8>,
    pub consonants: Vec<u8>,
    pub vowels: Vec<u8>,
    pub kinds: Vec<LetterKind>,
    /// Sum of every letter value, reduced with master numbers kept
    pub total: u8,
    pub consonant_sum: u32,
    pub vowel_sum: u32,
}

impl NameAnalysis {
    /// Analyse normalized letters of a single component.
    pub fn analyse(letters: &[char], table: &dyn LetterTable, y_policy: YPolicy) -> Self {
        let mut analysis = Self {
            letters: letters.to_vec(),
            values: Vec::with_capacity(letters.len()),
            consonants: Vec::with_capacity(letters.len()),
            vowels: Vec::with_capacity(letters.len()),
            kinds: Vec::with_capacity(letters.len()),
            ..Self::default()
        };

        for (index, letter) in letters.iter().enumerate() {
            let value = table.value_of(*letter).unwrap_or(0);
            analysis.values.push(value);

            let kind = classify(letters, index, y_policy);
            analysis.kinds.push(kind);

            match kind {
                LetterKind::Vowel => {
                    analysis.vowels.push(value);
                    analysis.consonants.push(0);
                    analysis.vowel_sum += u32::from(value);
                },
                LetterKind::Consonant => {
                    analysis.vowels.push(0);
                    analysis.consonants.push(value);
                    analysis.consonant_sum += u32::from(value);
                },
            }
        }

        analysis.total = reduce(analysis.raw_total(), ReductionPolicy::Master) as u8;
        analysis
    }

    /// Unreduced sum of all letter values
    #[inline]
    pub fn raw_total(&self) -> u32 {
        self.vowel_sum + self.consonant_sum
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// `(letter, value, kind)` for every letter, in order
    pub fn entries(&self) -> impl Iterator<Item = (char, u8, LetterKind)> + '_ {
        self.letters
            .iter()
            .zip(&self.values)
            .zip(&self.kinds)
            .map(|((letter, value), kind)| (*letter, *value, *kind))
    }

    pub fn vowel_count(&self) -> u32 {
        self.kinds.iter().filter(|k| k.is_vowel()).count() as u32
    }

    pub fn consonant_count(&self) -> u32 {
        self.letters.len() as u32 - self.vowel_count()
    }
}

/// Analyses of every supplied name component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NameAnalysisSet {
    pub last_name: NameAnalysis,
    pub first_name: NameAnalysis,
    pub middle_names: Vec<NameAnalysis>,
    pub marital_name: Option<NameAnalysis>,
    pub used_first_name: Option<NameAnalysis>,
}
