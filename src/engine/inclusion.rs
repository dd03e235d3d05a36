// ============================================================================
// Inclusion Grid & Letter Analysis
// Digit histogram of the name and vowel/consonant frequency tables
// ============================================================================

use crate::domain::{
    InclusionGrid, LetterAnalysis, LetterCount, LetterKind, Pillar, PillarDigits,
    PillarReport, PillarThresholds,
};
use crate::numeric::root;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Ratio below which a name reads as consonant-dominated
const CONSONANT_DOMINANT_BELOW: Decimal = Decimal::from_parts(35, 0, 0, false, 2);

/// Ratio up to which a name reads as balanced
const BALANCED_UP_TO: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

const RATIO_DECIMALS: u32 = 4;

/// One normalized letter with its value and classification
pub type LetterEntry = (char, u8, LetterKind);

// ============================================================================
// Inclusion Grid
// ============================================================================

pub fn inclusion_grid(letters: &[LetterEntry], thresholds: &PillarThresholds) -> InclusionGrid {
    let mut grid: BTreeMap<u8, u32> = (1..=9).map(|digit| (digit, 0)).collect();
    let mut total = 0;

    for (_, value, _) in letters {
        if let Some(count) = grid.get_mut(value) {
            *count += 1;
            total += 1;
        }
    }

    let strengths: Vec<PillarReport> = Pillar::ALL
        .iter()
        .map(|pillar| {
            let count = pillar_count(&grid, *pillar);
            PillarReport {
                pillar: *pillar,
                count,
                strength: thresholds.classify(count),
            }
        })
        .collect();

    let legend = strengths
        .iter()
        .map(|report| {
            format!(
                "{} : {} ({})",
                report.pillar.label(),
                report.strength.label(),
                report.count
            )
        })
        .collect();

    InclusionGrid {
        grid,
        pillars: PillarDigits::default(),
        strengths,
        legend,
        total,
    }
}

fn pillar_count(grid: &BTreeMap<u8, u32>, pillar: Pillar) -> u32 {
    pillar
        .digits()
        .iter()
        .map(|digit| grid.get(digit).copied().unwrap_or(0))
        .sum()
}

/// `(pillar, inclusion)` of a core number against the grid.
///
/// Both are taken at the value's root digit; a zero value links to nothing.
pub fn grid_link(value: u32, grid: &InclusionGrid) -> (u32, u32) {
    let digit = root(value) as u8;

    match Pillar::of_digit(digit) {
        Some(pillar) => (pillar_count(&grid.grid, pillar), grid.count(digit)),
        None => (0, 0),
    }
}

// ============================================================================
// Letter Analysis
// ============================================================================

pub fn letter_analysis(letters: &[LetterEntry]) -> LetterAnalysis {
    let mut vowels: BTreeMap<char, LetterCount> = BTreeMap::new();
    let mut consonants: BTreeMap<char, LetterCount> = BTreeMap::new();

    for (letter, value, kind) in letters {
        let table = if kind.is_vowel() {
            &mut vowels
        } else {
            &mut consonants
        };
        table
            .entry(*letter)
            .or_insert(LetterCount {
                letter: *letter,
                value: *value,
                count: 0,
            })
            .count += 1;
    }

    let total_vowels: u32 = vowels.values().map(|c| c.count).sum();
    let total_consonants: u32 = consonants.values().map(|c| c.count).sum();
    let vowel_ratio = vowel_ratio(total_vowels, total_consonants);

    LetterAnalysis {
        interpretation: interpretation(total_vowels + total_consonants, vowel_ratio).to_string(),
        vowels: vowels.into_values().collect(),
        consonants: consonants.into_values().collect(),
        total_vowels,
        total_consonants,
        vowel_ratio,
    }
}

fn vowel_ratio(vowels: u32, consonants: u32) -> Decimal {
    let total = vowels + consonants;
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(vowels) / Decimal::from(total)).round_dp(RATIO_DECIMALS)
}

fn interpretation(letters: u32, ratio: Decimal) -> &'static str {
    if letters == 0 {
        "Aucune lettre à analyser"
    } else if ratio < CONSONANT_DOMINANT_BELOW {
        "Dominante consonantique : tempérament concret, tourné vers l'action"
    } else if ratio <= BALANCED_UP_TO {
        "Équilibre entre émotion et raison"
    } else {
        "Dominante vocalique : tempérament sensible, tourné vers les émotions"
    }
}
