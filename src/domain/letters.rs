// ============================================================================
// Letters
// Name normalization and vowel/consonant classification
// ============================================================================

use super::errors::{CalculationError, CalculationResult};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const PLAIN_VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// How the letter Y is classified. W is always a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum YPolicy {
    /// Y always counts as a vowel (French tradition)
    #[default]
    Vowel,
    /// Y always counts as a consonant
    Consonant,
    /// Y is a consonant next to A, E, I, O or U in the same component,
    /// a vowel otherwise ("YVES" vowel, "MAYA" consonant)
    Contextual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterKind {
    Vowel,
    Consonant,
}

impl LetterKind {
    #[inline]
    pub fn is_vowel(&self) -> bool {
        matches!(self, LetterKind::Vowel)
    }
}

const AE: &[char] = &['A', 'E'];
const OE: &[char] = &['O', 'E'];
const SS: &[char] = &['S', 'S'];
const O: &[char] = &['O'];
const D: &[char] = &['D'];
const L: &[char] = &['L'];

/// Letters that do not decompose under NFD.
fn expand_ligature(c: char) -> Option<&'static [char]> {
    match c {
        'Æ' | 'æ' => Some(AE),
        'Œ' | 'œ' => Some(OE),
        'ß' | 'ẞ' => Some(SS),
        'Ø' | 'ø' => Some(O),
        'Đ' | 'đ' => Some(D),
        'Ł' | 'ł' => Some(L),
        _ => None,
    }
}

/// Normalize a raw name into uppercase `A..=Z` letters.
///
/// Diacritics are stripped ("Élodie" -> "ELODIE"), common ligatures are
/// expanded and every non-letter (spaces, hyphens, apostrophes, digits) is
/// dropped. Alphabetic characters with no Latin equivalent are dropped too,
/// unless `strict` is set, in which case they are rejected.
pub fn normalize(raw: &str, field: &str, strict: bool) -> CalculationResult<Vec<char>> {
    let mut letters = Vec::with_capacity(raw.len());

    for c in raw.chars() {
        if let Some(expanded) = expand_ligature(c) {
            letters.extend_from_slice(expanded);
            continue;
        }

        for d in std::iter::once(c).nfd() {
            if is_combining_mark(d) {
                continue;
            }

            let upper = d.to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                letters.push(upper);
            } else if strict && d.is_alphabetic() {
                return Err(CalculationError::UnsupportedCharacter {
                    character: c,
                    field: field.to_string(),
                });
            }
        }
    }

    Ok(letters)
}

/// Classify the letter at `index` within one name component.
///
/// An index past the end has no letter and classifies as a consonant.
pub fn classify(letters: &[char], index: usize, policy: YPolicy) -> LetterKind {
    let Some(&letter) = letters.get(index) else {
        return LetterKind::Consonant;
    };

    if PLAIN_VOWELS.contains(&letter) {
        return LetterKind::Vowel;
    }
    if letter != 'Y' {
        return LetterKind::Consonant;
    }

    match policy {
        YPolicy::Vowel => LetterKind::Vowel,
        YPolicy::Consonant => LetterKind::Consonant,
        YPolicy::Contextual => {
            let before = index
                .checked_sub(1)
                .and_then(|i| letters.get(i))
                .is_some_and(|c| PLAIN_VOWELS.contains(c));
            let after = letters
                .get(index + 1)
                .is_some_and(|c| PLAIN_VOWELS.contains(c));

            if before || after {
                LetterKind::Consonant
            } else {
                LetterKind::Vowel
            }
        },
    }
}
