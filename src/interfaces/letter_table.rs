// ============================================================================
// Letter Table Interface
// Defines the contract for pluggable letter-to-number systems
// ============================================================================

/// Pythagorean values for A..=Z.
static PYTHAGOREAN_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

/// Chaldean values for A..=Z. Nine is never assigned to a letter.
static CHALDEAN_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A-I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J-R
    3, 4, 6, 6, 6, 5, 1, 7, // S-Z
];

#[inline]
fn lookup(table: &[u8; 26], letter: char) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(table[(letter as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Strategy pattern interface for letter valuation
/// Implementations: Pythagorean (default), Chaldean
pub trait LetterTable: Send + Sync {
    /// Value of a normalized uppercase letter, `None` outside `A..=Z`
    fn value_of(&self, letter: char) -> Option<u8>;

    /// Get the table name for logging
    fn name(&self) -> &str;

    /// Sum of the values of a letter sequence; unknown letters count as zero
    fn sum(&self, letters: &[char]) -> u32 {
        letters
            .iter()
            .map(|c| u32::from(self.value_of(*c).unwrap_or(0)))
            .sum()
    }
}

/// Standard Pythagorean table: A, J, S = 1 ... I, R = 9
#[derive(Debug, Clone, Copy, Default)]
pub struct PythagoreanTable;

impl LetterTable for PythagoreanTable {
    #[inline]
    fn value_of(&self, letter: char) -> Option<u8> {
        lookup(&PYTHAGOREAN_VALUES, letter)
    }

    fn name(&self) -> &str {
        "Pythagorean"
    }
}

/// Chaldean table, values 1..=8 assigned by sound rather than position
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaldeanTable;

impl LetterTable for ChaldeanTable {
    #[inline]
    fn value_of(&self, letter: char) -> Option<u8> {
        lookup(&CHALDEAN_VALUES, letter)
    }

    fn name(&self) -> &str {
        "Chaldean"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean_rows() {
        let table = PythagoreanTable;
        for (letters, value) in [
            ("AJS", 1),
            ("BKT", 2),
            ("CLU", 3),
            ("DMV", 4),
            ("ENW", 5),
            ("FOX", 6),
            ("GPY", 7),
            ("HQZ", 8),
            ("IR", 9),
        ] {
            for c in letters.chars() {
                assert_eq!(table.value_of(c), Some(value), "letter {}", c);
            }
        }
    }

    #[test]
    fn test_non_letters_have_no_value() {
        let table = PythagoreanTable;
        assert_eq!(table.value_of('a'), None);
        assert_eq!(table.value_of('É'), None);
        assert_eq!(table.value_of('-'), None);
    }

    #[test]
    fn test_chaldean_never_nine() {
        let table = ChaldeanTable;
        for c in 'A'..='Z' {
            let v = table.value_of(c).unwrap();
            assert!((1..=8).contains(&v));
        }
        assert_eq!(table.value_of('F'), Some(8));
        assert_eq!(table.value_of('O'), Some(7));
    }

    #[test]
    fn test_sum() {
        let letters: Vec<char> = "JEAN".chars().collect();
        assert_eq!(PythagoreanTable.sum(&letters), 12);
        assert_eq!(PythagoreanTable.sum(&[]), 0);
    }
}
