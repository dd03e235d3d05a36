// ============================================================================
// Name-Derived Numbers
// Expression, intimate, realization, heredity and personality traits
// ============================================================================

use crate::domain::{NameAnalysis, PersonalityTraits};
use crate::numeric::{reduce, reduce_trace, Reduction, ReductionPolicy};

/// Heredity descriptions indexed by the reduced last-name value
static HEREDITY_DESCRIPTIONS: [&str; 10] = [
    "Aucune hérédité lisible : nom de famille sans lettre exploitable",
    "Lignée de pionniers, goût de l'indépendance et du commandement",
    "Lignée de médiateurs, sens de la coopération et de la diplomatie",
    "Lignée d'expression, héritage de créativité et de communication",
    "Lignée de bâtisseurs, attachement au travail, à l'ordre et à la stabilité",
    "Lignée de voyageurs, héritage de liberté et de curiosité",
    "Lignée protectrice, sens de la famille et des responsabilités",
    "Lignée de chercheurs, tradition de réflexion et de spiritualité",
    "Lignée d'entrepreneurs, rapport fort à l'autorité et à la réussite matérielle",
    "Lignée humaniste, héritage d'idéal et de dévouement",
];

pub fn heredity_description(value: u8) -> &'static str {
    HEREDITY_DESCRIPTIONS
        .get(usize::from(value))
        .copied()
        .unwrap_or(HEREDITY_DESCRIPTIONS[0])
}

/// Unreduced letter sums over the active name components
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSums {
    pub all: u32,
    pub vowels: u32,
    pub consonants: u32,
}

impl LetterSums {
    pub fn of<'a>(components: impl IntoIterator<Item = &'a NameAnalysis>) -> Self {
        components
            .into_iter()
            .fold(Self::default(), |acc, component| Self {
                all: acc.all + component.raw_total(),
                vowels: acc.vowels + component.vowel_sum,
                consonants: acc.consonants + component.consonant_sum,
            })
    }
}

/// Reductions of the three name core numbers, chains kept for karmic
/// debt detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameNumbers {
    pub expression: Reduction,
    pub intimate: Reduction,
    pub realization: Reduction,
}

impl NameNumbers {
    pub fn from_sums(sums: LetterSums) -> Self {
        Self {
            expression: reduce_trace(sums.all, ReductionPolicy::Master),
            intimate: reduce_trace(sums.vowels, ReductionPolicy::Master),
            realization: reduce_trace(sums.consonants, ReductionPolicy::Master),
        }
    }

    pub fn karmic_debts(&self) -> impl Iterator<Item = u32> + '_ {
        self.expression
            .karmic_debts()
            .chain(self.intimate.karmic_debts())
            .chain(self.realization.karmic_debts())
    }
}

/// Heredity number: legal last name only, reduced without master numbers
pub fn heredity_value(legal_last_name: &NameAnalysis) -> u8 {
    reduce(legal_last_name.raw_total(), ReductionPolicy::Plain) as u8
}

/// Intimate and social traits from the first name alone
pub fn personality_traits(first_name: &NameAnalysis) -> PersonalityTraits {
    PersonalityTraits {
        intimate: reduce(first_name.vowel_sum, ReductionPolicy::Master) as u8,
        social: first_name.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::YPolicy;
    use crate::interfaces::PythagoreanTable;

    fn analyse(s: &str) -> NameAnalysis {
        let letters: Vec<char> = s.chars().collect();
        NameAnalysis::analyse(&letters, &PythagoreanTable, YPolicy::Vowel)
    }

    #[test]
    fn test_jean_dupont() {
        let first = analyse("JEAN");
        let last = analyse("DUPONT");

        let sums = LetterSums::of([&first, &last]);
        assert_eq!(
            sums,
            LetterSums {
                all: 39,
                vowels: 15,
                consonants: 24
            }
        );

        let numbers = NameNumbers::from_sums(sums);
        assert_eq!(numbers.expression.value(), 3);
        assert_eq!(numbers.intimate.value(), 6);
        assert_eq!(numbers.realization.value(), 6);
        assert_eq!(numbers.karmic_debts().count(), 0);

        assert_eq!(heredity_value(&last), 9);
        assert_eq!(
            personality_traits(&first),
            PersonalityTraits {
                intimate: 6,
                social: 3
            }
        );
    }

    #[test]
    fn test_expression_karmic_debt() {
        // ELODIE ANNE LEFEVRE: 32 + 16 + 37 = 85 -> 13 -> 4
        let components = [analyse("ELODIE"), analyse("ANNE"), analyse("LEFEVRE")];
        let numbers = NameNumbers::from_sums(LetterSums::of(&components));

        assert_eq!(numbers.expression.chain(), &[85, 13, 4]);
        assert_eq!(numbers.karmic_debts().collect::<Vec<_>>(), vec![13]);
    }

    #[test]
    fn test_heredity_is_never_master() {
        // E5 V4 E5 L3 Y7 N5 = 29 -> 11 -> 2
        let evelyn = analyse("EVELYN");
        assert_eq!(evelyn.total, 11);
        assert_eq!(heredity_value(&evelyn), 2);
    }

    #[test]
    fn test_heredity_descriptions() {
        assert!(heredity_description(0).starts_with("Aucune"));
        for value in 1..=9 {
            assert!(!heredity_description(value).is_empty());
            assert_ne!(heredity_description(value), heredity_description(0));
        }
        assert_eq!(heredity_description(42), heredity_description(0));
    }

    #[test]
    fn test_empty_components() {
        let sums = LetterSums::of(std::iter::empty());
        let numbers = NameNumbers::from_sums(sums);
        assert_eq!(numbers.expression.value(), 0);
        assert_eq!(heredity_value(&NameAnalysis::default()), 0);
    }
}
