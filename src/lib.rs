// ============================================================================
// Numerology Engine Library
// Deterministic numerology readings from a name and a birth date
// ============================================================================

//! # Numerology Engine
//!
//! Computes a complete numerology reading from a person's names and birth
//! date.
//!
//! ## Features
//!
//! - **Core numbers**: life path, expression, intimate, realization, heredity
//! - **Karmic debts** detected along every reduction chain
//! - **Inclusion grid** with its four pillars and a letter-frequency analysis
//! - **Life cycles**, realization periods and challenges
//! - **Pluggable letter tables** (Pythagorean, Chaldean)
//! - **Event handlers** for logging and auditing, batch fan-out over threads
//!
//! ## Example
//!
//! ```rust
//! use numerology_engine::prelude::*;
//!
//! let request = CalculationRequest::from_form("Jean", "Dupont", "15/06/1990").unwrap();
//! let reading = calculate(&request).unwrap();
//!
//! assert_eq!(reading.life_path.value, 4);
//! assert_eq!(reading.karmic_debts, vec![13]);
//! println!("Expression: {}", reading.expression);
//! println!("Cycles: {:?}", reading.cycles);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BirthDate, CalculationError, CalculationRequest, CalculationResult, CoreNumber,
        DateParts, EngineConfig, LetterSystem, Pillar, Reading, ReadingId, StoredReading,
        YPolicy,
    };
    pub use crate::engine::{
        calculate, create_from_config, NumerologyEngine, NumerologyEngineBuilder,
    };
    pub use crate::interfaces::{
        CalculationEvent, ChaldeanTable, EventHandler, LetterTable, LoggingEventHandler,
        NoOpEventHandler, PythagoreanTable, RecordingEventHandler,
    };
    pub use crate::numeric::{reduce, ReductionPolicy};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    fn jean_dupont() -> CalculationRequest {
        CalculationRequest::new("Jean", "Dupont", DateParts::new(15, 6, 1990))
    }

    fn elodie_lefevre() -> CalculationRequest {
        CalculationRequest::new("Élodie", "Lefèvre", DateParts::new(29, 11, 1985))
            .with_middle_name("Anne")
    }

    #[test]
    fn test_end_to_end_reading() {
        let reading = calculate(&jean_dupont()).unwrap();

        assert_eq!(reading.life_path.value, 4);
        assert_eq!(reading.karmic_debts, vec![13]);
        assert_eq!(reading.expression.value, 3);
        assert_eq!(reading.intimate.value, 6);
        assert_eq!(reading.realization.value, 6);
        assert_eq!(reading.heredity_number.value, 9);
        assert_eq!(reading.inclusion_grid.total, 10);
        assert_eq!(reading.cycles.formatif.years, "0-32 ans");
        assert_eq!(reading.cycles.moisson.years, "59 ans et plus");
        assert_eq!(
            reading.vibration,
            vec![1, 2, 11, 20, 3, 4, 13, 22, 5, 6, 33, 7, 8, 9]
        );

        assert_eq!(reading.name_analysis.first_name.letters, vec!['J', 'E', 'A', 'N']);
        assert!(reading.name_analysis.middle_names.is_empty());
    }

    #[test]
    fn test_empty_middle_names_contribute_nothing() {
        let plain = calculate(&jean_dupont()).unwrap();
        let blank = calculate(&jean_dupont().with_middle_name("").with_middle_name("  ")).unwrap();

        assert_eq!(plain, blank);
    }

    #[test]
    fn test_accented_names_and_expression_debt() {
        let reading = calculate(&elodie_lefevre()).unwrap();

        // 32 + 16 + 37 = 85 -> 13 -> 4
        assert_eq!(reading.expression.value, 4);
        assert_eq!(reading.karmic_debts, vec![13]);
        assert_eq!(reading.life_path.value, 9);
        assert_eq!(reading.intimate.value, 1);
        assert_eq!(reading.realization.value, 3);
        assert_eq!(reading.heredity_number.value, 1);
        assert_eq!(reading.letter_analysis.total_vowels, 9);
        assert_eq!(reading.letter_analysis.total_consonants, 8);
        assert_eq!(reading.realization_periods.first.number, 22);
        assert_eq!(reading.realizations.first, 27);
        assert_eq!(reading.cycles.productif.years, "27-54 ans");
        assert_eq!(reading.personality_traits.intimate, 7);
        assert_eq!(reading.personality_traits.social, 5);
        assert_eq!(reading.name_analysis.middle_names.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let engine = NumerologyEngine::default();
        let request = elodie_lefevre();

        let first = engine.calculate(&request).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.calculate(&request).unwrap(), first);
        }
    }

    #[test]
    fn test_grid_total_matches_letter_counts() {
        for request in [jean_dupont(), elodie_lefevre()] {
            let reading = calculate(&request).unwrap();
            let grid = &reading.inclusion_grid;
            let letters = &reading.letter_analysis;

            assert_eq!(grid.total, letters.total_vowels + letters.total_consonants);
            assert_eq!(grid.grid.values().sum::<u32>(), grid.total);
            assert_eq!(grid.grid.len(), 9);
        }
    }

    #[test]
    fn test_core_numbers_in_range() {
        for request in [jean_dupont(), elodie_lefevre()] {
            let reading = calculate(&request).unwrap();
            for core in [
                reading.life_path,
                reading.expression,
                reading.intimate,
                reading.realization,
            ] {
                assert!(core.value <= 9 || [11, 22, 33].contains(&core.value));
                assert_eq!(core.secondary.is_some(), core.value > 9);
            }
            assert!(reading.heredity_number.value <= 9);
            assert!(reading.karmic_debts.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_rejections() {
        let empty = CalculationRequest::new("", "  ", DateParts::new(15, 6, 1990));
        assert_eq!(calculate(&empty), Err(CalculationError::EmptyName));

        let leap = CalculationRequest::new("Jean", "Dupont", DateParts::new(29, 2, 1990));
        assert!(matches!(
            calculate(&leap),
            Err(CalculationError::InvalidDate(_))
        ));

        let far = CalculationRequest::new("Jean", "Dupont", DateParts::new(1, 1, 2150));
        assert!(matches!(
            calculate(&far),
            Err(CalculationError::InvalidDate(_))
        ));

        // Only one of the two names is required
        let single = CalculationRequest::new("", "Dupont", DateParts::new(15, 6, 1990));
        assert!(calculate(&single).is_ok());
    }

    #[test]
    fn test_carried_names() {
        let request = CalculationRequest::new("Marie", "Curie", DateParts::new(4, 1, 2006))
            .with_marital_name("Dupont")
            .with_used_first_name("Jean");

        let legal = calculate(&request).unwrap();
        assert_eq!(legal.expression.value, 3);
        assert!(legal.name_analysis.marital_name.is_some());
        assert!(legal.name_analysis.used_first_name.is_some());

        let carried = calculate(&request.clone().with_carried_name(true)).unwrap();
        // JEAN DUPONT letters: 39 -> 12 -> 3, traits from JEAN
        assert_eq!(carried.inclusion_grid.total, 10);
        assert_eq!(carried.personality_traits.social, 3);
        assert_eq!(carried.personality_traits.intimate, 6);
        // Heredity stays on the birth name: CURIE = 29 -> 2
        assert_eq!(carried.heredity_number.value, 2);
        assert_eq!(legal.heredity_number.value, 2);
        // Date numbers are untouched
        assert_eq!(carried.life_path.value, legal.life_path.value);
    }

    #[test]
    fn test_carried_flag_ignores_empty_variants() {
        let request = jean_dupont()
            .with_marital_name("")
            .with_carried_name(true);

        let reading = calculate(&request).unwrap();
        assert_eq!(reading.expression.value, 3);
        assert_eq!(reading.inclusion_grid.total, 10);
    }

    #[test]
    fn test_events_for_batch() {
        let handler = Arc::new(RecordingEventHandler::new());
        let engine = NumerologyEngineBuilder::new()
            .build(handler.clone())
            .unwrap();

        let results = engine.calculate_batch(&[jean_dupont(), elodie_lefevre()]);
        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(handler.len(), 4);
    }

    #[test]
    fn test_stored_reading_envelope() {
        let reading = calculate(&jean_dupont()).unwrap();
        let stored = StoredReading::new(reading.clone());
        let other = StoredReading::new(reading.clone());

        assert_ne!(stored.result_id, other.result_id);
        assert_eq!(stored.reading, other.reading);
        assert_eq!(stored.reading, reading);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_reading_json_round_trip() {
        let reading = calculate(&elodie_lefevre()).unwrap();

        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("\"lifePath\""));
        assert!(json.contains("\"karmicDebts\":[13]"));
        assert!(json.contains("\"heredityNumber\""));
        assert!(json.contains("\"totalVowels\":9"));

        let decoded: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, reading);

        // Realizations map each ordinal to a transition age
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["realizations"]["first"], 27);
        assert_eq!(value["realizations"]["second"], 36);
        assert_eq!(value["realizations"]["third"], 45);
        assert_eq!(value["realizations"]["fourth"], 45);
        assert_eq!(value["realizationPeriods"]["first"]["number"], 22);
        assert_eq!(value["realizationPeriods"]["fourth"]["toAge"], serde_json::Value::Null);

        let stored = StoredReading::new(reading);
        let json = serde_json::to_string(&stored).unwrap();
        assert!(json.contains("\"resultId\""));
        assert!(json.contains("\"createdAt\""));
        let decoded: StoredReading = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, stored);
    }
}
