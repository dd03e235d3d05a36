// ============================================================================
// Engine Factory
// Creates numerology engines with proper configuration
// ============================================================================

use crate::domain::{EngineConfig, LetterSystem, YPolicy};
use crate::engine::NumerologyEngine;
use crate::interfaces::{ChaldeanTable, EventHandler, LetterTable, PythagoreanTable};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numerology engine from configuration
///
/// # Arguments
/// * `config` - Engine configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Returns
/// * `Result<NumerologyEngine, String>` - Configured engine or error
///
/// # Example
/// ```
/// use numerology_engine::prelude::*;
/// use numerology_engine::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let engine = create_from_config(EngineConfig::chaldean(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.letter_table().name(), "Chaldean");
/// ```
pub fn create_from_config(
    config: EngineConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<NumerologyEngine, String> {
    config.validate()?;

    let table = create_letter_table(config.letter_system);

    tracing::debug!(
        table = table.name(),
        y_policy = ?config.y_policy,
        "Numerology engine created"
    );

    Ok(NumerologyEngine::new(config, table, event_handler))
}

fn create_letter_table(system: LetterSystem) -> Box<dyn LetterTable> {
    match system {
        LetterSystem::Pythagorean => Box::new(PythagoreanTable),
        LetterSystem::Chaldean => Box::new(ChaldeanTable),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating numerology engines with fluent API
///
/// # Example
/// ```
/// use numerology_engine::prelude::*;
/// use std::sync::Arc;
///
/// let engine = NumerologyEngineBuilder::new()
///     .pythagorean()
///     .contextual_y()
///     .with_year_range(1800, 2100)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(engine.config().min_year, 1800);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumerologyEngineBuilder {
    config: EngineConfig,
}

impl NumerologyEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Letter System
    // ========================================================================

    /// Use the Pythagorean table (default)
    pub fn pythagorean(mut self) -> Self {
        self.config.letter_system = LetterSystem::Pythagorean;
        self
    }

    /// Use the Chaldean table
    pub fn chaldean(mut self) -> Self {
        self.config.letter_system = LetterSystem::Chaldean;
        self
    }

    // ========================================================================
    // Letter Classification
    // ========================================================================

    pub fn y_policy(mut self, policy: YPolicy) -> Self {
        self.config.y_policy = policy;
        self
    }

    /// Classify Y by its neighbours
    pub fn contextual_y(self) -> Self {
        self.y_policy(YPolicy::Contextual)
    }

    /// Reject non-Latin letters instead of dropping them
    pub fn strict_characters(mut self) -> Self {
        self.config.strict_characters = true;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.config = self.config.with_year_range(min_year, max_year);
        self
    }

    /// Reject birth years after the current UTC year
    pub fn up_to_current_year(mut self) -> Self {
        self.config = self.config.up_to_current_year();
        self
    }

    pub fn with_pillar_thresholds(mut self, weak_max: u32, strong_min: u32) -> Self {
        self.config = self.config.with_pillar_thresholds(weak_max, strong_min);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from an existing configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the numerology engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<NumerologyEngine, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CalculationRequest;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_pythagorean_engine() {
        let engine =
            create_from_config(EngineConfig::pythagorean(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(engine.letter_table().name(), "Pythagorean");
    }

    #[test]
    fn test_create_chaldean_engine() {
        let engine =
            create_from_config(EngineConfig::chaldean(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(engine.letter_table().name(), "Chaldean");
        assert_eq!(engine.config().y_policy, YPolicy::Contextual);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig::default().with_year_range(2100, 1900);
        assert!(create_from_config(config, Arc::new(NoOpEventHandler)).is_err());

        let built = NumerologyEngineBuilder::new()
            .with_pillar_thresholds(6, 2)
            .build(Arc::new(NoOpEventHandler));
        assert!(built.is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = NumerologyEngineBuilder::new()
            .chaldean()
            .strict_characters()
            .with_year_range(1800, 2000);

        assert_eq!(builder.get_config().letter_system, LetterSystem::Chaldean);
        assert!(builder.get_config().strict_characters);

        let engine = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(engine.config().max_year, 2000);
    }

    #[test]
    fn test_letter_systems_disagree() {
        let request = CalculationRequest::from_form("Jean", "Dupont", "15/06/1990").unwrap();

        let pythagorean = NumerologyEngineBuilder::new()
            .build(Arc::new(NoOpEventHandler))
            .unwrap()
            .calculate(&request)
            .unwrap();
        let chaldean = NumerologyEngineBuilder::new()
            .chaldean()
            .build(Arc::new(NoOpEventHandler))
            .unwrap()
            .calculate(&request)
            .unwrap();

        // Date-derived numbers do not depend on the letter table
        assert_eq!(pythagorean.life_path.value, chaldean.life_path.value);
        assert_eq!(pythagorean.challenges, chaldean.challenges);
        assert_ne!(pythagorean.inclusion_grid, chaldean.inclusion_grid);
    }

    #[test]
    fn test_strict_builder_rejects_cyrillic() {
        let engine = NumerologyEngineBuilder::from_config(EngineConfig::strict())
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        let request = CalculationRequest::from_form("Борис", "Dupont", "15/06/1990").unwrap();

        assert!(engine.calculate(&request).is_err());
        assert!(NumerologyEngineBuilder::new()
            .build(Arc::new(NoOpEventHandler))
            .unwrap()
            .calculate(&request)
            .is_ok());
    }
}
