// ============================================================================
// Engine Module
// Contains the numerology calculations and reading assembly
// ============================================================================

mod date_numbers;
mod inclusion;
mod name_numbers;
mod numerology_engine;

pub mod factory;

pub use date_numbers::{
    challenges, cycles, first_transition_age, life_path, realization_periods,
};
pub use factory::{create_from_config, NumerologyEngineBuilder};
pub use inclusion::{grid_link, inclusion_grid, letter_analysis, LetterEntry};
pub use name_numbers::{heredity_description, heredity_value, personality_traits};
pub use numerology_engine::{calculate, NumerologyEngine};
