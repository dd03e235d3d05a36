// ============================================================================
// Numerology Engine
// Assembles a full reading from a request
// ============================================================================

use super::date_numbers::{
    birth_day_debt, challenges, cycles, life_path, realization_periods,
};
use super::inclusion::{grid_link, inclusion_grid, letter_analysis, LetterEntry};
use super::name_numbers::{
    heredity_description, heredity_value, personality_traits, LetterSums, NameNumbers,
};
use crate::domain::{
    normalize, BirthDate, CalculationError, CalculationRequest, CalculationResult, CoreNumber,
    EngineConfig, HeredityNumber, InclusionGrid, NameAnalysis, NameAnalysisSet, Reading,
    Realizations,
};
use crate::interfaces::{
    CalculationEvent, EventHandler, LetterTable, NoOpEventHandler, PythagoreanTable,
};
use crate::numeric::{is_master, root, Reduction, VIBRATIONS};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Most names fit without spilling to the heap
type ActiveLetters = SmallVec<[LetterEntry; 32]>;

/// Below this many requests a batch is computed on the calling thread
const MIN_PARALLEL_BATCH: usize = 4;

/// Stateless numerology engine with a pluggable letter table
pub struct NumerologyEngine {
    config: EngineConfig,

    /// Letter -> value table selected by the configuration
    table: Box<dyn LetterTable>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl NumerologyEngine {
    /// Create a new engine. The configuration is trusted; use
    /// [`create_from_config`](super::create_from_config) to validate it.
    pub fn new(
        config: EngineConfig,
        table: Box<dyn LetterTable>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            config,
            table,
            event_handler,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn letter_table(&self) -> &dyn LetterTable {
        self.table.as_ref()
    }

    /// Compute a reading. Pure with respect to the request: the same request
    /// always yields an identical reading.
    pub fn calculate(&self, request: &CalculationRequest) -> CalculationResult<Reading> {
        self.event_handler
            .on_event(CalculationEvent::CalculationRequested {
                birth_date: request.birth_date,
            });

        match self.assemble(request) {
            Ok(reading) => {
                tracing::debug!(
                    table = self.table.name(),
                    life_path = reading.life_path.value,
                    expression = reading.expression.value,
                    "Numerology reading assembled"
                );
                self.event_handler
                    .on_event(CalculationEvent::CalculationCompleted {
                        life_path: reading.life_path.value,
                        expression: reading.expression.value,
                        letters: reading.inclusion_grid.total,
                        karmic_debts: reading.karmic_debts.clone(),
                    });
                Ok(reading)
            },
            Err(err) => {
                tracing::warn!(error = %err, "Numerology request rejected");
                self.event_handler
                    .on_event(CalculationEvent::CalculationRejected {
                        reason: err.to_string(),
                    });
                Err(err)
            },
        }
    }

    /// Compute many readings, spread over scoped worker threads.
    ///
    /// Results come back in request order, one per request.
    pub fn calculate_batch(
        &self,
        requests: &[CalculationRequest],
    ) -> Vec<CalculationResult<Reading>> {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        if workers < 2 || requests.len() < MIN_PARALLEL_BATCH {
            return requests.iter().map(|r| self.calculate(r)).collect();
        }

        let chunk_size = requests.len().div_ceil(workers);

        let scoped = crossbeam::scope(|scope| {
            let handles: Vec<_> = requests
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk
                            .iter()
                            .map(|r| self.calculate(r))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            let mut results = Vec::with_capacity(requests.len());
            for handle in handles {
                match handle.join() {
                    Ok(chunk) => results.extend(chunk),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            results
        });

        match scoped {
            Ok(results) => results,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    // ========================================================================
    // Assembly
    // ========================================================================

    fn assemble(&self, request: &CalculationRequest) -> CalculationResult<Reading> {
        let birth_date = BirthDate::from_parts(
            request.birth_date,
            self.config.min_year,
            self.config.max_year,
        )?;

        let names = self.analyse_names(request)?;
        if names.first_name.is_empty() && names.last_name.is_empty() {
            return Err(CalculationError::EmptyName);
        }

        let carried = request.carried_name_for_25_years;
        let first_name =
            active_variant(&names.used_first_name, carried).unwrap_or(&names.first_name);
        let last_name =
            active_variant(&names.marital_name, carried).unwrap_or(&names.last_name);

        let (letters, name_numbers) = {
            let active: SmallVec<[&NameAnalysis; 4]> = std::iter::once(first_name)
                .chain(names.middle_names.iter())
                .chain(std::iter::once(last_name))
                .collect();

            let letters: ActiveLetters = active
                .iter()
                .copied()
                .flat_map(NameAnalysis::entries)
                .collect();
            let sums = LetterSums::of(active.iter().copied());
            (letters, NameNumbers::from_sums(sums))
        };

        let grid = inclusion_grid(&letters, &self.config.pillar_thresholds);
        let traits = personality_traits(first_name);
        let life_path = life_path(&birth_date);

        let karmic_debts: BTreeSet<u8> = life_path
            .karmic_debts()
            .chain(name_numbers.karmic_debts())
            .chain(birth_day_debt(&birth_date))
            .map(|debt| debt as u8)
            .collect();

        let lp = life_path.value();
        let expression = name_numbers.expression.value();
        let intimate = name_numbers.intimate.value();

        let heredity = heredity_value(&names.last_name);
        let (heredity_pillar, heredity_inclusion) = grid_link(u32::from(heredity), &grid);
        let periods = realization_periods(&birth_date, lp);

        Ok(Reading {
            life_path: core_number(&life_path, &grid),
            expression: core_number(&name_numbers.expression, &grid),
            intimate: core_number(&name_numbers.intimate, &grid),
            realization: core_number(&name_numbers.realization, &grid),
            health: root(birth_date.day() + expression) as u8,
            sentiment: root(intimate + lp) as u8,
            heredity_number: HeredityNumber {
                value: heredity,
                description: heredity_description(heredity).to_string(),
                pillar: heredity_pillar,
                inclusion: heredity_inclusion,
            },
            karmic_debts: karmic_debts.into_iter().collect(),
            letter_analysis: letter_analysis(&letters),
            inclusion_grid: grid,
            cycles: cycles(&birth_date, lp),
            realizations: Realizations::from(&periods),
            realization_periods: periods,
            challenges: challenges(&birth_date),
            personality_traits: traits,
            name_analysis: names,
            vibration: VIBRATIONS.to_vec(),
        })
    }

    fn analyse_names(&self, request: &CalculationRequest) -> CalculationResult<NameAnalysisSet> {
        let analyse = |raw: &str, field: &str| -> CalculationResult<NameAnalysis> {
            let letters = normalize(raw, field, self.config.strict_characters)?;
            Ok(NameAnalysis::analyse(
                &letters,
                self.table.as_ref(),
                self.config.y_policy,
            ))
        };

        Ok(NameAnalysisSet {
            last_name: analyse(&request.last_name, "lastName")?,
            first_name: analyse(&request.first_name, "firstName")?,
            middle_names: request
                .middle_names
                .iter()
                .filter(|name| !name.trim().is_empty())
                .map(|name| analyse(name, "middleNames"))
                .collect::<CalculationResult<Vec<_>>>()?,
            marital_name: request
                .marital_name
                .as_deref()
                .map(|name| analyse(name, "maritalName"))
                .transpose()?,
            used_first_name: request
                .used_first_name
                .as_deref()
                .map(|name| analyse(name, "usedFirstName"))
                .transpose()?,
        })
    }
}

/// A name variant takes over from the legal name once it has been carried
/// for 25 years, provided it has letters of its own.
fn active_variant(variant: &Option<NameAnalysis>, carried: bool) -> Option<&NameAnalysis> {
    variant.as_ref().filter(|v| carried && !v.is_empty())
}

fn core_number(reduction: &Reduction, grid: &InclusionGrid) -> CoreNumber {
    let value = reduction.value();
    let (pillar, inclusion) = grid_link(value, grid);

    CoreNumber {
        value: value as u8,
        secondary: is_master(value).then(|| root(value) as u8),
        pillar,
        inclusion,
    }
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self::new(
            EngineConfig::default(),
            Box::new(PythagoreanTable),
            Arc::new(NoOpEventHandler),
        )
    }
}

/// Compute a reading with the default (Pythagorean, French-tradition) engine
pub fn calculate(request: &CalculationRequest) -> CalculationResult<Reading> {
    NumerologyEngine::default().calculate(request)
}
