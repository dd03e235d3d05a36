// ============================================================================
// Basic Usage Example
// ============================================================================

use numerology_engine::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Numerology Engine Example ===\n");

    let engine = NumerologyEngineBuilder::new()
        .pythagorean()
        .build(Arc::new(LoggingEventHandler))
        .expect("default configuration is valid");

    let request = CalculationRequest::new("Élodie", "Lefèvre", DateParts::new(29, 11, 1985))
        .with_middle_name("Anne");

    let reading = match engine.calculate(&request) {
        Ok(reading) => reading,
        Err(err) => {
            eprintln!("Calculation failed: {}", err);
            return;
        },
    };

    println!("Life path:    {}", reading.life_path);
    println!("Expression:   {}", reading.expression);
    println!("Intimate:     {}", reading.intimate);
    println!("Realization:  {}", reading.realization);
    println!(
        "Heredity:     {} ({})",
        reading.heredity_number.value, reading.heredity_number.description
    );
    println!("Karmic debts: {:?}", reading.karmic_debts);
    let periods = &reading.realization_periods;
    println!(
        "Realizations: {} until {}, {} until {}, {} until {}, {} from {}\n",
        periods.first.number,
        reading.realizations.first,
        periods.second.number,
        reading.realizations.second,
        periods.third.number,
        reading.realizations.third,
        periods.fourth.number,
        reading.realizations.fourth,
    );

    println!("Inclusion grid:");
    for (digit, count) in &reading.inclusion_grid.grid {
        println!("  {} -> {}", digit, count);
    }
    for line in &reading.inclusion_grid.legend {
        println!("  {}", line);
    }

    println!("\nCycles:");
    for (name, cycle) in [
        ("Formatif", &reading.cycles.formatif),
        ("Productif", &reading.cycles.productif),
        ("Moisson", &reading.cycles.moisson),
    ] {
        println!("  {:<10} {} ({})", name, cycle.number, cycle.years);
    }

    println!(
        "\nVowels {} / consonants {} ({})",
        reading.letter_analysis.total_vowels,
        reading.letter_analysis.total_consonants,
        reading.letter_analysis.interpretation
    );

    // Invalid input is reported, never panics
    let invalid = CalculationRequest::new("", "", DateParts::new(1, 1, 1990));
    if let Err(err) = engine.calculate(&invalid) {
        println!("\nRejected as expected: {}", err);
    }

    #[cfg(feature = "serde")]
    match serde_json::to_string_pretty(&StoredReading::new(reading)) {
        Ok(json) => println!("\nStored reading:\n{}", json),
        Err(err) => eprintln!("Serialization failed: {}", err),
    }
}
