// ============================================================================
// Date-Derived Numbers
// Life path, life cycles, realization periods and challenges
// ============================================================================

use crate::domain::{BirthDate, Challenges, Cycle, Cycles, RealizationPeriod, RealizationPeriods};
use crate::numeric::ReductionPolicy::Master;
use crate::numeric::{is_karmic_debt, reduce, reduce_trace, root, Reduction};

/// Age at which the first cycle ends for a life path rooted at zero
const FIRST_CYCLE_BASE: u32 = 36;

/// Length of the second (productive) cycle
const SECOND_CYCLE_YEARS: u32 = 27;

/// Length of the second and third realization periods
const REALIZATION_YEARS: u32 = 9;

/// Day, month and year each reduced with master numbers kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReducedDate {
    day: u32,
    month: u32,
    year: u32,
}

impl ReducedDate {
    fn of(date: &BirthDate) -> Self {
        Self {
            day: reduce(date.day(), Master),
            month: reduce(date.month(), Master),
            year: reduce(date.year(), Master),
        }
    }
}

/// Life path: sum of the reduced day, month and year, reduced again.
pub fn life_path(date: &BirthDate) -> Reduction {
    let parts = ReducedDate::of(date);
    reduce_trace(parts.day + parts.month + parts.year, Master)
}

/// A birth day of 13, 14, 16 or 19 carries its own karmic debt
pub fn birth_day_debt(date: &BirthDate) -> Option<u32> {
    Some(date.day()).filter(|day| is_karmic_debt(*day))
}

/// End of the first cycle and first realization period
#[inline]
pub fn first_transition_age(life_path: u32) -> u32 {
    FIRST_CYCLE_BASE - root(life_path)
}

pub fn cycles(date: &BirthDate, life_path: u32) -> Cycles {
    let parts = ReducedDate::of(date);
    let first_end = first_transition_age(life_path);
    let second_end = first_end + SECOND_CYCLE_YEARS;

    Cycles {
        formatif: cycle(parts.month, 0, Some(first_end)),
        productif: cycle(parts.day, first_end, Some(second_end)),
        moisson: cycle(parts.year, second_end, None),
    }
}

fn cycle(number: u32, from_age: u32, to_age: Option<u32>) -> Cycle {
    let years = match to_age {
        Some(to) => format!("{}-{} ans", from_age, to),
        None => format!("{} ans et plus", from_age),
    };

    Cycle {
        number: number as u8,
        from_age,
        to_age,
        years,
    }
}

pub fn realization_periods(date: &BirthDate, life_path: u32) -> RealizationPeriods {
    let parts = ReducedDate::of(date);

    let first = reduce(parts.month + parts.day, Master);
    let second = reduce(parts.day + parts.year, Master);
    let third = reduce(first + second, Master);
    let fourth = reduce(parts.month + parts.year, Master);

    let first_end = first_transition_age(life_path);
    let second_end = first_end + REALIZATION_YEARS;
    let third_end = second_end + REALIZATION_YEARS;

    let period = |number: u32, from_age: u32, to_age: Option<u32>| RealizationPeriod {
        number: number as u8,
        from_age,
        to_age,
    };

    RealizationPeriods {
        first: period(first, 0, Some(first_end)),
        second: period(second, first_end, Some(second_end)),
        third: period(third, second_end, Some(third_end)),
        fourth: period(fourth, third_end, None),
    }
}

/// Challenges work on plain roots: a master day or month counts as its digit.
pub fn challenges(date: &BirthDate) -> Challenges {
    let day = root(date.day());
    let month = root(date.month());
    let year = root(date.year());

    let first_minor = month.abs_diff(day);
    let second_minor = day.abs_diff(year);

    Challenges {
        first_minor: first_minor as u8,
        second_minor: second_minor as u8,
        major: first_minor.abs_diff(second_minor) as u8,
    }
}
