// ============================================================================
// Birth Date
// Raw date input and its validated calendar form
// ============================================================================

use super::errors::{CalculationError, CalculationResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Unvalidated `{day, month, year}` as received from a caller.
///
/// Deserializes from either the object form or a `"DD/MM/YYYY"` /
/// `"YYYY-MM-DD"` string; always serializes as the object form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DatePartsRepr"))]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum DatePartsRepr {
    Parts { day: u32, month: u32, year: i32 },
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<DatePartsRepr> for DateParts {
    type Error = CalculationError;

    fn try_from(repr: DatePartsRepr) -> Result<Self, Self::Error> {
        match repr {
            DatePartsRepr::Parts { day, month, year } => Ok(Self::new(day, month, year)),
            DatePartsRepr::Text(text) => text.parse(),
        }
    }
}

impl DateParts {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

fn parse_field<T: FromStr>(
    field: &str,
    width: RangeInclusive<usize>,
    raw: &str,
) -> CalculationResult<T> {
    if !width.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalculationError::InvalidDate(format!(
            "expected DD/MM/YYYY or YYYY-MM-DD, got {:?}",
            raw
        )));
    }
    field
        .parse()
        .map_err(|_| CalculationError::InvalidDate(format!("not a number: {:?}", field)))
}

impl FromStr for DateParts {
    type Err = CalculationError;

    /// Accepts `DD/MM/YYYY` (form input) and `YYYY-MM-DD` (ISO).
    ///
    /// Only the shape is checked here; calendar validity is checked by
    /// [`BirthDate`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();

        let fields: Vec<&str> = raw.split('/').collect();
        if fields.len() == 3 {
            return Ok(Self {
                day: parse_field(fields[0], 1..=2, raw)?,
                month: parse_field(fields[1], 1..=2, raw)?,
                year: parse_field(fields[2], 4..=4, raw)?,
            });
        }

        let fields: Vec<&str> = raw.split('-').collect();
        if fields.len() == 3 {
            return Ok(Self {
                year: parse_field(fields[0], 4..=4, raw)?,
                month: parse_field(fields[1], 1..=2, raw)?,
                day: parse_field(fields[2], 1..=2, raw)?,
            });
        }

        Err(CalculationError::InvalidDate(format!(
            "expected DD/MM/YYYY or YYYY-MM-DD, got {:?}",
            raw
        )))
    }
}

// ============================================================================
// Validated Birth Date
// ============================================================================

/// A real calendar date. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validate a calendar date (leap years respected).
    pub fn new(day: u32, month: u32, year: i32) -> CalculationResult<Self> {
        if year < 1 {
            return Err(CalculationError::InvalidDate(format!(
                "year {} is before year 1",
                year
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(CalculationError::InvalidDate(format!(
                "month {} out of range",
                month
            )));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                CalculationError::InvalidDate(format!(
                    "{:02}/{:02}/{:04} does not exist",
                    day, month, year
                ))
            })
    }

    /// Validate raw parts against the calendar and an inclusive year range.
    pub fn from_parts(parts: DateParts, min_year: i32, max_year: i32) -> CalculationResult<Self> {
        if parts.year < min_year || parts.year > max_year {
            return Err(CalculationError::InvalidDate(format!(
                "year {} outside {}..={}",
                parts.year, min_year, max_year
            )));
        }
        Self::new(parts.day, parts.month, parts.year)
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Always positive, see [`BirthDate::new`].
    #[inline]
    pub fn year(&self) -> u32 {
        self.0.year() as u32
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    pub fn parts(&self) -> DateParts {
        DateParts::new(self.day(), self.month(), self.0.year())
    }
}

impl FromStr for BirthDate {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: DateParts = s.parse()?;
        Self::new(parts.day, parts.month, parts.year)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parts(), f)
    }
}
