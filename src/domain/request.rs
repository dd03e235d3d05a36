// ============================================================================
// Calculation Request
// Identity inputs for one calculation
// ============================================================================

use super::birth_date::DateParts;
use super::errors::CalculationResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the engine needs for one reading.
///
/// Mirrors the body of a calculation request: names as typed by the user,
/// the birth date as `{day, month, year}` or a form string, and the
/// optional name variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalculationRequest {
    pub first_name: String,
    pub last_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub middle_names: Vec<String>,
    pub birth_date: DateParts,
    #[cfg_attr(feature = "serde", serde(default))]
    pub marital_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub used_first_name: Option<String>,
    /// When set, the used first name and marital name replace the legal
    /// ones for every name-derived number
    #[cfg_attr(feature = "serde", serde(default))]
    pub carried_name_for_25_years: bool,
}

impl CalculationRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: DateParts,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_names: Vec::new(),
            birth_date,
            marital_name: None,
            used_first_name: None,
            carried_name_for_25_years: false,
        }
    }

    /// Build from form fields, the date typed as `DD/MM/YYYY`.
    pub fn from_form(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: &str,
    ) -> CalculationResult<Self> {
        Ok(Self::new(first_name, last_name, birth_date.parse()?))
    }

    /// Builder method: Add a middle name
    pub fn with_middle_name(mut self, name: impl Into<String>) -> Self {
        self.middle_names.push(name.into());
        self
    }

    /// Builder method: Set the marital name
    pub fn with_marital_name(mut self, name: impl Into<String>) -> Self {
        self.marital_name = Some(name.into());
        self
    }

    /// Builder method: Set the first name in everyday use
    pub fn with_used_first_name(mut self, name: impl Into<String>) -> Self {
        self.used_first_name = Some(name.into());
        self
    }

    /// Builder method: Mark the name variants as carried for 25 years or more
    pub fn with_carried_name(mut self, carried: bool) -> Self {
        self.carried_name_for_25_years = carried;
        self
    }
}
