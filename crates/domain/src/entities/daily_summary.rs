//! Aggregated per-day weather summary

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Aggregated weather summary for a single calendar date
///
/// Constructed only through [`DailySummary::new`], which enforces the
/// aggregation invariants: `max_temperature >= min_temperature` and a
/// non-empty condition list. A violation signals corrupted upstream data
/// and must surface as a [`DomainError::DataProcessing`] failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    date: NaiveDate,
    max_temperature: f64,
    min_temperature: f64,
    conditions: Vec<String>,
}

impl DailySummary {
    /// Create a new daily summary with invariant validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DataProcessing` when `max_temperature` is less
    /// than `min_temperature` or when `conditions` is empty.
    pub fn new(
        date: NaiveDate,
        max_temperature: f64,
        min_temperature: f64,
        conditions: Vec<String>,
    ) -> Result<Self, DomainError> {
        if max_temperature < min_temperature {
            return Err(DomainError::data_processing(format!(
                "max temperature ({max_temperature}) cannot be less than min temperature ({min_temperature}) for {date}"
            )));
        }
        if conditions.is_empty() {
            return Err(DomainError::data_processing(format!(
                "weather conditions cannot be empty for {date}"
            )));
        }
        Ok(Self {
            date,
            max_temperature,
            min_temperature,
            conditions,
        })
    }

    /// The calendar date this summary covers
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Maximum temperature observed across the day's samples
    #[must_use]
    pub const fn max_temperature(&self) -> f64 {
        self.max_temperature
    }

    /// Minimum temperature observed across the day's samples
    #[must_use]
    pub const fn min_temperature(&self) -> f64 {
        self.min_temperature
    }

    /// Distinct condition descriptions in order of first appearance
    #[must_use]
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Temperature spread for the day
    #[must_use]
    pub fn temperature_range(&self) -> f64 {
        self.max_temperature - self.min_temperature
    }

    /// Human-readable consolidated condition phrase
    ///
    /// Deduplicates while preserving first-seen order and joins
    /// grammatically: "A", "A and B", "A, B, and C".
    #[must_use]
    pub fn conditions_summary(&self) -> String {
        let mut unique: Vec<&str> = Vec::new();
        for condition in &self.conditions {
            if !unique.contains(&condition.as_str()) {
                unique.push(condition);
            }
        }

        match unique.as_slice() {
            [] => String::new(),
            [only] => (*only).to_string(),
            [first, second] => format!("{first} and {second}"),
            [head @ .., last] => format!("{}, and {last}", head.join(", ")),
        }
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({})",
            self.date.format("%Y-%m-%d"),
            self.min_temperature,
            self.max_temperature,
            self.conditions_summary()
        )
    }
}
