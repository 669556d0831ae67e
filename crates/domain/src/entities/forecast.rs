//! Complete forecast entity

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::DailySummary;
use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// A complete multi-day forecast, optionally with an AI-generated narrative
///
/// The daily summary sequence must contain exactly as many entries as the
/// configured forecast horizon; anything else signals that upstream data was
/// too sparse or malformed and is rejected at construction time.
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    location: GeoLocation,
    daily_summaries: Vec<DailySummary>,
    narrative: Option<String>,
    style: String,
    generated_at: DateTime<Utc>,
}

impl Forecast {
    /// Create a new forecast with invariant validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DataProcessing` when the summary count does not
    /// equal `horizon`, and `DomainError::Validation` when a narrative is
    /// attached but blank.
    pub fn new(
        location: GeoLocation,
        daily_summaries: Vec<DailySummary>,
        horizon: usize,
        style: impl Into<String>,
        narrative: Option<String>,
    ) -> Result<Self, DomainError> {
        if daily_summaries.len() != horizon {
            return Err(DomainError::data_processing(format!(
                "expected {horizon} daily summaries, got {}",
                daily_summaries.len()
            )));
        }
        if let Some(text) = &narrative {
            if text.trim().is_empty() {
                return Err(DomainError::validation("narrative cannot be blank"));
            }
        }
        Ok(Self {
            location,
            daily_summaries,
            narrative,
            style: style.into(),
            generated_at: Utc::now(),
        })
    }

    /// The forecast location
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// The per-day summaries, ascending by date
    #[must_use]
    pub fn daily_summaries(&self) -> &[DailySummary] {
        &self.daily_summaries
    }

    /// AI-generated narrative, when attached
    #[must_use]
    pub fn narrative(&self) -> Option<&str> {
        self.narrative.as_deref()
    }

    /// Narrative style tag
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// When this forecast was assembled
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Serialize the forecast to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DataProcessing` if serialization fails.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::data_processing(format!("forecast serialization: {e}")))
    }
}
