//! Weather insight service
//!
//! Builds a structured weather context, asks the inference backend for
//! practical recommendations, and degrades to a static summary when the
//! backend fails. Callers never see an inference error.

use std::fmt::Write as _;
use std::sync::Arc;

use domain::DailySummary;
use tracing::{debug, instrument, warn};

use crate::ports::{CurrentConditions, InferencePort, Units};

const SYSTEM_PROMPT: &str = "You are a professional meteorologist. Provide practical weather \
                             insights and recommendations based on the data.";

/// Service that turns weather data into a natural-language narrative
pub struct InsightService {
    inference: Arc<dyn InferencePort>,
    units: Units,
}

impl std::fmt::Debug for InsightService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightService")
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

impl InsightService {
    /// Create a new insight service
    pub fn new(inference: Arc<dyn InferencePort>, units: Units) -> Self {
        Self { inference, units }
    }

    /// Generate a narrative for the given conditions and forecast
    ///
    /// Inference failures are absorbed: the returned string is then a
    /// fixed fallback built from the current conditions alone.
    #[instrument(skip_all, fields(location = %location, days = summaries.len()))]
    pub async fn compose(
        &self,
        location: &str,
        current: &CurrentConditions,
        summaries: &[DailySummary],
    ) -> String {
        let context = self.weather_context(location, current, summaries);
        let message = format!("Analyze this weather data and provide insights:\n{context}");

        match self.inference.generate_with_system(SYSTEM_PROMPT, &message).await {
            Ok(result) => {
                debug!(
                    model = %result.model,
                    latency_ms = result.latency_ms,
                    "Generated weather narrative"
                );
                result.content
            }
            Err(err) => {
                warn!(error = %err, "Inference failed, using fallback narrative");
                self.fallback_narrative(current)
            }
        }
    }

    /// Render the model-facing weather context
    fn weather_context(
        &self,
        location: &str,
        current: &CurrentConditions,
        summaries: &[DailySummary],
    ) -> String {
        let temp = self.units.temperature_suffix();
        let wind = self.units.wind_speed_suffix();

        let mut context = format!(
            "Current weather in {location}:\n\
             - Temperature: {:.0}{temp} (feels like {:.0}{temp})\n\
             - Condition: {}\n\
             - Humidity: {}%\n\
             - Wind: {:.0} {wind}\n",
            current.temperature,
            current.feels_like,
            current.description,
            current.humidity,
            current.wind_speed,
        );

        if !summaries.is_empty() {
            let _ = write!(context, "\n{}-day forecast:", summaries.len());
            for day in summaries {
                let _ = write!(
                    context,
                    "\n- {}: {:.0}°/{:.0}° - {}",
                    day.date(),
                    day.max_temperature(),
                    day.min_temperature(),
                    day.conditions_summary()
                );
            }
        }

        context
    }

    fn fallback_narrative(&self, current: &CurrentConditions) -> String {
        format!(
            "Weather analysis unavailable. Current conditions: {:.0}{}, {}",
            current.temperature,
            self.units.temperature_suffix(),
            current.description
        )
    }
}
