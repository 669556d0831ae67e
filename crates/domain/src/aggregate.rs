//! Daily forecast aggregation
//!
//! Reduces a time-ordered sequence of sub-daily weather samples into at most
//! `horizon` per-day summaries. Pure function: no I/O, no state, safe to
//! call concurrently.

use chrono::NaiveDate;

use crate::entities::{DailySummary, WeatherSample};
use crate::errors::DomainError;

/// Aggregate raw samples into per-day summaries
///
/// Samples are grouped by calendar date, preserving the first-encountered
/// order of distinct dates (the grouping is stable even for dates that
/// appear non-contiguously). Each group reduces to the maximum of the
/// per-sample maxima, the minimum of the per-sample minima, and the distinct
/// condition descriptions in order of first appearance. Groups are emitted
/// ascending by date and truncated to the *earliest* `horizon` dates; fewer
/// than `horizon` distinct dates yields fewer summaries, and the caller
/// decides whether that is acceptable.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a zero horizon and
/// `DomainError::DataProcessing` when a group violates the daily summary
/// invariants (malformed upstream data, never silently repaired).
pub fn aggregate_daily(
    samples: &[WeatherSample],
    horizon: usize,
) -> Result<Vec<DailySummary>, DomainError> {
    if horizon == 0 {
        return Err(DomainError::validation("forecast horizon must be positive"));
    }

    let mut groups: Vec<(NaiveDate, Vec<&WeatherSample>)> = Vec::new();
    for sample in samples {
        let date = sample.date();
        match groups.iter_mut().find(|(group_date, _)| *group_date == date) {
            Some((_, group)) => group.push(sample),
            None => groups.push((date, vec![sample])),
        }
    }

    // Stable sort: insertion order breaks ties on equal dates
    groups.sort_by_key(|(date, _)| *date);

    groups
        .into_iter()
        .take(horizon)
        .map(|(date, group)| {
            let max_temperature = group
                .iter()
                .map(|s| s.temperature_max)
                .fold(f64::NEG_INFINITY, f64::max);
            let min_temperature = group
                .iter()
                .map(|s| s.temperature_min)
                .fold(f64::INFINITY, f64::min);

            let mut conditions: Vec<String> = Vec::new();
            for sample in &group {
                if !conditions.iter().any(|c| c == &sample.description) {
                    conditions.push(sample.description.clone());
                }
            }

            DailySummary::new(date, max_temperature, min_temperature, conditions)
        })
        .collect()
}
