//! Person-feed records and personal-best extraction.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::models::{BestResult, EventCode};

/// One person's document in the feed.
///
/// `results` maps competition id → event code → rounds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub results: HashMap<String, HashMap<String, Vec<RoundResult>>>,
}

/// One round of one event at one competition.
///
/// Fields are kept as raw JSON so a non-numeric value only disqualifies that
/// field, not the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundResult {
    #[serde(default)]
    pub best: Option<Value>,
    #[serde(default)]
    pub single: Option<Value>,
    #[serde(default)]
    pub average: Option<Value>,
    #[serde(default)]
    pub mean: Option<Value>,
}

impl RoundResult {
    /// `best` when numeric, otherwise `single`.
    pub fn single_value(&self) -> Option<f64> {
        numeric(&self.best).or_else(|| numeric(&self.single))
    }

    /// `average` when numeric, otherwise `mean`.
    pub fn average_value(&self) -> Option<f64> {
        numeric(&self.average).or_else(|| numeric(&self.mean))
    }
}

fn numeric(value: &Option<Value>) -> Option<f64> {
    value.as_ref().and_then(Value::as_f64)
}

/// Reduces all of a person's rounds of `event` to the best single and average.
///
/// Zero and negative values (DNF, DNS, no average) are missing data.
pub fn extract_best_times(record: &PersonRecord, event: EventCode) -> BestResult {
    let rounds = record
        .results
        .values()
        .filter_map(|events| events.get(event.code()))
        .flatten();

    let mut best = BestResult::ABSENT;
    for round in rounds {
        best.single = min_positive(best.single, round.single_value());
        best.average = min_positive(best.average, round.average_value());
    }
    best
}

fn min_positive(current: Option<f64>, candidate: Option<f64>) -> Option<f64> {
    match candidate.filter(|v| v.is_finite() && *v > 0.0) {
        Some(value) => Some(current.map_or(value, |c| c.min(value))),
        None => current,
    }
}
