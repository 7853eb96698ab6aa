//! Application state and its transitions.
//!
//! State is a plain value. Every transition consumes the current state and
//! returns the next one, so the selected ranking event and its results can
//! only change together.

use crate::config::{FIELD_PLACEHOLDER, RESULT_PLACEHOLDER};
use crate::models::{Competitor, EventCode, EventDescriptor, RankingMap};
use crate::ranking::rank;
use crate::time_codec::format_result;

/// Personal bests loaded for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub event: EventCode,
    pub results: RankingMap,
}

/// Everything loaded so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub competitors: Vec<Competitor>,
    pub events: Vec<EventDescriptor>,
    pub ranking: Option<Ranking>,
}

/// One display row of the ranking table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub position: usize,
    pub name: String,
    pub wca_id: String,
    pub country: String,
    pub gender: String,
    pub average: String,
    pub single: String,
    pub profile_url: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the competitor list. Any loaded ranking is discarded.
    pub fn with_competitors(self, competitors: Vec<Competitor>) -> Self {
        Self {
            competitors,
            ranking: None,
            ..self
        }
    }

    pub fn with_events(self, events: Vec<EventDescriptor>) -> Self {
        Self { events, ..self }
    }

    /// Selects `event` and its results, replacing any previous ranking.
    pub fn with_ranking(self, event: EventCode, results: RankingMap) -> Self {
        Self {
            ranking: Some(Ranking { event, results }),
            ..self
        }
    }

    pub fn ranking_event(&self) -> Option<EventCode> {
        self.ranking.as_ref().map(|r| r.event)
    }

    /// Competitors registered for `event`, in list order.
    pub fn eligible(&self, event: EventCode) -> Vec<Competitor> {
        self.competitors
            .iter()
            .filter(|c| c.is_registered_for(event))
            .cloned()
            .collect()
    }

    /// The competitor list in ranking order with formatted result cells.
    ///
    /// Without a ranking the list keeps its scraped order and every result
    /// cell shows the placeholder.
    pub fn ranked_rows(&self) -> Vec<RankedRow> {
        let ordered = match &self.ranking {
            Some(ranking) => rank(&self.competitors, &ranking.results, ranking.event),
            None => self.competitors.clone(),
        };

        ordered
            .into_iter()
            .enumerate()
            .map(|(index, competitor)| {
                let best = self
                    .ranking
                    .as_ref()
                    .and_then(|r| r.results.get(&competitor.wca_id).map(|b| (r.event, *b)));
                let (average, single) = match best {
                    Some((event, best)) => (
                        format_result(best.average, event, true),
                        format_result(best.single, event, false),
                    ),
                    None => (
                        RESULT_PLACEHOLDER.to_string(),
                        RESULT_PLACEHOLDER.to_string(),
                    ),
                };

                RankedRow {
                    position: index + 1,
                    profile_url: competitor.profile_url(),
                    name: or_placeholder(competitor.name),
                    wca_id: or_placeholder(competitor.wca_id),
                    country: or_placeholder(competitor.country),
                    gender: or_placeholder(competitor.gender),
                    average,
                    single,
                }
            })
            .collect()
    }
}

fn or_placeholder(value: String) -> String {
    if value.is_empty() {
        FIELD_PLACEHOLDER.to_string()
    } else {
        value
    }
}
