//! Pre-ranking order.
//!
//! Competitors are ordered by personal best, with the key order depending on
//! the event, then by name. Missing results sort last.

use std::cmp::Ordering;

use crate::models::{BestResult, Competitor, EventCode, RankingMap};

/// Which personal best decides the order first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    /// Average, then single
    AverageFirst,
    /// Single, then average (blindfolded events)
    SingleFirst,
}

impl SortPolicy {
    pub fn for_event(event: EventCode) -> Self {
        if event.is_single_first() {
            SortPolicy::SingleFirst
        } else {
            SortPolicy::AverageFirst
        }
    }

    fn keys(&self, best: &BestResult) -> [f64; 2] {
        match self {
            SortPolicy::AverageFirst => [sort_key(best.average), sort_key(best.single)],
            SortPolicy::SingleFirst => [sort_key(best.single), sort_key(best.average)],
        }
    }
}

/// Absent and non-finite values compare as +infinity.
fn sort_key(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(f64::INFINITY)
}

/// Orders `competitors` for display.
///
/// With an empty `results` map the input order is returned unchanged.
/// Otherwise the sort is stable: competitors tied on both results and on name
/// keep their input order.
pub fn rank(competitors: &[Competitor], results: &RankingMap, event: EventCode) -> Vec<Competitor> {
    let mut ranked = competitors.to_vec();
    if results.is_empty() {
        return ranked;
    }

    let policy = SortPolicy::for_event(event);
    ranked.sort_by(|a, b| compare(a, b, results, policy));
    ranked
}

fn compare(a: &Competitor, b: &Competitor, results: &RankingMap, policy: SortPolicy) -> Ordering {
    let best_a = results.get(&a.wca_id).copied().unwrap_or_default();
    let best_b = results.get(&b.wca_id).copied().unwrap_or_default();
    let [primary_a, secondary_a] = policy.keys(&best_a);
    let [primary_b, secondary_b] = policy.keys(&best_b);

    primary_a
        .total_cmp(&primary_b)
        .then_with(|| secondary_a.total_cmp(&secondary_b))
        .then_with(|| a.name.cmp(&b.name))
}
