//! Personal-best lookups against the per-person record feed.
//!
//! Every lookup is best effort: a failure is logged, counted, and turns into
//! an absent result. Nothing is retried.

mod person;

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use reqwest::StatusCode;
use url::Url;

use crate::config::RANKING_POOL_SIZE;
use crate::error_handling::{FetchError, FetchStats};
use crate::models::{BestResult, Competitor, EventCode, RankingMap};
use crate::utils::map_bounded;

pub use person::{extract_best_times, PersonRecord, RoundResult};

/// Fetches personal bests for competitors with bounded concurrency.
#[derive(Debug, Clone)]
pub struct RankingFetcher {
    client: Arc<reqwest::Client>,
    feed_base: Url,
    pool_size: usize,
}

impl RankingFetcher {
    /// Creates a fetcher for the feed rooted at `feed_base_url`.
    ///
    /// `pool_size` is capped at [`RANKING_POOL_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns an error if `feed_base_url` is not a URL that can take a path.
    pub fn new(
        client: Arc<reqwest::Client>,
        feed_base_url: &str,
        pool_size: usize,
    ) -> Result<Self> {
        let feed_base = Url::parse(feed_base_url)
            .with_context(|| format!("Invalid person feed URL '{}'", feed_base_url))?;
        if feed_base.cannot_be_a_base() {
            return Err(anyhow!(
                "Person feed URL '{}' cannot take a path",
                feed_base_url
            ));
        }
        Ok(Self {
            client,
            feed_base,
            pool_size: pool_size.clamp(1, RANKING_POOL_SIZE),
        })
    }

    /// Lookups allowed in flight at once.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Feed document of one person: `<base>/persons/<wcaId>.json`.
    pub fn person_url(&self, wca_id: &str) -> Url {
        let mut url = self.feed_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("persons")
                .push(&format!("{}.json", wca_id));
        }
        url
    }

    /// Downloads and decodes one person's record.
    pub async fn fetch_person(&self, wca_id: &str) -> Result<PersonRecord, FetchError> {
        let response = self.client.get(self.person_url(wca_id)).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Best single and average of one competitor for `event`.
    ///
    /// An empty `wca_id` returns an absent result without touching the network.
    pub async fn fetch_best(&self, wca_id: &str, event: EventCode) -> BestResult {
        self.fetch_best_tracked(wca_id, event, &FetchStats::new())
            .await
    }

    async fn fetch_best_tracked(
        &self,
        wca_id: &str,
        event: EventCode,
        stats: &FetchStats,
    ) -> BestResult {
        if wca_id.is_empty() {
            return BestResult::ABSENT;
        }
        stats.record_attempt();
        match self.fetch_person(wca_id).await {
            Ok(record) => extract_best_times(&record, event),
            Err(e) => {
                log::warn!("Failed to load record for {}: {}", wca_id, e);
                stats.increment_failure(e.kind());
                BestResult::ABSENT
            }
        }
    }

    /// Fetches personal bests of every eligible competitor.
    ///
    /// Returns once every competitor has been attempted. The map holds one
    /// entry per WCA id, including entries with both values absent. Each call
    /// starts from an empty map.
    pub async fn fetch_ranking(&self, eligible: &[Competitor], event: EventCode) -> RankingMap {
        let stats = FetchStats::new();
        log::info!(
            "Fetching {} personal bests for {} with {} workers",
            eligible.len(),
            event,
            self.pool_size
        );

        let results = map_bounded(eligible, self.pool_size, |competitor| {
            let stats = &stats;
            async move {
                let best = self
                    .fetch_best_tracked(&competitor.wca_id, event, stats)
                    .await;
                (competitor.wca_id.clone(), best)
            }
        })
        .await;

        stats.log_summary(&format!("Pre-ranking for {}", event));
        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn competitor(name: &str, wca_id: &str) -> Competitor {
        Competitor {
            name: name.to_string(),
            wca_id: wca_id.to_string(),
            country: "Taiwan".to_string(),
            gender: "M".to_string(),
            events: BTreeSet::from([EventCode::Three]),
        }
    }

    fn fetcher(server: &MockServer) -> RankingFetcher {
        RankingFetcher::new(
            Arc::new(reqwest::Client::new()),
            &format!("{}/api", server.uri()),
            8,
        )
        .expect("valid feed url")
    }

    fn person_json(best: i64, average: i64) -> serde_json::Value {
        serde_json::json!({
            "results": {"Open2024": {"333": [{"best": best, "average": average}]}}
        })
    }

    #[test]
    fn test_person_url() {
        let fetcher = RankingFetcher::new(
            Arc::new(reqwest::Client::new()),
            "https://feed.example/api/",
            8,
        )
        .unwrap();
        assert_eq!(
            fetcher.person_url("2012PARK03").as_str(),
            "https://feed.example/api/persons/2012PARK03.json"
        );
        // Path separators in an id stay inside one segment
        assert_eq!(
            fetcher.person_url("a/b").as_str(),
            "https://feed.example/api/persons/a%2Fb.json"
        );
    }

    #[test]
    fn test_pool_size_is_capped() {
        let client = Arc::new(reqwest::Client::new());
        let fetcher = RankingFetcher::new(client.clone(), "https://feed.example/api", 64).unwrap();
        assert_eq!(fetcher.pool_size(), RANKING_POOL_SIZE);
        let fetcher = RankingFetcher::new(client, "https://feed.example/api", 0).unwrap();
        assert_eq!(fetcher.pool_size(), 1);
    }

    #[test]
    fn test_rejects_invalid_feed_url() {
        let client = Arc::new(reqwest::Client::new());
        assert!(RankingFetcher::new(client.clone(), "not a url", 8).is_err());
        assert!(RankingFetcher::new(client, "mailto:feed@example.org", 8).is_err());
    }

    #[tokio::test]
    async fn test_fetch_best_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/persons/2012PARK03.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(person_json(313, 421)))
            .expect(1)
            .mount(&server)
            .await;

        let best = fetcher(&server)
            .fetch_best("2012PARK03", EventCode::Three)
            .await;
        assert_eq!(best.single, Some(313.0));
        assert_eq!(best.average, Some(421.0));
    }

    #[tokio::test]
    async fn test_fetch_best_empty_id_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let best = fetcher(&server).fetch_best("", EventCode::Three).await;
        assert!(best.is_absent());
    }

    #[tokio::test]
    async fn test_fetch_best_failures_become_absent() {
        let server = MockServer::start().await;
        Mock::given(path("/api/persons/2000MISS01.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(path("/api/persons/2000BADJ01.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;
        Mock::given(path("/api/persons/2000BOOM01.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher = fetcher(&server);
        for id in ["2000MISS01", "2000BADJ01", "2000BOOM01"] {
            assert!(fetcher.fetch_best(id, EventCode::Three).await.is_absent(), "{}", id);
        }
    }

    #[tokio::test]
    async fn test_fetch_person_error_kinds() {
        let server = MockServer::start().await;
        Mock::given(path("/api/persons/2000MISS01.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(path("/api/persons/2000BADJ01.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{"))
            .mount(&server)
            .await;

        let fetcher = fetcher(&server);
        assert!(matches!(
            fetcher.fetch_person("2000MISS01").await,
            Err(FetchError::NotFound)
        ));
        assert!(matches!(
            fetcher.fetch_person("2000BADJ01").await,
            Err(FetchError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_ranking_has_entry_per_competitor_despite_failures() {
        let server = MockServer::start().await;
        for (i, id) in ["2010AAAA01", "2010BBBB01", "2010CCCC01"].iter().enumerate() {
            Mock::given(path(format!("/api/persons/{}.json", id)))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(person_json(500 + i as i64, 600)),
                )
                .mount(&server)
                .await;
        }
        Mock::given(path("/api/persons/2010FAIL01.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let eligible = vec![
            competitor("A", "2010AAAA01"),
            competitor("B", "2010BBBB01"),
            competitor("Fail", "2010FAIL01"),
            competitor("C", "2010CCCC01"),
            competitor("Unknown", "2010NONE01"),
        ];
        let ranking = fetcher(&server).fetch_ranking(&eligible, EventCode::Three).await;

        assert_eq!(ranking.len(), 5);
        assert_eq!(ranking["2010BBBB01"].single, Some(501.0));
        assert!(ranking["2010FAIL01"].is_absent());
        assert!(ranking["2010NONE01"].is_absent());
    }

    #[tokio::test]
    async fn test_fetch_ranking_completes_every_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(person_json(700, 800))
                    .set_delay(std::time::Duration::from_millis(30)),
            )
            .expect(20)
            .mount(&server)
            .await;

        let eligible: Vec<Competitor> = (0..20)
            .map(|i| competitor(&format!("C{}", i), &format!("2015TEST{:02}", i)))
            .collect();
        let ranking = fetcher(&server).fetch_ranking(&eligible, EventCode::Three).await;
        assert_eq!(ranking.len(), 20);
        assert!(ranking.values().all(|best| best.single == Some(700.0)));
    }

    #[derive(Default)]
    struct InFlight {
        current: AtomicUsize,
        peak: AtomicUsize,
        served: AtomicUsize,
    }

    async fn slow_person(State(counters): State<Arc<InFlight>>) -> Json<serde_json::Value> {
        let now = counters.current.fetch_add(1, Ordering::SeqCst) + 1;
        counters.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(std::time::Duration::from_millis(40)).await;
        counters.current.fetch_sub(1, Ordering::SeqCst);
        counters.served.fetch_add(1, Ordering::SeqCst);
        Json(person_json(700, 800))
    }

    #[tokio::test]
    async fn test_fetch_ranking_never_exceeds_pool_size() {
        let counters = Arc::new(InFlight::default());
        let app = Router::new()
            .route("/api/persons/{file}", get(slow_person))
            .with_state(Arc::clone(&counters));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        // Asking for more workers than allowed still caps at the pool size
        let fetcher = RankingFetcher::new(
            Arc::new(reqwest::Client::new()),
            &format!("http://{}/api", addr),
            32,
        )
        .unwrap();
        let eligible: Vec<Competitor> = (0..24)
            .map(|i| competitor(&format!("C{}", i), &format!("2016PEAK{:02}", i)))
            .collect();
        let ranking = fetcher.fetch_ranking(&eligible, EventCode::Three).await;

        assert_eq!(ranking.len(), 24);
        assert_eq!(counters.served.load(Ordering::SeqCst), 24);
        let peak = counters.peak.load(Ordering::SeqCst);
        assert!(peak <= RANKING_POOL_SIZE, "peak in flight was {}", peak);
        assert!(peak > 1, "lookups ran sequentially");
    }
}
