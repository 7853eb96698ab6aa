//! Load actions driving [`AppState`] transitions.

use std::sync::Arc;

use anyhow::{Context, Result};

use super::state::AppState;
use super::status::Status;
use crate::config::Config;
use crate::fetch::RankingFetcher;
use crate::initialization::{init_client, init_extractor};
use crate::models::{EventCode, RankingMap};
use crate::parse::{scrape_competitors, scrape_events, TableExtractor};

/// Owns the HTTP client, the HTML extractor and the ranking fetcher.
///
/// Every action takes the current state and returns the next one together
/// with the status to show. On failure the state comes back unchanged.
pub struct Controller {
    client: Arc<reqwest::Client>,
    extractor: Arc<dyn TableExtractor>,
    fetcher: RankingFetcher,
    config: Config,
}

impl Controller {
    /// # Errors
    ///
    /// Returns an error if the person feed URL in `config` is invalid.
    pub fn new(
        client: Arc<reqwest::Client>,
        extractor: Arc<dyn TableExtractor>,
        config: Config,
    ) -> Result<Self> {
        let fetcher = RankingFetcher::new(
            Arc::clone(&client),
            &config.person_feed_url,
            config.concurrency,
        )?;
        Ok(Self {
            client,
            extractor,
            fetcher,
            config,
        })
    }

    /// Builds the client and extractor described by `config`.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let extractor = init_extractor(config.html_backend);
        Self::new(client, extractor, config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        log::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Upstream rejected {}", url))?;
        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", url))
    }

    pub async fn load_competitors(&self, state: AppState) -> (AppState, Status) {
        match self.fetch_page(&self.config.competitors_url()).await {
            Ok(html) => {
                let competitors = scrape_competitors(self.extractor.as_ref(), &html);
                let status = Status::competitors_loaded(competitors.len());
                (state.with_competitors(competitors), status)
            }
            Err(e) => {
                log::error!("Failed to load competitors: {:#}", e);
                (state, Status::competitors_failed())
            }
        }
    }

    pub async fn load_events(&self, state: AppState) -> (AppState, Status) {
        match self.fetch_page(&self.config.events_url()).await {
            Ok(html) => {
                let events = scrape_events(self.extractor.as_ref(), &html);
                let status = Status::events_loaded(events.len());
                (state.with_events(events), status)
            }
            Err(e) => {
                log::error!("Failed to load events: {:#}", e);
                (state, Status::events_failed())
            }
        }
    }

    /// Loads personal bests of everyone registered for `event`.
    ///
    /// Missing preconditions leave the state untouched and return an error
    /// status. With nobody registered the ranking is set to an empty map.
    pub async fn load_ranking(
        &self,
        state: AppState,
        event: Option<EventCode>,
    ) -> (AppState, Status) {
        let Some(event) = event else {
            return (state, Status::no_event_selected());
        };
        if state.competitors.is_empty() {
            return (state, Status::no_competitors_loaded());
        }

        let eligible = state.eligible(event);
        if eligible.is_empty() {
            let state = state.with_ranking(event, RankingMap::new());
            return (state, Status::nobody_registered());
        }

        let results = self.fetcher.fetch_ranking(&eligible, event).await;
        (state.with_ranking(event, results), Status::ranking_loaded(event))
    }
}
