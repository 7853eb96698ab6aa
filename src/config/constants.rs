//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: upstream
//! locations, the ranking worker pool size, timeouts and display placeholders.

/// Number of personal-best lookups allowed in flight at once.
pub const RANKING_POOL_SIZE: usize = 8;

/// Upstream site hosting the registration and event pages.
pub const DEFAULT_UPSTREAM_URL: &str = "https://cubing-tw.net";

/// Competition whose pages are scraped.
pub const DEFAULT_COMPETITION_ID: &str = "2025TaiwanChampionship";

/// Base of the per-person record feed (`<base>/persons/<wcaId>.json`).
pub const DEFAULT_PERSON_FEED_URL: &str =
    "https://raw.githubusercontent.com/robiningelbrecht/wca-rest-api/master/api";

/// Public WCA profile pages, used for display links only.
pub const WCA_PROFILE_BASE_URL: &str = "https://www.worldcubeassociation.org/persons";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default port of the proxy server (overridden by `PORT`).
pub const DEFAULT_SERVE_PORT: u16 = 4173;

/// Default directory holding the built single-page application.
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("prerank/", env!("CARGO_PKG_VERSION"));

/// Shown in place of a missing single or average.
pub const RESULT_PLACEHOLDER: &str = "—";

/// Shown in place of a missing name, id, country or gender.
pub const FIELD_PLACEHOLDER: &str = "-";

// Proxy CORS header values
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";
pub const CORS_MAX_AGE_SECS: &str = "86400";
