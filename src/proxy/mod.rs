//! Same-origin proxy for the front end.
//!
//! Serves two kinds of paths:
//! - `/api/*` - forwarded to the upstream competition site, with CORS headers
//! - everything else - static files from the dist directory, falling back to
//!   `index.html`
//!
//! The upstream pages do not allow cross-origin reads, so the browser talks to
//! this server instead.

mod handlers;
mod rewrite;
mod types;

use std::path::PathBuf;

use axum::routing::{options, MethodRouter};
use axum::Router;

use crate::config::{Config, ServeOpt};
use crate::initialization::init_proxy_client;
use handlers::{forward_handler, preflight_handler, static_handler};

pub use rewrite::rewrite_path;
pub use types::{ProxyErrorBody, ProxyState};

impl ProxyState {
    /// State for serving `config`'s upstream and competition.
    pub fn new(
        client: std::sync::Arc<reqwest::Client>,
        config: &Config,
        dist: PathBuf,
        dev: bool,
    ) -> Self {
        Self {
            client,
            upstream: config.upstream_url.trim_end_matches('/').to_string(),
            competition_id: config.competition_id.clone(),
            dist,
            dev,
        }
    }
}

fn api_route() -> MethodRouter<ProxyState> {
    options(preflight_handler).fallback(forward_handler)
}

/// Builds the proxy router.
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api", api_route())
        .route("/api/", api_route())
        .route("/api/{*rest}", api_route())
        .fallback(static_handler)
        .with_state(state)
}

/// Creates and starts the proxy server
pub async fn start_proxy_server(config: &Config, opt: &ServeOpt) -> Result<(), anyhow::Error> {
    let client = init_proxy_client(config)?;
    let state = ProxyState::new(client, config, opt.dist.clone(), opt.dev);
    if !opt.dist.join("index.html").is_file() {
        log::warn!(
            "No index.html in {}; non-API paths will answer 404",
            opt.dist.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", opt.port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind proxy server to port {}: {}", opt.port, e))?;

    log::info!("Server listening on http://localhost:{}", opt.port);
    log::info!("  - API: /api/* → {}", state.upstream);
    log::info!("  - Static: {}", opt.dist.display());

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Proxy server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn spawn_proxy(upstream: &str, dist: PathBuf, dev: bool) -> String {
        let config = Config {
            upstream_url: upstream.to_string(),
            competition_id: "TestOpen2025".to_string(),
            ..Default::default()
        };
        let client = init_proxy_client(&config).expect("proxy client");
        let app = router(ProxyState::new(client, &config, dist, dev));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}", addr)
    }

    fn client() -> reqwest::Client {
        reqwest::Client::new()
    }

    #[tokio::test]
    async fn test_rewrites_and_relays_with_cors() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/event/TestOpen2025/competitors"))
            .and(query_param("page", "2"))
            .and(header("origin", upstream.uri().as_str()))
            .and(header("referer", upstream.uri().as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-frame-options", "DENY")
                    .insert_header("content-security-policy", "default-src 'self'")
                    .insert_header("x-upstream", "yes")
                    .set_body_string("<table></table>"),
            )
            .expect(1)
            .mount(&upstream)
            .await;

        let dist = tempfile::tempdir().unwrap();
        let base = spawn_proxy(&upstream.uri(), dist.path().to_path_buf(), false).await;
        let response = client()
            .get(format!("{}/api/competitors?page=2", base))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(headers["x-upstream"], "yes");
        assert!(headers.get("x-frame-options").is_none());
        assert!(headers.get("content-security-policy").is_none());
        assert_eq!(response.text().await.unwrap(), "<table></table>");
    }

    #[tokio::test]
    async fn test_events_path_and_upstream_status_pass_through() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/event/TestOpen2025/event"))
            .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
            .expect(1)
            .mount(&upstream)
            .await;

        let dist = tempfile::tempdir().unwrap();
        let base = spawn_proxy(&upstream.uri(), dist.path().to_path_buf(), false).await;
        let response = client()
            .post(format!("{}/api/events", base))
            .body("x=1")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 418);
        assert_eq!(response.text().await.unwrap(), "teapot");
    }

    #[tokio::test]
    async fn test_api_root_is_proxied_not_served_as_spa() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("UPSTREAM"))
            .expect(2)
            .mount(&upstream)
            .await;

        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "SPA").unwrap();
        let base = spawn_proxy(&upstream.uri(), dist.path().to_path_buf(), false).await;

        for route in ["/api", "/api/"] {
            let response = client().get(format!("{}{}", base, route)).send().await.unwrap();
            assert_eq!(response.text().await.unwrap(), "UPSTREAM", "{}", route);
        }
    }

    #[tokio::test]
    async fn test_preflight_does_not_reach_upstream() {
        let upstream = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let dist = tempfile::tempdir().unwrap();
        let base = spawn_proxy(&upstream.uri(), dist.path().to_path_buf(), false).await;
        let response = client()
            .request(reqwest::Method::OPTIONS, format!("{}/api/competitors", base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 204);
        assert_eq!(response.headers()["access-control-max-age"], "86400");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let dist = tempfile::tempdir().unwrap();
        // Port 9 (discard) is not listening
        let base = spawn_proxy("http://127.0.0.1:9", dist.path().to_path_buf(), true).await;
        let response = client()
            .get(format!("{}/api/competitors", base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 502);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Bad Gateway");
        assert_eq!(body["message"], "Failed to proxy request to upstream server");
        assert_eq!(body["path"], "/competitors");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_bad_gateway_hides_details_outside_dev_mode() {
        let dist = tempfile::tempdir().unwrap();
        let base = spawn_proxy("http://127.0.0.1:9", dist.path().to_path_buf(), false).await;
        let body: serde_json::Value = client()
            .get(format!("{}/api/events", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_static_files_and_spa_fallback() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<div id=app></div>").unwrap();
        std::fs::create_dir(dist.path().join("assets")).unwrap();
        std::fs::write(dist.path().join("assets").join("app.js"), "console.log(1)").unwrap();

        let base = spawn_proxy("http://127.0.0.1:9", dist.path().to_path_buf(), false).await;
        let client = client();

        let asset = client.get(format!("{}/assets/app.js", base)).send().await.unwrap();
        assert_eq!(asset.status(), 200);
        assert_eq!(
            asset.headers()["content-type"],
            "text/javascript; charset=utf-8"
        );
        assert_eq!(asset.text().await.unwrap(), "console.log(1)");

        for route in ["/", "/ranking/333bf", "/assets/missing.css"] {
            let page = client.get(format!("{}{}", base, route)).send().await.unwrap();
            assert_eq!(page.status(), 200, "{}", route);
            assert_eq!(page.text().await.unwrap(), "<div id=app></div>");
        }
    }

    #[tokio::test]
    async fn test_missing_index_is_not_found() {
        let dist = tempfile::tempdir().unwrap();
        let base = spawn_proxy("http://127.0.0.1:9", dist.path().to_path_buf(), false).await;
        let response = client().get(format!("{}/", base)).send().await.unwrap();
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn test_state_trims_upstream() {
        let config = Config {
            upstream_url: "https://cubing-tw.net/".to_string(),
            ..Default::default()
        };
        let state = ProxyState::new(
            Arc::new(reqwest::Client::new()),
            &config,
            PathBuf::from("dist"),
            false,
        );
        assert_eq!(state.upstream, "https://cubing-tw.net");
    }
}
