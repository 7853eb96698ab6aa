// Shared test helpers: upstream page fixtures and mock feed setup.

use std::sync::Arc;

use prerank::app::Controller;
use prerank::parse::ScraperExtractor;
use prerank::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COMPETITION: &str = "IntegrationOpen2025";

/// A competitors page with `rows` as `(name, wca_id, 333, 222, 333bf)` registrations.
#[allow(dead_code)]
pub fn competitors_page(rows: &[(&str, &str, bool, bool, bool)]) -> String {
    let mark = |registered: bool| if registered { "✓" } else { "" };
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (name, id, three, two, blind))| {
            let id_cell = if id.is_empty() {
                String::new()
            } else {
                format!("<a href=\"/persons/{0}\">{0}</a>", id)
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>Taiwan</td><td>M</td>\
                 <td>{}</td><td>{}</td><td></td><td></td><td></td><td></td><td>{}</td></tr>",
                i + 1,
                name,
                id_cell,
                mark(*three),
                mark(*two),
                mark(*blind)
            )
        })
        .collect();
    format!(
        "<html><body><table><thead><tr><th>#</th></tr></thead><tbody>{}</tbody></table></body></html>",
        body
    )
}

#[allow(dead_code)]
pub fn person_json(event: &str, best: i64, average: i64) -> serde_json::Value {
    serde_json::json!({
        "id": "ignored",
        "results": {"SomeOpen2024": {event: [{"best": best, "average": average}]}}
    })
}

#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    Config {
        upstream_url: server.uri(),
        competition_id: COMPETITION.to_string(),
        person_feed_url: format!("{}/feed/api", server.uri()),
        timeout_seconds: 2,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn test_controller(config: Config) -> Controller {
    let client = Arc::new(
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("test client"),
    );
    Controller::new(client, Arc::new(ScraperExtractor), config).expect("test controller")
}

#[allow(dead_code)]
pub async fn mount_competitors(server: &MockServer, html: String) {
    Mock::given(method("GET"))
        .and(path(format!("/event/{}/competitors", COMPETITION)))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub async fn mount_person(server: &MockServer, wca_id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/feed/api/persons/{}.json", wca_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
