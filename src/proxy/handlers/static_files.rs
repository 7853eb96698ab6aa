//! Static front-end files with single-page-app fallback.

use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::proxy::types::ProxyState;

/// Serves a file from the dist directory, or `index.html` when there is none.
///
/// Answers 404 when the dist directory has no `index.html`.
pub async fn static_handler(State(state): State<ProxyState>, uri: Uri) -> Response {
    if let Some(file) = resolve(&state.dist, uri.path()) {
        if let Some(response) = read_file(&file).await {
            return response;
        }
    }

    log::debug!("Serving SPA for: {}", uri.path());
    match read_file(&state.dist.join("index.html")).await {
        Some(response) => response,
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Maps a request path into `dist`, refusing anything that climbs out of it.
fn resolve(dist: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    let mut resolved = dist.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    (resolved != dist).then_some(resolved)
}

async fn read_file(path: &Path) -> Option<Response> {
    let metadata = tokio::fs::metadata(path).await.ok()?;
    if !metadata.is_file() {
        return None;
    }
    match tokio::fs::read(path).await {
        Ok(contents) => Some(([(CONTENT_TYPE, content_type(path))], contents).into_response()),
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
