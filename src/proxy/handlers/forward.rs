//! Forwarding of `/api` requests to the upstream site.

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::header::{
    CONNECTION, CONTENT_LENGTH, CONTENT_SECURITY_POLICY, HOST, ORIGIN, REFERER, TRANSFER_ENCODING,
    X_FRAME_OPTIONS,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::cors::apply_response_cors;
use crate::error_handling::ProxyError;
use crate::proxy::rewrite::{rewrite_path, strip_api_prefix};
use crate::proxy::types::{ProxyErrorBody, ProxyState};

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Forwards one request and relays the upstream answer with CORS headers.
///
/// A failed exchange is answered with `502 Bad Gateway` and a JSON body.
pub async fn forward_handler(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let path = strip_api_prefix(uri.path()).to_string();
    let mut target = rewrite_path(&path, &state.competition_id);
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }
    log::info!("Proxying: {} {} → {}", method, path, target);

    match forward(&state, method, &target, headers, body).await {
        Ok(response) => {
            log::info!("Proxied response: {} → Status: {}", path, response.status());
            response
        }
        Err(e) => {
            log::error!("Proxy error: {} (path {})", e, path);
            let details = state.dev.then(|| e.to_string());
            (
                StatusCode::BAD_GATEWAY,
                Json(ProxyErrorBody::bad_gateway(&path, details)),
            )
                .into_response()
        }
    }
}

async fn forward(
    state: &ProxyState,
    method: Method,
    target: &str,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ProxyError> {
    let body = to_bytes(body, MAX_BODY_BYTES).await?;
    let url = format!("{}{}", state.upstream, target);

    let upstream = state
        .client
        .request(method, url)
        .headers(upstream_request_headers(headers, &state.upstream))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    let bytes = upstream.bytes().await?;

    for name in [
        X_FRAME_OPTIONS,
        CONTENT_SECURITY_POLICY,
        CONNECTION,
        TRANSFER_ENCODING,
        CONTENT_LENGTH,
    ] {
        response_headers.remove(name);
    }
    apply_response_cors(&mut response_headers);

    Ok((status, response_headers, bytes).into_response())
}

/// Browser headers as sent upstream: no `host`, and `origin`/`referer`
/// claiming the upstream itself.
fn upstream_request_headers(mut headers: HeaderMap, upstream: &str) -> HeaderMap {
    for name in [HOST, CONNECTION, CONTENT_LENGTH, TRANSFER_ENCODING] {
        headers.remove(name);
    }
    if let Ok(value) = HeaderValue::from_str(upstream) {
        headers.insert(ORIGIN, value.clone());
        headers.insert(REFERER, value);
    }
    headers
}
