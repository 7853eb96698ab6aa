//! `/api` path mapping onto the upstream competition pages.

/// Maps a path below `/api` to the upstream path.
///
/// `/competitors…` becomes `/event/<competition>/competitors…` and `/events…`
/// becomes `/event/<competition>/event…`. Anything else passes through.
/// Only a leading prefix is replaced, so `/competitors-old` is rewritten too.
pub fn rewrite_path(path: &str, competition_id: &str) -> String {
    if let Some(rest) = path.strip_prefix("/competitors") {
        format!("/event/{}/competitors{}", competition_id, rest)
    } else if let Some(rest) = path.strip_prefix("/events") {
        format!("/event/{}/event{}", competition_id, rest)
    } else {
        path.to_string()
    }
}

/// The part of a request path below the `/api` mount, `/` when nothing is left.
pub(crate) fn strip_api_prefix(path: &str) -> &str {
    match path.strip_prefix("/api") {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}
