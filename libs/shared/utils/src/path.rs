use std::sync::LazyLock;

use axum::http::Uri;
use regex::Regex;

use shared_models::AppError;

static NUMERIC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric id pattern is valid"));

/// Resolves an `{id}` path segment.
///
/// A segment that is not purely ASCII digits means no route matched, so it
/// yields the default `Not Found` error. A numeric segment too large for
/// `u64` is well-formed but cannot name any entity: `Ok(None)`.
pub fn parse_path_id(raw: &str) -> Result<Option<u64>, AppError> {
    if !NUMERIC_ID.is_match(raw) {
        return Err(AppError::route_not_found());
    }
    Ok(raw.parse().ok())
}

/// Resolves the trailing `{id}` segment straight from the request URI.
///
/// The segment is checked as received, before any percent-decoding, so
/// `/patients/%31` is not an alias for `/patients/1`.
pub fn path_id_from_uri(uri: &Uri) -> Result<Option<u64>, AppError> {
    let segment = uri.path().rsplit('/').next().unwrap_or_default();
    parse_path_id(segment)
}
