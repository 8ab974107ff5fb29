//! CORS header plumbing.
//!
//! The status endpoint is consumed by a browser on a different origin, so
//! every response advertises `Access-Control-Allow-Origin: *` and the
//! preflight response spells out what the browser may send afterwards.
//! All header names and values live here; no other module hardcodes them.

use crate::response::Response;

pub(crate) const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

const ALLOW_METHODS: (&str, &str) = ("Access-Control-Allow-Methods", "GET, OPTIONS");
const ALLOW_HEADERS: (&str, &str) = ("Access-Control-Allow-Headers", "Content-Type");
// Preflight result may be cached for a day.
const MAX_AGE: (&str, &str) = ("Access-Control-Max-Age", "86400");

/// The preflight response: `200 OK`, empty body, full CORS header set.
pub(crate) fn preflight() -> Response {
    Response::builder()
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .header(ALLOW_METHODS.0, ALLOW_METHODS.1)
        .header(ALLOW_HEADERS.0, ALLOW_HEADERS.1)
        .header(MAX_AGE.0, MAX_AGE.1)
        .no_body()
}
