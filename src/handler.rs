//! The request dispatcher.
//!
//! One total, pure function: an [`Event`] goes in, a [`Response`] record
//! comes out. Three branches, no side effects, no shared state, safe under
//! arbitrary concurrency. Unsupported methods are an ordinary return value
//! (405), never an error.

use std::str::FromStr;

use tracing::error;

use crate::cors;
use crate::event::Event;
use crate::method::Method;
use crate::response::Response;
use crate::servers::StatusReport;
use crate::status::Status;

/// Maps one invocation event to one response record.
///
/// - `OPTIONS` answers the browser preflight.
/// - `GET` returns the fleet status report.
/// - Anything else, including method strings that parse to nothing, gets a
///   405 with a JSON error body.
pub fn dispatch(event: &Event) -> Response {
    match Method::from_str(event.http_method()) {
        Ok(Method::Options) => cors::preflight(),
        Ok(Method::Get)     => status_report(),
        _                   => method_not_allowed(),
    }
}

fn status_report() -> Response {
    match serde_json::to_string(&StatusReport::current()) {
        Ok(body) => Response::builder()
            .header(cors::ALLOW_ORIGIN.0, cors::ALLOW_ORIGIN.1)
            .json(body),
        // Unreachable for a static table, but a broken serializer must not
        // take the endpoint down with a panic.
        Err(e) => {
            error!("status report serialization failed: {e}");
            Response::builder()
                .status(Status::InternalServerError)
                .header(cors::ALLOW_ORIGIN.0, cors::ALLOW_ORIGIN.1)
                .json(r#"{"error":"Internal server error"}"#.to_owned())
        }
    }
}

fn method_not_allowed() -> Response {
    Response::builder()
        .status(Status::MethodNotAllowed)
        .header(cors::ALLOW_ORIGIN.0, cors::ALLOW_ORIGIN.1)
        .json(r#"{"error":"Method not allowed"}"#.to_owned())
}
