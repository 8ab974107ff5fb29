//! HTTP status codes as a typed enum.
//!
//! The dispatcher itself only ever emits `Ok` and `MethodNotAllowed`; the
//! wire bridge adds `InternalServerError` as its last-resort fallback. The
//! rest of the set is here so embedding code never reaches for a bare `u16`.

/// Status codes this service and its embedding can emit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                  // 200
    NoContent,           // 204

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,          // 400
    Forbidden,           // 403
    NotFound,            // 404
    MethodNotAllowed,    // 405

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError, // 500
    ServiceUnavailable,  // 503
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::NoContent           => 204,
            Status::BadRequest          => 400,
            Status::Forbidden           => 403,
            Status::NotFound            => 404,
            Status::MethodNotAllowed    => 405,
            Status::InternalServerError => 500,
            Status::ServiceUnavailable  => 503,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_wire_codes() {
        assert_eq!(u16::from(Status::Ok), 200);
        assert_eq!(u16::from(Status::MethodNotAllowed), 405);
        assert_eq!(u16::from(Status::InternalServerError), 500);
    }
}
