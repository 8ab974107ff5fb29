//! Outgoing response record.
//!
//! The function returns a value, never writes to a socket: a status code, a
//! header map, a body string, and the gateway's `isBase64Encoded` flag. The
//! record serializes with camelCase keys, exactly the shape the gateway
//! expects back. [`Response::into_wire`] bridges the same record onto a real
//! HTTP connection for the standalone embedding.

use std::collections::BTreeMap;

use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::status::Status;

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing response record.
///
/// # Shortcuts (200 OK)
///
/// ```rust
/// use vpn_status::Response;
///
/// Response::json(r#"{"ok":true}"#.to_owned());
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use vpn_status::{Response, Status};
///
/// Response::builder()
///     .status(Status::MethodNotAllowed)
///     .header("Access-Control-Allow-Origin", "*")
///     .json(r#"{"error":"Method not allowed"}"#.to_owned());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub(crate) status_code: u16,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) body: String,
    pub(crate) is_base64_encoded: bool,
}

impl Response {
    /// `200 OK` with an `application/json` body.
    ///
    /// Pass the string from your serialiser directly, e.g.
    /// `serde_json::to_string(&val)?`.
    pub fn json(body: String) -> Self {
        Self::builder().json(body)
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: BTreeMap::new(), status: Status::Ok.into() }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded
    }

    /// Converts the record into a hyper response for the standalone server.
    ///
    /// `isBase64Encoded` is an artifact of the gateway contract and does not
    /// appear on the wire. Header names and values are static and known
    /// valid; if assembly fails anyway, the bridge logs and degrades to an
    /// empty 500 rather than tearing down the connection.
    pub(crate) fn into_wire(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status_code);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(Full::new(Bytes::from(self.body))).unwrap_or_else(|e| {
            error!("response assembly failed: {e}");
            let mut fallback = http::Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a body method, so every response states what it carries.
pub struct ResponseBuilder {
    headers: BTreeMap<String, String>,
    status: u16,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Terminate with a JSON body (`Content-Type: application/json`).
    pub fn json(mut self, body: String) -> Response {
        self.headers.insert("Content-Type".to_owned(), "application/json".to_owned());
        Response {
            status_code: self.status,
            headers: self.headers,
            body,
            is_base64_encoded: false,
        }
    }

    /// Terminate with an empty body and no content type.
    pub fn no_body(self) -> Response {
        Response {
            status_code: self.status,
            headers: self.headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shortcut_sets_status_and_content_type() {
        let resp = Response::json(r#"{"ok":true}"#.to_owned());
        assert_eq!(resp.status_code(), 200);
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert!(!resp.is_base64_encoded());
    }

    #[test]
    fn builder_applies_status_and_headers() {
        let resp = Response::builder()
            .status(Status::MethodNotAllowed)
            .header("Access-Control-Allow-Origin", "*")
            .json("{}".to_owned());
        assert_eq!(resp.status_code(), 405);
        assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
    }

    #[test]
    fn no_body_leaves_body_empty() {
        let resp = Response::builder().no_body();
        assert_eq!(resp.status_code(), 200);
        assert_eq!(resp.body(), "");
        assert!(resp.headers().is_empty());
    }

    #[test]
    fn serializes_with_gateway_field_names() {
        let resp = Response::json("{}".to_owned());
        let value = serde_json::to_value(&resp).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("statusCode"));
        assert!(obj.contains_key("headers"));
        assert!(obj.contains_key("body"));
        assert_eq!(value["isBase64Encoded"], serde_json::json!(false));
    }

    #[test]
    fn wire_bridge_preserves_status_headers_and_body() {
        let resp = Response::builder()
            .status(Status::MethodNotAllowed)
            .header("Access-Control-Allow-Origin", "*")
            .json(r#"{"error":"Method not allowed"}"#.to_owned());
        let wire = resp.into_wire();
        assert_eq!(wire.status(), http::StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            wire.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert_eq!(wire.headers().get("content-type").unwrap(), "application/json");
    }
}
