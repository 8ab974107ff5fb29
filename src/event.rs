//! Incoming invocation event.
//!
//! The hosting gateway hands the function a JSON event. Of everything the
//! platform packs into it, this service consults a single field:
//! `httpMethod`. Unknown fields deserialize to nothing and are dropped.

use serde::Deserialize;

/// A trigger event, as delivered by the HTTP gateway.
///
/// An event with no `httpMethod` field is treated as a `GET`, matching the
/// gateway's own default for direct invocations.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default = "default_http_method")]
    http_method: String,
}

fn default_http_method() -> String {
    "GET".to_owned()
}

impl Event {
    /// Builds an event from a raw method string, for embeddings that sit in
    /// front of a real socket instead of a gateway.
    pub fn new(method: impl Into<String>) -> Self {
        Self { http_method: method.into() }
    }

    pub fn http_method(&self) -> &str {
        &self.http_method
    }
}
