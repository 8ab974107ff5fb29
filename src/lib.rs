//! # vpn-status
//!
//! A stateless status endpoint for a VPN server fleet.
//! One function, three answers. Nothing more.
//!
//! ## The contract
//!
//! The hosting gateway owns TLS, routing, rate limiting, and request-body
//! limits. This service owns response shaping only: it reads a single field
//! of the invocation event (`httpMethod`) and returns one of three fixed
//! records.
//!
//! - `OPTIONS` answers the browser's CORS preflight.
//! - `GET` returns the fleet list with `total` and `online` counts.
//! - Every other method gets a 405 with a JSON error body.
//!
//! The fleet table is compiled in, so the whole mapping is a pure function:
//! no I/O, no shared state, safe under arbitrary concurrency.
//!
//! ## Quick start
//!
//! As a library, feed the dispatcher an event and serialize the record back
//! to the gateway:
//!
//! ```rust
//! use vpn_status::{dispatch, Event};
//!
//! let event: Event = serde_json::from_str(r#"{"httpMethod":"GET"}"#)?;
//! let record = dispatch(&event);
//! assert_eq!(record.status_code(), 200);
//!
//! let reply = serde_json::to_string(&record)?;
//! assert!(reply.contains("\"statusCode\":200"));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! Standalone, the same function sits behind a real socket:
//!
//! ```rust,no_run
//! use vpn_status::Server;
//!
//! #[tokio::main]
//! async fn main() {
//!     Server::bind("0.0.0.0:3000").serve().await.unwrap();
//! }
//! ```

mod cors;
mod error;
mod event;
mod handler;
mod method;
mod response;
mod server;
mod servers;
mod status;

pub use error::Error;
pub use event::Event;
pub use handler::dispatch;
pub use method::Method;
pub use response::{Response, ResponseBuilder};
pub use server::Server;
pub use servers::{fleet, ServerStatus, StatusReport};
pub use status::Status;
