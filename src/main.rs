//! Standalone entrypoint.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl -X OPTIONS -i http://localhost:3000/
//!   curl -X DELETE -i http://localhost:3000/

use vpn_status::Server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("VPN_STATUS_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());

    Server::bind(&addr)
        .serve()
        .await
        .expect("server error");
}
