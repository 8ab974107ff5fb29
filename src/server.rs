//! Standalone HTTP server and graceful shutdown.
//!
//! In production the dispatcher runs behind a serverless gateway and this
//! module never loads. For local development, curl, and container deploys
//! without a gateway, [`Server`] puts the same function behind a real
//! socket. It is path-agnostic on purpose: the gateway invokes the function
//! for every path under its trigger URL, so the embedding does too.
//!
//! Shutdown follows the usual pod lifecycle: on SIGTERM (or Ctrl-C locally)
//! the server stops accepting, drains in-flight connections, then returns
//! from [`Server::serve`] so `main` can exit cleanly.

use std::net::SocketAddr;

use bytes::Bytes;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Error;
use crate::event::Event;
use crate::handler;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not a valid `host:port` string.
    pub fn bind(addr: &str) -> Self {
        let addr: SocketAddr = addr.parse().expect("invalid socket address");
        Self { addr }
    }

    /// Starts accepting connections and feeding them through the dispatcher.
    ///
    /// Returns only after a full graceful shutdown: a signal arrives, then
    /// every in-flight request completes.
    pub async fn serve(self) -> Result<(), Error> {
        let listener = TcpListener::bind(self.addr).await?;

        info!(addr = %self.addr, "vpn-status listening");

        // Every connection task lands in the JoinSet so the drain below can
        // wait for all of them.
        let mut tasks = tokio::task::JoinSet::new();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Checked first: a signal must stop the accept loop even if
                // more connections are already queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // The dispatcher is stateless, so the service is a
                        // bare fn: no Arc, nothing captured.
                        let svc = service_fn(respond);

                        // auto::Builder speaks whichever of HTTP/1.1 and
                        // HTTP/2 the client negotiates.
                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished tasks so the set stays bounded.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("vpn-status stopped");
        Ok(())
    }
}

// ── Request bridge ────────────────────────────────────────────────────────────

/// Bridges one wire request to one gateway-style event, dispatches it, and
/// bridges the record back.
///
/// The error type is [`Infallible`](std::convert::Infallible): every
/// outcome, 405 included, is a normal response, so hyper never sees an
/// error from us.
async fn respond(
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, std::convert::Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let reply = handler::dispatch(&Event::new(method.as_str()));

    info!(%method, path, status = reply.status_code(), "handled");
    Ok(reply.into_wire())
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first shutdown signal the process receives.
///
/// On Unix this listens for both SIGTERM (sent by the orchestrator) and
/// SIGINT (Ctrl-C, for local dev). On other platforms only Ctrl-C exists.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c  => {}
        () = sigterm => {}
    }
}
