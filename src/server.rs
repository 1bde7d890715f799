//! Process lifecycle: `Starting` → `Serving` → `Stopped`.
//!
//! Binding happens before any route is reachable and a bind failure is fatal.
//! There is no path back to `Starting`; recovering from a crash is the
//! orchestrator's job.

use std::{future::Future, io, net::SocketAddr};

use axum::Router;
use tokio::{net::TcpListener, signal};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, warn, Level};

use crate::{api, config, config::Variant, error::ServerError};

/// The variant's router wrapped in request tracing.
///
/// The trace layer only records spans; status, headers and body are whatever
/// the router produces, including axum's default 404/405.
pub fn app(variant: Variant) -> Router {
    api::router(variant).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// `Starting`: bind the listening socket.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|source| {
        error!(%addr, error = %source, "failed to bind listener");
        ServerError::Bind { addr, source }
    })
}

/// `Serving`: accept connections until `shutdown` resolves, then drain and
/// return (`Stopped`).
pub async fn serve<F>(
    listener: TcpListener,
    variant: Variant,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%variant, %addr, "serving");
    }

    axum::serve(listener, app(variant))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    info!(%variant, "stopped");
    Ok(())
}

/// Bind `0.0.0.0:8000` and serve `variant` until SIGINT or SIGTERM.
pub async fn run(variant: Variant) -> Result<(), ServerError> {
    let addr = config::listen_addr();
    info!(%variant, %addr, "starting");

    let listener = bind(addr).await?;
    serve(listener, variant, shutdown_signal()).await
}

/// Resolves on SIGINT, or on SIGTERM where the platform has it. SIGTERM is
/// what the kubelet sends before restarting a container.
pub async fn shutdown_signal() {
    let name = tokio::select! {
        () = wait_for("SIGINT", signal::ctrl_c()) => "SIGINT",
        () = wait_for("SIGTERM", terminate()) => "SIGTERM",
    };

    info!(signal = name, "shutdown signal received, draining connections");
}

/// Completes when `fired` does. If its handler cannot be installed this
/// never completes, leaving the other signal as the only way out.
async fn wait_for(name: &'static str, fired: impl Future<Output = io::Result<()>>) {
    if let Err(e) = fired.await {
        warn!(signal = name, error = %e, "failed to install signal handler");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() -> io::Result<()> {
    signal::unix::signal(signal::unix::SignalKind::terminate())?
        .recv()
        .await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()> {
    std::future::pending().await
}
