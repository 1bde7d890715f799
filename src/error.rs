//! Startup and serve-loop errors.
//!
//! Request handling never fails: unknown paths and methods are answered by
//! axum's defaults. The only errors are the listener failing to bind and the
//! accept loop dying, both fatal. Binaries wrap them in [`anyhow::Error`] so the
//! report lands on stderr and the process exits non-zero.

use std::{io, net::SocketAddr};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listening socket could not be bound (port in use, no privilege).
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error")]
    Serve(#[source] io::Error),
}
