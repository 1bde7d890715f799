//! Compiled-in configuration for both app variants.
//!
//! There is no config file, no CLI flag, and no environment variable that
//! changes the HTTP contract. Orchestration tests depend on both binaries
//! behaving identically on every start, so host, port, and response bodies
//! are constants.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// All interfaces, so the container port mapping works.
pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Fixed listening port for both variants.
pub const PORT: u16 = 8000;

/// `/hello` body served by [`Variant::Liveness`].
pub const LIVENESS_HELLO: &str =
    "Hello, Guys! This is Flask App! for Crashloop/LivenessProbe testing by Naveen Kalapala";

/// `/hello` body served by [`Variant::Crashloop`].
pub const CRASHLOOP_HELLO: &str =
    "Hello, Guys! This is Flask App! for crashloop testing by Naveen Kalapala";

/// `/health` body. Only [`Variant::Liveness`] exposes the route.
pub const HEALTHY: &str = "Im Healthy! Don`t Worry!";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "troubleshootings=info,tower_http=warn";

/// Address both binaries bind to: `0.0.0.0:8000`.
pub fn listen_addr() -> SocketAddr {
    SocketAddr::new(HOST, PORT)
}

/// Which of the two deployment targets a process is serving.
///
/// The variants are near-duplicates and are kept as separate configurations
/// rather than merged behind a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `GET /hello` and `GET /health`; the target for liveness-probe tests.
    Liveness,
    /// `GET /hello` only; `/health` falls through to 404.
    Crashloop,
}

impl Variant {
    /// Fixed body returned by `GET /hello`.
    pub fn hello_message(self) -> &'static str {
        match self {
            Self::Liveness => LIVENESS_HELLO,
            Self::Crashloop => CRASHLOOP_HELLO,
        }
    }

    /// Whether `GET /health` is routed.
    pub fn serves_health(self) -> bool {
        matches!(self, Self::Liveness)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Liveness => "liveness",
            Self::Crashloop => "crashloop",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_addr_is_all_interfaces_port_8000() {
        assert_eq!(listen_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn hello_messages_differ_only_in_wording() {
        assert_eq!(
            Variant::Liveness.hello_message(),
            "Hello, Guys! This is Flask App! for Crashloop/LivenessProbe testing by Naveen Kalapala"
        );
        assert_eq!(
            Variant::Crashloop.hello_message(),
            "Hello, Guys! This is Flask App! for crashloop testing by Naveen Kalapala"
        );
    }

    #[test]
    fn only_liveness_serves_health() {
        assert!(Variant::Liveness.serves_health());
        assert!(!Variant::Crashloop.serves_health());
    }

    #[test]
    fn healthy_body_keeps_backtick() {
        assert_eq!(HEALTHY, "Im Healthy! Don`t Worry!");
    }

    #[test]
    fn display_names() {
        assert_eq!(Variant::Liveness.to_string(), "liveness");
        assert_eq!(Variant::Crashloop.to_string(), "crashloop");
    }
}
