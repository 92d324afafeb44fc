//! Telemetry utilities.

/// Standardized span constructors for gateway observability.
pub mod spans {
    use std::net::IpAddr;
    use tracing::{Span, info_span};

    /// Create a span for a client connection, labelled `<listener><ip>`.
    pub fn connection(listener: &str, ip: IpAddr) -> Span {
        info_span!("connection", task = %format_args!("{listener}<{ip}>"))
    }

    /// Create a span for a command execution.
    pub fn command(name: &str, params: usize) -> Span {
        info_span!("command", name = %name, params)
    }
}
