//! Gateway - TCP listeners that accept incoming connections.
//!
//! The Gateway binds one socket per configured listener and spawns a task for
//! each incoming client, running the handler for that listener's protocol.

use super::connection::Connection;
use super::xmpp;
use crate::auth::AuthAgent;
use crate::config::{ListenConfig, Protocol};
use crate::error::ListenerError;
use crate::handlers::Registry;
use crate::telemetry::spans;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{BufReader, BufWriter};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::task::JoinSet;
use tracing::{Instrument, debug, error, info, instrument, warn};

/// Pending-connection queue length for every listener.
const LISTEN_BACKLOG: u32 = 16;

/// State shared by every connection task.
#[derive(Clone)]
struct Shared {
    auth: Arc<dyn AuthAgent>,
    registry: Arc<Registry>,
    max_line_len: usize,
}

/// A bound listener.
struct Listener {
    name: Arc<str>,
    protocol: Protocol,
    listener: TcpListener,
}

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listeners: Vec<Listener>,
    shared: Shared,
}

impl Gateway {
    /// Bind every configured listener.
    ///
    /// Fails on the first listener that cannot be bound.
    pub fn bind(
        listen: &[ListenConfig],
        max_line_len: usize,
        auth: Arc<dyn AuthAgent>,
        registry: Arc<Registry>,
    ) -> Result<Self, ListenerError> {
        let mut listeners = Vec::with_capacity(listen.len());
        for cfg in listen {
            let listener = bind_socket(cfg.address).map_err(|source| ListenerError::Bind {
                name: cfg.name.clone(),
                address: cfg.address,
                source,
            })?;
            info!(
                name = %cfg.name,
                address = %cfg.address,
                protocol = %cfg.protocol,
                "Listener bound"
            );
            listeners.push(Listener {
                name: Arc::from(cfg.name.as_str()),
                protocol: cfg.protocol,
                listener,
            });
        }

        Ok(Self {
            listeners,
            shared: Shared {
                auth,
                registry,
                max_line_len,
            },
        })
    }

    /// Run the gateway, accepting connections until a listener fails.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        let mut tasks = JoinSet::new();
        for listener in self.listeners {
            tasks.spawn(accept_loop(listener, self.shared.clone()));
        }

        // Accept loops only return on error; the first one stops the process.
        while let Some(result) = tasks.join_next().await {
            result??;
        }
        Ok(())
    }
}

fn bind_socket(address: SocketAddr) -> std::io::Result<TcpListener> {
    let socket = match address {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    socket.bind(address)?;
    socket.listen(LISTEN_BACKLOG)
}

async fn accept_loop(listener: Listener, shared: Shared) -> Result<(), ListenerError> {
    loop {
        let (stream, addr) = match listener.listener.accept().await {
            Ok(accepted) => accepted,
            Err(source) => {
                error!(name = %listener.name, error = %source, "Failed to accept connection");
                return Err(ListenerError::Accept {
                    name: listener.name.to_string(),
                    source,
                });
            }
        };

        if let Err(e) = stream.set_nodelay(true) {
            warn!(%addr, error = %e, "Failed to set TCP_NODELAY");
        }

        let span = spans::connection(&listener.name, addr.ip());
        let protocol = listener.protocol;
        let shared = shared.clone();
        tokio::spawn(handle_client(stream, addr, protocol, shared).instrument(span));
    }
}

async fn handle_client(stream: TcpStream, addr: SocketAddr, protocol: Protocol, shared: Shared) {
    info!(%addr, %protocol, "Connection accepted");
    let (read, write) = stream.into_split();

    match protocol {
        Protocol::Irc => {
            let connection = Connection::new(
                BufReader::new(read),
                BufWriter::new(write),
                shared.max_line_len,
                shared.auth,
                shared.registry,
            );
            let reason = connection.run().await;
            info!(
                %addr,
                reason = reason.error_code(),
                clean = reason.is_clean(),
                "Connection closed"
            );
        }
        Protocol::Xmpp => {
            if let Err(e) = xmpp::serve(write).await {
                debug!(%addr, error = %e, "Error while closing XMPP connection");
            }
        }
    }
}
