//! Network listener configuration.

use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;

/// Wire protocol served on a listener.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// RFC 1459 client protocol.
    #[default]
    Irc,
    /// Reserved slot; connections are logged and closed.
    Xmpp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Irc => f.write_str("irc"),
            Protocol::Xmpp => f.write_str("xmpp"),
        }
    }
}

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Listener name, used in per-connection task names (e.g., "IRC").
    pub name: String,
    /// Address to bind to (e.g., "0.0.0.0:6667").
    pub address: SocketAddr,
    /// Protocol handler for accepted connections.
    #[serde(default)]
    pub protocol: Protocol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_default_is_irc() {
        assert_eq!(Protocol::default(), Protocol::Irc);
    }

    #[test]
    fn listener_parses() {
        let listen: ListenConfig = toml::from_str(
            r#"
name = "XMPP"
address = "127.0.0.1:5269"
protocol = "xmpp"
"#,
        )
        .unwrap();
        assert_eq!(listen.name, "XMPP");
        assert_eq!(listen.address.port(), 5269);
        assert_eq!(listen.protocol, Protocol::Xmpp);
        assert_eq!(listen.protocol.to_string(), "xmpp");
    }

    #[test]
    fn unknown_protocol_is_rejected() {
        let res: Result<ListenConfig, _> = toml::from_str(
            r#"
name = "X"
address = "127.0.0.1:1"
protocol = "gopher"
"#,
        );
        assert!(res.is_err());
    }
}
