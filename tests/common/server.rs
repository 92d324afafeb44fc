//! Test server management.
//!
//! Spawns and manages chateaud instances for integration testing.

use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

/// Credentials every test server accepts.
pub const USERS: &[(&str, &str)] = &[("op", "op3rat0r"), ("joe", "jo3jo3"), ("tom", "t0mt0m")];

/// A test server instance.
pub struct TestServer {
    child: Child,
    irc_port: u16,
    xmpp_port: u16,
    // Holds the config file until the server is dropped.
    _data_dir: TempDir,
}

/// Ask the OS for a port nobody is listening on.
fn free_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

impl TestServer {
    /// Spawn a server with an IRC and an XMPP listener on free ports.
    pub async fn spawn() -> anyhow::Result<Self> {
        let irc_port = free_port()?;
        let xmpp_port = free_port()?;
        let data_dir = tempfile::tempdir()?;

        let mut config_content = format!(
            r#"
[server]
name = "test.server"

[limits]
max_line_len = 512

[[listen]]
name = "IRC"
address = "127.0.0.1:{irc_port}"
protocol = "irc"

[[listen]]
name = "XMPP"
address = "127.0.0.1:{xmpp_port}"
protocol = "xmpp"

[auth]
backend = "memory"
"#
        );
        for (user, pass) in USERS {
            config_content.push_str(&format!(
                "\n[[auth.users]]\nuser = \"{user}\"\npass = \"{pass}\"\n"
            ));
        }

        let config_path = data_dir.path().join("config.toml");
        std::fs::write(&config_path, config_content)?;

        let child = Command::new(binary_path())
            .arg(&config_path)
            .stdout(Stdio::null())
            .spawn()?;

        let server = Self {
            child,
            irc_port,
            xmpp_port,
            _data_dir: data_dir,
        };

        // Wait for server to start listening
        server.wait_until_ready().await?;

        Ok(server)
    }

    /// Wait until both listeners accept connections.
    async fn wait_until_ready(&self) -> anyhow::Result<()> {
        for _ in 0..50 {
            let irc = tokio::net::TcpStream::connect(("127.0.0.1", self.irc_port)).await;
            let xmpp = tokio::net::TcpStream::connect(("127.0.0.1", self.xmpp_port)).await;
            if irc.is_ok() && xmpp.is_ok() {
                return Ok(());
            }
            sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("Server failed to start within 5 seconds")
    }

    /// Address of the IRC listener.
    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.irc_port)
    }

    /// Address of the XMPP listener.
    #[allow(dead_code)]
    pub fn xmpp_address(&self) -> String {
        format!("127.0.0.1:{}", self.xmpp_port)
    }

    /// Create a new test client connected to the IRC listener.
    pub async fn connect(&self) -> anyhow::Result<super::client::TestClient> {
        super::client::TestClient::connect(&self.address()).await
    }
}

/// Path of the daemon binary built by cargo for this test run.
#[allow(dead_code)]
pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_chateaud"))
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Kill the server process
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
