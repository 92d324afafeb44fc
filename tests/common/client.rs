//! Test IRC client.
//!
//! Sends raw lines and reads reply lines back. Replies are compared as text:
//! the daemon's reply lines carry an empty prefix, which is not a valid
//! client message.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// A test IRC client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;

        // Split stream for reading and writing
        let (read_half, write_half) = stream.into_split();
        let reader = BufReader::new(read_half);
        let writer = BufWriter::new(write_half);

        Ok(Self { reader, writer })
    }

    /// Send a raw line, appending CRLF if missing.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with("\r\n") {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Send bytes exactly as given.
    #[allow(dead_code)]
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive a single reply line, terminator included.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a reply line with a timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("connection closed");
        }
        Ok(line)
    }

    /// Assert the server closes the connection without sending anything more.
    #[allow(dead_code)]
    pub async fn expect_closed(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        match timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await? {
            Ok(0) => Ok(()),
            // A reset also means the server is gone.
            Err(_) => Ok(()),
            Ok(_) => anyhow::bail!("expected close, got {line:?}"),
        }
    }

    /// Assert nothing arrives within `dur` and the connection stays up.
    #[allow(dead_code)]
    pub async fn expect_silence(&mut self, dur: Duration) -> anyhow::Result<()> {
        let mut line = String::new();
        match timeout(dur, self.reader.read_line(&mut line)).await {
            Err(_) => Ok(()),
            Ok(Ok(0)) => anyhow::bail!("connection closed"),
            Ok(Ok(_)) => anyhow::bail!("unexpected line {line:?}"),
            Ok(Err(e)) => Err(e.into()),
        }
    }

    /// Register with NICK then PASS.
    #[allow(dead_code)]
    pub async fn register(&mut self, user: &str, pass: &str) -> anyhow::Result<()> {
        self.send_raw(&format!("NICK {user}")).await?;
        self.send_raw(&format!("PASS {pass}")).await?;
        Ok(())
    }
}
