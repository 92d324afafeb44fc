//! XMPP listener slot.
//!
//! Accepts the connection, logs it and closes. No stanza is read.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Handle one XMPP client: log and close.
pub async fn serve<W: AsyncWrite + Unpin>(mut writer: W) -> std::io::Result<()> {
    info!("XMPP client connected");
    writer.shutdown().await
}
