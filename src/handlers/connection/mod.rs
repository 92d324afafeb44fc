//! Connection registration handlers (NICK, PASS).

mod nick;
mod pass;

pub use nick::NickHandler;
pub use pass::PassHandler;

use super::Context;
use crate::error::{HandlerError, HandlerResult};
use tracing::{info, warn};

/// Authenticate once both a user name and a password are known.
///
/// Does nothing while either is missing. A rejected pair is fatal for the
/// session.
async fn try_register(ctx: &mut Context<'_>) -> HandlerResult {
    if !ctx.state.credentials_ready() {
        return Ok(());
    }

    let user = String::from_utf8_lossy(ctx.state.user()).into_owned();
    if ctx.auth.authenticate(ctx.state.user(), ctx.state.pass()).await {
        ctx.state.register();
        info!(user = %user, backend = ctx.auth.kind(), "Client registered");
        Ok(())
    } else {
        warn!(user = %user, backend = ctx.auth.kind(), "Authentication failed");
        Err(HandlerError::PasswdMismatch)
    }
}
