//! PASS command handler for connection registration.

use super::super::{Context, Handler};
use super::try_register;
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use chateau_proto::Message;
use tracing::debug;

/// Handler for PASS command.
///
/// `PASS password`
///
/// Sets the connection password. It may arrive before or after NICK; the
/// pair is checked as soon as both are present.
///
/// **Specification:** [RFC 1459 §4.1.1](https://datatracker.ietf.org/doc/html/rfc1459#section-4.1.1)
pub struct PassHandler;

#[async_trait]
impl Handler for PassHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        // PASS <password>
        let password = msg
            .param(0)
            .ok_or_else(|| HandlerError::NeedMoreParams("PASS".into()))?;
        ctx.state.set_pass(password);

        if ctx.state.is_registered() {
            return Err(HandlerError::AlreadyRegistered);
        }

        debug!("PASS received");
        try_register(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credential, MemoryAgent, PamAgent};
    use crate::state::SessionState;
    use chateau_proto::Parser;

    async fn parse(line: &str) -> Message {
        let mut parser = Parser::new(line.as_bytes());
        let mut msg = Message::new();
        parser.parse(&mut msg).await.unwrap();
        msg
    }

    #[tokio::test]
    async fn pass_then_nick_order_does_not_matter() {
        let agent = MemoryAgent::new([Credential::new("joe", "jo3jo3")]);
        let mut state = SessionState::new();
        state.set_user(b"joe");
        let mut ctx = Context::new(&mut state, &agent);

        let res = PassHandler.handle(&mut ctx, &parse("PASS jo3jo3\r\n").await).await;
        assert!(res.is_ok());
        assert!(state.is_registered());
    }

    #[tokio::test]
    async fn pass_after_registration_is_refused() {
        let agent = MemoryAgent::new([Credential::new("joe", "jo3jo3")]);
        let mut state = SessionState::new();
        state.register();
        let mut ctx = Context::new(&mut state, &agent);

        let res = PassHandler.handle(&mut ctx, &parse("PASS again\r\n").await).await;
        assert_eq!(res, Err(HandlerError::AlreadyRegistered));
        assert!(state.is_registered());
    }

    #[tokio::test]
    async fn pam_rejects_everything() {
        let agent = PamAgent::new(None);
        let mut state = SessionState::new();
        state.set_user(b"op");
        let mut ctx = Context::new(&mut state, &agent);

        let res = PassHandler.handle(&mut ctx, &parse("PASS op3rat0r\r\n").await).await;
        assert_eq!(res, Err(HandlerError::PasswdMismatch));
    }
}
