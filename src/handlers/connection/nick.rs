//! NICK command handler for connection registration.

use super::super::{Context, Handler};
use super::try_register;
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use chateau_proto::Message;
use tracing::debug;

/// Handler for NICK command.
///
/// `NICK nickname`
///
/// Stores the nickname as the registration user name and authenticates once
/// a password is also known. After registration the nickname cannot change
/// and `ERR_ERRONEUSNICKNAME` is returned instead.
///
/// **Specification:** [RFC 1459 §4.1.2](https://datatracker.ietf.org/doc/html/rfc1459#section-4.1.2)
pub struct NickHandler;

#[async_trait]
impl Handler for NickHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        // NICK <nickname>
        let nick = msg.param(0).ok_or(HandlerError::NoNicknameGiven)?;
        ctx.state.set_user(nick);

        if ctx.state.is_registered() {
            return Err(HandlerError::ErroneousNickname(nick.to_vec()));
        }

        debug!("NICK received");
        try_register(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credential, MemoryAgent};
    use crate::state::SessionState;
    use chateau_proto::Parser;

    async fn parse(line: &str) -> Message {
        let mut parser = Parser::new(line.as_bytes());
        let mut msg = Message::new();
        parser.parse(&mut msg).await.unwrap();
        msg
    }

    #[tokio::test]
    async fn nick_alone_does_not_authenticate() {
        let agent = MemoryAgent::new([Credential::new("op", "op3rat0r")]);
        let mut state = SessionState::new();
        let mut ctx = Context::new(&mut state, &agent);

        let res = NickHandler.handle(&mut ctx, &parse("NICK op\r\n").await).await;
        assert!(res.is_ok());
        assert_eq!(state.user(), b"op");
        assert!(!state.is_registered());
    }

    #[tokio::test]
    async fn nick_completes_registration() {
        let agent = MemoryAgent::new([Credential::new("op", "op3rat0r")]);
        let mut state = SessionState::new();
        state.set_pass(b"op3rat0r");
        let mut ctx = Context::new(&mut state, &agent);

        let res = NickHandler.handle(&mut ctx, &parse("NICK op\r\n").await).await;
        assert!(res.is_ok());
        assert!(state.is_registered());
    }

    #[tokio::test]
    async fn nick_after_registration_is_refused() {
        let agent = MemoryAgent::new([Credential::new("op", "op3rat0r")]);
        let mut state = SessionState::new();
        state.register();
        let mut ctx = Context::new(&mut state, &agent);

        let res = NickHandler.handle(&mut ctx, &parse("NICK joe\r\n").await).await;
        assert_eq!(res, Err(HandlerError::ErroneousNickname(b"joe".to_vec())));
        assert!(state.is_registered());
    }

    #[tokio::test]
    async fn wrong_password_is_fatal() {
        let agent = MemoryAgent::new([Credential::new("op", "op3rat0r")]);
        let mut state = SessionState::new();
        state.set_pass(b"wrongpw");
        let mut ctx = Context::new(&mut state, &agent);

        let res = NickHandler.handle(&mut ctx, &parse("NICK op\r\n").await).await;
        assert_eq!(res, Err(HandlerError::PasswdMismatch));
        assert!(!state.is_registered());
    }
}
