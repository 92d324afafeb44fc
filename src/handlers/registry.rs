//! Command handler registry and dispatch.
//!
//! Every known command is checked against its arity from the command table
//! before dispatch. A count outside the allowed range produces a reply and
//! no state change.

use super::connection::{NickHandler, PassHandler};
use super::context::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use crate::telemetry::spans;
use chateau_proto::{Command, Message};
use std::collections::HashMap;
use tracing::{Instrument, debug};

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<Command, Box<dyn Handler>>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<Command, Box<dyn Handler>> = HashMap::new();

        // Connection/registration handlers
        handlers.insert(Command::NICK, Box::new(NickHandler));
        handlers.insert(Command::PASS, Box::new(PassHandler));

        Self { handlers }
    }

    /// Validate arity, then run the command's handler if it has one.
    pub async fn dispatch(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        check_arity(msg)?;

        let name = String::from_utf8_lossy(msg.command_text());
        match self.handlers.get(&msg.command()) {
            Some(handler) => {
                let span = spans::command(&name, msg.param_count());
                handler.handle(ctx, msg).instrument(span).await
            }
            None => {
                debug!(command = %name, "No handler, ignoring");
                Ok(())
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the parameter count of a known command against the command table.
fn check_arity(msg: &Message) -> HandlerResult {
    let Some(arity) = msg.command().arity() else {
        return Ok(());
    };
    if arity.accepts(msg.param_count()) {
        return Ok(());
    }

    match msg.command() {
        Command::NICK => Err(HandlerError::NoNicknameGiven),
        _ => Err(HandlerError::NeedMoreParams(
            String::from_utf8_lossy(msg.command_text()).into_owned(),
        )),
    }
}
