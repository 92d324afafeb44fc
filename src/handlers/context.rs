//! Command handler context and trait.

use crate::auth::AuthAgent;
use crate::error::HandlerResult;
use crate::state::SessionState;
use async_trait::async_trait;
use chateau_proto::Message;

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// Registration state of this connection.
    pub state: &'a mut SessionState,
    /// Shared authentication agent.
    pub auth: &'a dyn AuthAgent,
}

impl<'a> Context<'a> {
    /// Create a new context.
    pub fn new(state: &'a mut SessionState, auth: &'a dyn AuthAgent) -> Self {
        Self { state, auth }
    }
}

/// A command handler.
///
/// Handlers never write to the connection. Replies are expressed as
/// [`HandlerError`](crate::error::HandlerError) values and written by the
/// session.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult;
}
