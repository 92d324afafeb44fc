//! Conversion of handler errors into reply lines.

use crate::error::HandlerError;
use chateau_proto::reply_line;
use tracing::error;

/// Render the numeric reply line for a handler error.
///
/// Returns None if the reply cannot be rendered, which means the reply table
/// and [`HandlerError::to_reply`] disagree.
pub(super) fn handler_error_to_reply(err: &HandlerError) -> Option<Vec<u8>> {
    match err.to_reply() {
        Ok((response, body)) => Some(reply_line(response, &body)),
        Err(e) => {
            error!(error = %e, code = err.error_code(), "Failed to render reply");
            None
        }
    }
}
