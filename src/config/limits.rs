//! Protocol limits configuration.

use chateau_proto::DEFAULT_MAX_LINE_LEN;
use serde::Deserialize;

/// Protocol limits configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum bytes in one client line, terminator excluded (default: 512).
    /// Longer lines close the connection.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_len: default_max_line_len(),
        }
    }
}

fn default_max_line_len() -> usize {
    DEFAULT_MAX_LINE_LEN
}
