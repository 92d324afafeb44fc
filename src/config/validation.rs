//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::{AuthBackend, Config};
use std::collections::HashSet;
use thiserror::Error;

/// Smallest accepted `limits.max_line_len`.
const MIN_LINE_LEN: usize = 16;

/// Largest accepted `limits.max_line_len`.
const MAX_LINE_LEN: usize = 65_536;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("at least one [[listen]] block is required")]
    NoListeners,
    #[error("listen[{0}].name is required")]
    MissingListenerName(usize),
    #[error("listener name '{0}' is used more than once")]
    DuplicateListener(String),
    #[error("limits.max_line_len must be at least 16, got {0}")]
    LineLimitTooSmall(usize),
    #[error("limits.max_line_len must be at most 65536, got {0}")]
    LineLimitTooLarge(usize),
    #[error("auth.users[{0}].user is required")]
    EmptyUserName(usize),
    #[error("auth.backend = \"memory\" needs at least one [[auth.users]] entry")]
    NoUsers,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    }

    // Listeners
    if config.listen.is_empty() {
        errors.push(ValidationError::NoListeners);
    }
    let mut seen = HashSet::new();
    for (i, listen) in config.listen.iter().enumerate() {
        if listen.name.is_empty() {
            errors.push(ValidationError::MissingListenerName(i));
        } else if !seen.insert(listen.name.as_str()) {
            errors.push(ValidationError::DuplicateListener(listen.name.clone()));
        }
    }

    if config.limits.max_line_len < MIN_LINE_LEN {
        errors.push(ValidationError::LineLimitTooSmall(config.limits.max_line_len));
    } else if config.limits.max_line_len > MAX_LINE_LEN {
        errors.push(ValidationError::LineLimitTooLarge(config.limits.max_line_len));
    }

    // Credentials
    for (i, entry) in config.auth.users.iter().enumerate() {
        if entry.user.is_empty() {
            errors.push(ValidationError::EmptyUserName(i));
        }
    }
    if config.auth.backend == AuthBackend::Memory && config.auth.users.is_empty() {
        errors.push(ValidationError::NoUsers);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
