//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and relationships between keep-alive bounds
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PolicyConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::PolicyConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("keep_alive.max_idle_secs must be greater than zero")]
    ZeroMaxIdle,

    #[error("keep_alive.default_idle_secs ({default}) exceeds max_idle_secs ({max})")]
    DefaultExceedsMax { default: u64, max: u64 },

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &PolicyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let keep_alive = &config.keep_alive;
    if let Some(max) = keep_alive.max_idle_secs {
        if max == 0 {
            errors.push(ValidationError::ZeroMaxIdle);
        } else if keep_alive.default_idle_secs > max {
            errors.push(ValidationError::DefaultExceedsMax {
                default: keep_alive.default_idle_secs,
                max,
            });
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
