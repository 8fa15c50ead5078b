//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Check the external commands actually name a program
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// One semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("paths.{0} must not be empty")]
    EmptyPath(&'static str),

    #[error("commands.{0} must name a program")]
    EmptyCommand(&'static str),

    #[error("commands.timeout_secs must be greater than zero")]
    ZeroCommandTimeout,

    #[error("auth.admin_user must not be empty")]
    EmptyAdminUser,

    #[error("auth.session_ttl_secs must be greater than zero")]
    ZeroSessionTtl,
}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    for (field, path) in [
        ("sites_available", &config.paths.sites_available),
        ("sites_enabled", &config.paths.sites_enabled),
        ("browse_root", &config.paths.browse_root),
    ] {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyPath(field));
        }
    }

    for (field, command) in [
        ("validate", &config.commands.validate),
        ("reload", &config.commands.reload),
    ] {
        if command.first().map_or(true, |program| program.is_empty()) {
            errors.push(ValidationError::EmptyCommand(field));
        }
    }
    if config.commands.timeout_secs == 0 {
        errors.push(ValidationError::ZeroCommandTimeout);
    }

    if config.auth.admin_user.is_empty() {
        errors.push(ValidationError::EmptyAdminUser);
    }
    if config.auth.session_ttl_secs == 0 {
        errors.push(ValidationError::ZeroSessionTtl);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = AppConfig::default();
        config.server.bind_address = "not-an-address".into();
        config.commands.validate = Vec::new();
        config.commands.timeout_secs = 0;
        config.auth.session_ttl_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroCommandTimeout));
        assert!(errors.contains(&ValidationError::EmptyCommand("validate")));
    }

    #[test]
    fn test_blank_program_rejected() {
        let mut config = AppConfig::default();
        config.commands.reload = vec![String::new()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyCommand("reload")]);
    }
}
