//! Configuration validation.
//!
//! Returns all validation errors, not just the first. Validation is a pure
//! function `EchoConfig → Result<(), Vec<ValidationError>>` and runs before
//! the config is handed to the server.

use crate::config::schema::EchoConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Check semantic constraints that clap cannot express.
pub fn validate_config(config: &EchoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
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
    fn default_config_is_valid() {
        assert_eq!(validate_config(&EchoConfig::default()), Ok(()));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = EchoConfig::default();
        config.timeouts.request_secs = 0;

        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::ZeroRequestTimeout])
        );
    }
}
