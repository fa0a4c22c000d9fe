//! Error types for the demo program.

use thiserror::Error;

/// Demo error type
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// IO error while writing the report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_error_display() {
        let err = DemoError::from(ConfigError::Parse("bad toml".to_string()));
        assert_eq!(err.to_string(), "Configuration error: Parse error: bad toml");

        let err = DemoError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.to_string().contains("closed"));
    }
}
