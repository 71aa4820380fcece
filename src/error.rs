//! Error types and handling for the `TripKit` library

use thiserror::Error;

/// Main error type for the `TripKit` library
#[derive(Error, Debug)]
pub enum TripKitError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Data source communication errors
    #[error("Data source error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Snapshot storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripKitError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new data source error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripKitError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripKitError::Api { .. } => {
                "Unable to reach the data service. Please check your internet connection."
                    .to_string()
            }
            TripKitError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripKitError::Storage { .. } => {
                "Local storage operation failed. You may need to clear the snapshot directory."
                    .to_string()
            }
            TripKitError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripKitError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripKitError::config("missing storage path");
        assert!(matches!(config_err, TripKitError::Config { .. }));

        let api_err = TripKitError::api("connection refused");
        assert!(matches!(api_err, TripKitError::Api { .. }));

        let validation_err = TripKitError::validation("end date before start date");
        assert!(matches!(validation_err, TripKitError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripKitError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = TripKitError::api("test");
        assert!(api_err.user_message().contains("Unable to reach"));

        let validation_err = TripKitError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kit_err: TripKitError = io_err.into();
        assert!(matches!(kit_err, TripKitError::Io { .. }));
    }
}
