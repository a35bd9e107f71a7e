//! Error types and handling for the `WeatherFront` application

use thiserror::Error;

/// Main error type for the `WeatherFront` application
///
/// Lookup failures never surface here: the geocoding and forecast clients
/// collapse them into sentinel results at their own boundary. This type
/// covers startup and rendering paths only.
#[derive(Error, Debug)]
pub enum WeatherFrontError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Template rendering errors
    #[error("Render error: {source}")]
    Render {
        #[from]
        source: askama::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherFrontError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherFrontError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WeatherFrontError::Render { .. } => {
                "Something went wrong while rendering the page.".to_string()
            }
            WeatherFrontError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeatherFrontError::config("missing port");
        assert!(matches!(config_err, WeatherFrontError::Config { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = WeatherFrontError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let io_err: WeatherFrontError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found").into();
        assert!(io_err.user_message().contains("File operation failed"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let front_err: WeatherFrontError = io_err.into();
        assert!(matches!(front_err, WeatherFrontError::Io { .. }));
    }
}
