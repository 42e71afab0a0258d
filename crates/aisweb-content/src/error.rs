//! Error types for content source operations.

use std::fmt;
use thiserror::Error;

/// The category of a content error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentErrorCode {
    /// Reading the backing store failed (missing directory, permissions).
    Io,
    /// A content file exists but could not be parsed.
    InvalidContent,
    /// The source is misconfigured (e.g. content root is not a directory).
    ConfigurationError,
}

impl ContentErrorCode {
    /// Returns the snake_case name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Io => "io",
            Self::InvalidContent => "invalid_content",
            Self::ConfigurationError => "configuration_error",
        }
    }
}

impl fmt::Display for ContentErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error that occurred while reading site content.
///
/// A missing record is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub struct ContentError {
    code: ContentErrorCode,
    message: String,
    /// The source that generated this error (e.g. "directory", "memory").
    source_name: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContentError {
    /// Creates a new content error with the given code and message.
    pub fn new(code: ContentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source_name: None,
            source: None,
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::Io, message)
    }

    /// Creates an invalid content error.
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::InvalidContent, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::ConfigurationError, message)
    }

    /// Sets the name of the source that produced this error.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Sets the underlying cause.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> ContentErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source name, if set.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.source_name {
            write!(f, "[{}] ", name)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_display() {
        assert_eq!(ContentErrorCode::InvalidContent.as_str(), "invalid_content");
        assert_eq!(ContentErrorCode::Io.to_string(), "io");
    }

    #[test]
    fn content_error_creation() {
        let err = ContentError::invalid_content("bad json");
        assert_eq!(err.code(), ContentErrorCode::InvalidContent);
        assert_eq!(err.message(), "bad json");
        assert!(err.source_name().is_none());
    }

    #[test]
    fn content_error_display() {
        let err = ContentError::io("permission denied").with_source_name("directory");
        let display = err.to_string();
        assert_eq!(display, "[directory] io: permission denied");
    }

    #[test]
    fn content_error_with_source() {
        use std::error::Error;
        let io_err = std::io::Error::other("disk gone");
        let err = ContentError::io("failed to read events").with_source(io_err);
        assert!(err.source().is_some());
    }
}
