use std::borrow::Cow;

use thiserror::Error;

/// A single validation failure.
///
/// Carries a human-readable message and an optional machine-readable code.
/// Errors are plain data: they compare by value and keep the order in which
/// validators produced them.
///
/// ```
/// use sluice::ValidationError;
///
/// let err = ValidationError::with_code("too_short", "must be at least 8 characters");
/// assert_eq!(err.code(), Some("too_short"));
/// assert_eq!(err.to_string(), "[too_short] must be at least 8 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Error)]
#[error("{}", render(.code.as_deref(), .message))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    code: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
}

impl ValidationError {
    /// An error with a message and no code.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ValidationError {
            code: None,
            message: message.into(),
        }
    }

    /// An error with both a code and a message.
    pub fn with_code(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        ValidationError {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The machine-readable code, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

fn render(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("[{code}] {message}"),
        None => message.to_owned(),
    }
}

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_code() {
        assert_eq!(ValidationError::new("bad").to_string(), "bad");
    }

    #[test]
    fn test_display_with_code() {
        let err = ValidationError::with_code("range", "too old");
        assert_eq!(err.to_string(), "[range] too old");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ValidationError::new("bad"));
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_equality_includes_code() {
        assert_eq!(ValidationError::new("bad"), ValidationError::from("bad"));
        assert_ne!(
            ValidationError::new("bad"),
            ValidationError::with_code("e1", "bad")
        );
    }

    #[test]
    fn test_owned_message() {
        let err = ValidationError::from(format!("field {} is required", "email"));
        assert_eq!(err.message(), "field email is required");
        assert_eq!(err.code(), None);
    }
}
