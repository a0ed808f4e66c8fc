use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a single REST call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Browser error: {0}")]
    Browser(String),
    #[error("Server did not return an id for the new {0}")]
    MissingId(&'static str),
}

impl ApiError {
    /// Message the server attached to a rejected request, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text for a toast: the server's explanation when it gave one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// A form that cannot be submitted as typed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Price must be a whole number")]
    InvalidPrice,
    #[error("New passwords do not match")]
    PasswordMismatch,
    #[error("New password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Maximum {0} images allowed")]
    TooManyImages(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 409,
            message: "Username already exists".into(),
        };
        assert_eq!(err.user_message("Failed to register admin"), "Username already exists");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("Failed to load data"), "Failed to load data");

        let err = ApiError::Status { status: 500, message: String::new() };
        assert_eq!(err.user_message("Failed to load data"), "Failed to load data");
    }

    #[test]
    fn test_status_helpers() {
        let err = ApiError::Status { status: 401, message: "Token expired".into() };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
        assert_eq!(ApiError::Decode("eof".into()).status(), None);
    }

    #[test]
    fn test_validation_messages_read_like_toasts() {
        assert_eq!(ValidationError::TooManyImages(4).to_string(), "Maximum 4 images allowed");
        assert_eq!(
            ValidationError::PasswordTooShort(6).to_string(),
            "New password must be at least 6 characters"
        );
        assert_eq!(ValidationError::Required("Item name").to_string(), "Item name is required");
    }
}
