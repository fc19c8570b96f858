use std::fmt;

/// Failure classes surfaced over the HTTP boundary. The REST layer maps each
/// variant to a status code; the carried string becomes the response message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    PayloadTooLarge(String),
    InternalServerError(String),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::PayloadTooLarge(msg)
            | Self::InternalServerError(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::PayloadTooLarge(msg) => write!(f, "Payload too large: {msg}"),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn message_returns_inner_text() {
        let err = Error::NotFound("Property not found".to_owned());
        assert_eq!(err.message(), "Property not found");
    }

    #[test]
    fn display_includes_class_and_message() {
        let err = Error::Unauthorized("Invalid token".to_owned());
        assert_eq!(err.to_string(), "Unauthorized: Invalid token");
    }
}
