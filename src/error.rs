//! Error types for REST calls and token generation.
//!
//! Every failure is returned to the caller. Validation happens before any
//! network traffic, transport errors are surfaced verbatim, and faults reported
//! by the service inside an XML body keep the full parsed response around.

use crate::Response;
use http::StatusCode;

/// The main error type for the crate.
///
/// # Examples
///
/// ```no_run
/// use callwire::{request::SendMessage, Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .credentials("ACxxxxxxxx", "auth-token")
///     .build()?;
///
/// let sms = SendMessage {
///     from: "+15005550006".to_string(),
///     to: "+15551234567".to_string(),
///     body: "Hello".to_string(),
///     ..Default::default()
/// };
///
/// match client.request(&sms).await {
///     Ok(response) => println!("Sent, status {}", response.status.http),
///     Err(Error::ServiceFault { code, message, .. }) => {
///         eprintln!("Service rejected the message ({code}): {message}");
///     }
///     Err(Error::MissingField { field }) => eprintln!("{field} must be set"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required identifier on the request descriptor was empty.
    ///
    /// Raised while building the resource path, before any request is sent.
    #[error("required field missing: {field}")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// A network-level error occurred (connection failed, DNS lookup failed, etc.).
    ///
    /// Never retried by the client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a `<RestException>` element.
    ///
    /// The display text is exactly the fault message reported by the service.
    /// The parsed response, including its HTTP status, is kept for inspection.
    #[error("{message}")]
    ServiceFault {
        /// Numeric fault code, e.g. `21211`.
        code: u32,
        /// Human readable fault message.
        message: String,
        /// The response the fault was parsed from.
        response: Box<Response>,
    },

    /// The token signing key could not be used.
    #[error("Failed to sign token: {0}")]
    Signing(String),

    /// The requested token lifetime does not fit in the clock's range.
    #[error("Token expiry out of range")]
    InvalidExpiry,

    /// Invalid configuration was provided.
    ///
    /// This indicates a problem with how the client was configured,
    /// such as missing credentials or invalid header values.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if the error came from a received response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ServiceFault { response, .. } => Some(response.status.http),
            Error::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the service fault code, if the service reported one.
    ///
    /// # Examples
    ///
    /// ```
    /// use callwire::Error;
    ///
    /// let err = Error::MissingField { field: "sid" };
    /// assert_eq!(err.fault_code(), None);
    /// ```
    pub fn fault_code(&self) -> Option<u32> {
        match self {
            Error::ServiceFault { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the parsed response that carried a service fault.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::ServiceFault { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns `true` if the request never left the client because of a
    /// validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingField { .. })
    }
}

/// A specialized `Result` type for this crate.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let err = Error::MissingField { field: "call_sid" };
        assert_eq!(err.to_string(), "required field missing: call_sid");
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_service_fault_displays_message_only() {
        let response = Response::from_body(
            StatusCode::BAD_REQUEST,
            http::HeaderMap::new(),
            String::new(),
            std::time::Duration::ZERO,
        );
        let err = Error::ServiceFault {
            code: 21211,
            message: "Invalid 'To' Phone Number".to_string(),
            response: Box::new(response),
        };

        assert_eq!(err.to_string(), "Invalid 'To' Phone Number");
        assert_eq!(err.fault_code(), Some(21211));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert!(!err.is_validation());
    }
}
