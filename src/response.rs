//! Response envelope that keeps parsed resources next to the raw exchange.
//!
//! A [`Response`] holds the [`Resources`] parsed from the XML body, the body
//! itself, the response headers, the request latency and a [`Status`] with
//! both the HTTP status and the fault code reported by the service.

use crate::resource::{Resources, RestException};
use crate::{Error, Result};
use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// HTTP and service-level status of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// The HTTP status code, recorded whether or not the service reported a fault.
    pub http: StatusCode,

    /// The service fault code, `0` when no fault was reported.
    pub fault: u32,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            http: StatusCode::OK,
            fault: 0,
        }
    }
}

/// A parsed REST response.
///
/// # Examples
///
/// ```no_run
/// use callwire::{request::Call, Client};
///
/// # async fn example() -> Result<(), callwire::Error> {
/// let client = Client::builder()
///     .credentials("ACxxxxxxxx", "auth-token")
///     .build()?;
///
/// let response = client
///     .request(&Call { sid: "CA42".to_string(), ..Default::default() })
///     .await?;
///
/// if let Some(call) = &response.call {
///     println!("Call {} is {}", call.sid, call.status);
/// }
/// println!("Status: {}", response.status.http);
/// println!("Request took {:?}", response.latency);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    /// The resources parsed from the body.
    pub data: Resources,

    /// The raw response body as a string.
    ///
    /// Useful when the body did not fit [`Resources`].
    pub raw_body: String,

    /// HTTP status and service fault code.
    pub status: Status,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the response headers arrived.
    pub latency: Duration,
}

impl Response {
    /// Builds a response from a received body.
    ///
    /// The body is parsed with [`Resources::from_xml`]; the fault code, if
    /// any, is copied into [`Status::fault`].
    ///
    /// # Examples
    ///
    /// ```
    /// use callwire::Response;
    /// use http::{HeaderMap, StatusCode};
    /// use std::time::Duration;
    ///
    /// let body = "<TwilioResponse><RestException><Code>20404</Code>\
    ///             <Message>Not found</Message></RestException></TwilioResponse>";
    /// let response = Response::from_body(
    ///     StatusCode::NOT_FOUND,
    ///     HeaderMap::new(),
    ///     body.to_string(),
    ///     Duration::from_millis(40),
    /// );
    ///
    /// assert_eq!(response.status.http, StatusCode::NOT_FOUND);
    /// assert_eq!(response.status.fault, 20404);
    /// assert!(response.is_fault());
    /// ```
    pub fn from_body(
        status: StatusCode,
        headers: HeaderMap,
        raw_body: String,
        latency: Duration,
    ) -> Self {
        let data = Resources::from_xml(&raw_body);
        let fault = data.fault().map(|f| f.code).unwrap_or(0);
        Self {
            data,
            raw_body,
            status: Status {
                http: status,
                fault,
            },
            headers,
            latency,
        }
    }

    /// Returns `true` if the service reported a fault.
    pub fn is_fault(&self) -> bool {
        self.data.fault().is_some()
    }

    /// Converts a reported fault into [`Error::ServiceFault`].
    ///
    /// The error's message is exactly the fault message and it owns this
    /// response.
    pub fn into_result(self) -> Result<Self> {
        let Some(RestException { code, message, .. }) = self.data.fault().cloned() else {
            return Ok(self);
        };

        tracing::debug!(
            status = self.status.http.as_u16(),
            code = code,
            message = %message,
            "Service reported a fault"
        );

        Err(Error::ServiceFault {
            code,
            message,
            response: Box::new(self),
        })
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl AsRef<Resources> for Response {
    fn as_ref(&self) -> &Resources {
        &self.data
    }
}

impl std::ops::Deref for Response {
    type Target = Resources;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
