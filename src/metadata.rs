//! Request metadata and parameter encoding.

use crate::request::Resource;
use http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, Method};
use url::form_urlencoded;

/// Content type of every `POST` body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Comparison operator joining a parameter key to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// `Key=value`
    #[default]
    Eq,
    /// `Key<=value`
    Le,
    /// `Key>=value`
    Ge,
}

impl Comparison {
    /// The operator as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Le => "<=",
            Comparison::Ge => ">=",
        }
    }
}

/// A single tagged request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    /// Parameter name, e.g. `StartTime`.
    pub key: &'static str,
    /// Operator between key and value.
    pub comparison: Comparison,
    /// Raw, unescaped value. Empty means unset.
    pub value: &'a str,
}

impl<'a> Param<'a> {
    /// `key=value`
    pub fn eq(key: &'static str, value: &'a str) -> Self {
        Self {
            key,
            comparison: Comparison::Eq,
            value,
        }
    }

    /// `key<=value`
    pub fn le(key: &'static str, value: &'a str) -> Self {
        Self {
            key,
            comparison: Comparison::Le,
            value,
        }
    }

    /// `key>=value`
    pub fn ge(key: &'static str, value: &'a str) -> Self {
        Self {
            key,
            comparison: Comparison::Ge,
            value,
        }
    }
}

/// Encodes parameters into a `&`-joined string, in the order given.
///
/// Keys and operators are written verbatim, values are form-urlencoded.
/// Parameters with an empty value are skipped.
///
/// # Examples
///
/// ```
/// use callwire::metadata::{encode_params, Param};
///
/// let params = [
///     Param::eq("To", "+15551234567"),
///     Param::eq("From", ""),
///     Param::le("DateSent", "2024-01-31"),
/// ];
///
/// assert_eq!(encode_params(&params), "To=%2B15551234567&DateSent<=2024-01-31");
/// ```
pub fn encode_params(params: &[Param<'_>]) -> String {
    let mut encoded = String::new();
    for param in params.iter().filter(|p| !p.value.is_empty()) {
        if !encoded.is_empty() {
            encoded.push('&');
        }
        encoded.push_str(param.key);
        encoded.push_str(param.comparison.as_str());
        encoded.extend(form_urlencoded::byte_serialize(param.value.as_bytes()));
    }
    encoded
}

/// Everything needed to issue one HTTP request.
///
/// Usually produced from a descriptor with [`RequestMetadata::for_resource`].
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST or DELETE).
    pub method: Method,

    /// The absolute request path, e.g. `/2010-04-01/Accounts/AC123/Calls`.
    pub path: String,

    /// Encoded parameters, sent as query string or form body depending on
    /// the method.
    pub params: String,

    /// Additional headers for this request.
    pub headers: HeaderMap,
}

impl RequestMetadata {
    /// Creates metadata with the given method and path and no parameters.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: String::new(),
            headers: HeaderMap::new(),
        }
    }

    /// Builds the request for a descriptor owned by `account_sid`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if the descriptor lacks a
    /// required identifier.
    pub fn for_resource<R: Resource>(resource: &R, account_sid: &str) -> crate::Result<Self> {
        let path = resource.path(account_sid)?;
        let mut metadata = Self::new(R::METHOD, path).with_params(resource.query_string());
        if metadata.method == Method::POST {
            metadata
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        }
        Ok(metadata)
    }

    /// Replaces the encoded parameters.
    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.params = params.into();
        self
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Query string to append to the URL, if any.
    ///
    /// Always `None` for `POST`.
    pub fn query(&self) -> Option<&str> {
        if self.method == Method::POST || self.params.is_empty() {
            None
        } else {
            Some(&self.params)
        }
    }

    /// Form body to send, only for `POST`.
    pub fn body(&self) -> Option<&str> {
        (self.method == Method::POST).then_some(self.params.as_str())
    }
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self::new(Method::GET, "")
    }
}
