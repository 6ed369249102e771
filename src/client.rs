//! REST client that dispatches request descriptors.
//!
//! The [`Client`] type is the main entry point for making REST calls.
//! Use [`ClientBuilder`] to configure and create clients.

use crate::{metadata::RequestMetadata, request::Resource, Error, Response, Result};
use http::{header::ACCEPT, HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Where requests go unless [`ClientBuilder::base_url`] says otherwise.
pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com";

/// A REST client bound to one account.
///
/// The client is designed to be reused across multiple requests. Clones
/// share the same connection pool and credentials.
///
/// # Examples
///
/// ```no_run
/// use callwire::{request::{Calls, SendMessage}, Client};
///
/// # async fn example() -> Result<(), callwire::Error> {
/// let client = Client::builder()
///     .credentials("ACxxxxxxxx", "auth-token")
///     .build()?;
///
/// // GET with a query string
/// let calls = client
///     .request(&Calls { status: "completed".to_string(), ..Default::default() })
///     .await?;
/// for call in calls.calls.iter().flat_map(|list| &list.items) {
///     println!("{} -> {}", call.from, call.to);
/// }
///
/// // POST with a form body
/// let sent = client
///     .request(&SendMessage {
///         from: "+15005550006".to_string(),
///         to: "+15551234567".to_string(),
///         body: "Hello".to_string(),
///         ..Default::default()
///     })
///     .await?;
/// println!("Queued message {:?}", sent.message.as_ref().map(|m| &m.sid));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    account_sid: String,
    auth_token: String,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client for the public API with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is empty.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        Self::builder().credentials(account_sid, auth_token).build()
    }

    /// The account every request is issued against.
    pub fn account_sid(&self) -> &str {
        &self.inner.account_sid
    }

    /// Dispatches a request descriptor.
    ///
    /// The descriptor decides method, path and parameters. `GET` and `DELETE`
    /// send the parameters as a query string, `POST` as a url-encoded form
    /// body. The XML body is parsed whatever the HTTP status.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingField`] if the descriptor lacks a required
    ///   identifier. Nothing is sent.
    /// * [`Error::Network`] on transport failure. Not retried.
    /// * [`Error::ServiceFault`] if the body carries a fault.
    pub async fn request<R: Resource>(&self, resource: &R) -> Result<Response> {
        let metadata = RequestMetadata::for_resource(resource, &self.inner.account_sid)?;
        self.call(metadata).await
    }

    /// Issues a prepared request.
    ///
    /// Lower level than [`request`](Client::request); useful for resources
    /// without a descriptor. Authentication and default headers are still
    /// applied.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use callwire::{metadata::RequestMetadata, Client};
    /// use http::Method;
    ///
    /// # async fn example() -> Result<(), callwire::Error> {
    /// let client = Client::new("ACxxxxxxxx", "auth-token")?;
    ///
    /// let path = format!("/2010-04-01/Accounts/{}/Applications", client.account_sid());
    /// let metadata = RequestMetadata::new(Method::GET, path).with_params("FriendlyName=demo");
    ///
    /// let response = client.call(metadata).await?;
    /// println!("{}", response.raw_body);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call(&self, metadata: RequestMetadata) -> Result<Response> {
        let start_time = Instant::now();

        let response = match self.execute_request(&metadata).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    method = %metadata.method,
                    path = %metadata.path,
                    "Request failed"
                );
                return Err(e);
            }
        };

        self.parse_response(response, start_time.elapsed()).await
    }

    /// Joins the resource path onto the base URL, keeping any path prefix the
    /// base URL carries.
    fn request_url(&self, metadata: &RequestMetadata) -> Url {
        let mut url = self.inner.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}{}", metadata.path));
        url.set_query(metadata.query());
        url
    }

    /// Executes a single request.
    async fn execute_request(&self, metadata: &RequestMetadata) -> Result<reqwest::Response> {
        let url = self.request_url(metadata);

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            "Executing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(metadata.method.clone(), url)
            .basic_auth(&self.inner.account_sid, Some(&self.inner.auth_token))
            .header(ACCEPT, HeaderValue::from_static("*/*"));

        for (name, value) in &self.inner.default_headers {
            request = request.header(name, value);
        }

        for (name, value) in &metadata.headers {
            request = request.header(name, value);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = metadata.body() {
            request = request.body(body.to_owned());
        }

        let response = request.send().await?;

        Ok(response)
    }

    /// Reads the body and builds a [`Response`], turning a reported fault into
    /// an error.
    async fn parse_response(&self, response: reqwest::Response, latency: Duration) -> Result<Response> {
        let status = response.status();
        let headers = response.headers().clone();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        let raw_body = response.text().await?;

        Response::from_body(status, headers, raw_body, latency).into_result()
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use callwire::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), callwire::Error> {
/// let client = ClientBuilder::new()
///     .credentials("ACxxxxxxxx", "auth-token")
///     .timeout(Duration::from_secs(30))
///     .default_header("User-Agent", "my-app/1.0")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    account_sid: String,
    auth_token: String,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            account_sid: String::new(),
            auth_token: String::new(),
            default_headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Overrides the API host, e.g. to point at a proxy or a mock server.
    ///
    /// A path on the URL is kept as a prefix: with `https://proxy.local/twilio`
    /// requests go to `https://proxy.local/twilio/2010-04-01/...`.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Sets the account SID and auth token used for basic authentication.
    pub fn credentials(
        mut self,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        self.account_sid = account_sid.into();
        self.auth_token = auth_token.into();
        self
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets a timeout applied to every request.
    ///
    /// No timeout is set by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are missing or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<Client> {
        if self.account_sid.is_empty() || self.auth_token.is_empty() {
            return Err(Error::ConfigurationError(
                "Account SID and auth token are required".to_string(),
            ));
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                account_sid: self.account_sid,
                auth_token: self.auth_token,
                default_headers: self.default_headers,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
