//! Capability tokens for the client-side voice SDK.
//!
//! A capability token is a JWT signed with HMAC-SHA256, keyed with the
//! account's auth token. It carries the account SID as issuer, an expiry, and
//! a space separated `scope` claim listing the granted permissions.
//!
//! ```
//! use callwire::capability::{generate, Capabilities};
//! use callwire::clock::SystemClock;
//! use std::time::Duration;
//!
//! let caps = Capabilities::new("ACxxxxxxxx", "auth-token")
//!     .allow_client_incoming("tommy")
//!     .allow_client_outgoing("APxxxxxxxx");
//!
//! let token = generate(&caps, Duration::from_secs(3600), &SystemClock).unwrap();
//! assert_eq!(token.split('.').count(), 3);
//! ```

use crate::clock::Clock;
use crate::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::TimeDelta;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use std::io;
use std::time::Duration;

type HmacSha256 = Hmac<Sha256>;

/// Permissions to grant in a capability token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Account SID, used as the token issuer.
    pub account_sid: String,
    /// Auth token, used as the signing key.
    pub auth_token: String,
    /// Client name that may receive incoming calls.
    pub allow_client_incoming: Option<String>,
    /// Application SID that outgoing calls are placed through.
    pub allow_client_outgoing: Option<String>,
}

impl Capabilities {
    /// Capabilities with no permissions granted.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            ..Default::default()
        }
    }

    /// Allows incoming calls to the named client.
    pub fn allow_client_incoming(mut self, client_name: impl Into<String>) -> Self {
        self.allow_client_incoming = Some(client_name.into());
        self
    }

    /// Allows outgoing calls through the given application.
    pub fn allow_client_outgoing(mut self, application_sid: impl Into<String>) -> Self {
        self.allow_client_outgoing = Some(application_sid.into());
        self
    }

    /// Scope strings in claim order: outgoing first, then incoming.
    ///
    /// # Examples
    ///
    /// ```
    /// use callwire::capability::Capabilities;
    ///
    /// let caps = Capabilities::new("AC123", "secret")
    ///     .allow_client_outgoing("AP1")
    ///     .allow_client_incoming("tommy");
    ///
    /// assert_eq!(
    ///     caps.scopes(),
    ///     vec![
    ///         "scope:client:outgoing?appSid=AP1&clientName=tommy",
    ///         "scope:client:incoming?clientName=tommy",
    ///     ]
    /// );
    /// ```
    pub fn scopes(&self) -> Vec<String> {
        let incoming = self
            .allow_client_incoming
            .as_deref()
            .filter(|name| !name.is_empty());
        let outgoing = self
            .allow_client_outgoing
            .as_deref()
            .filter(|sid| !sid.is_empty());

        let mut scopes = Vec::with_capacity(2);
        if let Some(app_sid) = outgoing {
            let mut scope = format!("scope:client:outgoing?appSid={app_sid}");
            if let Some(name) = incoming {
                scope.push_str("&clientName=");
                scope.push_str(name);
            }
            scopes.push(scope);
        }
        if let Some(name) = incoming {
            scopes.push(format!("scope:client:incoming?clientName={name}"));
        }
        scopes
    }
}

#[derive(Serialize)]
struct Header {
    alg: &'static str,
    kid: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header {
    alg: "HS256",
    kid: "",
    typ: "JWT",
};

// Field order is the serialized order.
#[derive(Serialize)]
struct Claims<'a> {
    exp: i64,
    iss: &'a str,
    scope: String,
}

/// Generates a signed capability token valid for `expires` from `clock.now()`.
///
/// The same capabilities, duration and clock reading always produce the
/// same token.
///
/// # Errors
///
/// Returns [`Error::Signing`] if the auth token is empty or a segment cannot
/// be encoded, and [`Error::InvalidExpiry`] if the expiry does not fit in the
/// clock's range.
pub fn generate(caps: &Capabilities, expires: Duration, clock: &impl Clock) -> Result<String> {
    if caps.auth_token.is_empty() {
        return Err(Error::Signing("empty signing key".to_string()));
    }

    let lifetime = TimeDelta::from_std(expires).map_err(|_| Error::InvalidExpiry)?;
    let exp = clock
        .now()
        .checked_add_signed(lifetime)
        .ok_or(Error::InvalidExpiry)?
        .timestamp();

    let claims = Claims {
        exp,
        iss: &caps.account_sid,
        scope: caps.scopes().join(" "),
    };

    let signing_input = format!("{}.{}", encode_segment(&HEADER)?, encode_segment(&claims)?);

    let mut mac = HmacSha256::new_from_slice(caps.auth_token.as_bytes())
        .map_err(|e| Error::Signing(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    tracing::debug!(
        issuer = %caps.account_sid,
        expires_at = exp,
        scopes = %claims.scope,
        "Generated capability token"
    );

    Ok(format!("{signing_input}.{signature}"))
}

/// JSON-encodes `value` and base64url-encodes the result without padding.
fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
    let mut json = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut json, HtmlSafeFormatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| Error::Signing(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Compact JSON with `<`, `>` and `&` written as unicode escapes, matching the
/// byte layout of tokens issued by the service's own helper libraries.
struct HtmlSafeFormatter;

impl serde_json::ser::Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, byte) in fragment.bytes().enumerate() {
            if matches!(byte, b'<' | b'>' | b'&') {
                writer.write_all(fragment[start..i].as_bytes())?;
                write!(writer, "\\u{:04x}", byte)?;
                start = i + 1;
            }
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
