//! # Callwire - a typed Twilio REST client
//!
//! Callwire turns request descriptors into calls against the Twilio REST API
//! (`2010-04-01`), parses the XML answers into typed resources, and mints
//! capability tokens for the client-side voice SDK.
//!
//! ## Quick Start
//!
//! ```no_run
//! use callwire::{request::{Queue, SendMessage}, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), callwire::Error> {
//!     let client = Client::new("ACxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx", "your-auth-token")?;
//!
//!     // POST: parameters travel as a url-encoded form body
//!     let sent = client
//!         .request(&SendMessage {
//!             from: "+15005550006".to_string(),
//!             to: "+15551234567".to_string(),
//!             body: "Hello from callwire".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Status: {}", sent.status.http);
//!
//!     // GET: identifiers go into the path
//!     let queue = client.request(&Queue { sid: "QUxxxxxxxx".to_string() }).await?;
//!     if let Some(queue) = &queue.queue {
//!         println!("{} callers waiting", queue.current_size);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Missing identifiers are caught before anything is sent, transport errors
//! are returned as they are, and faults the service reports inside an XML
//! body become [`Error::ServiceFault`]:
//!
//! ```no_run
//! use callwire::{request::SendMessage, Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new("ACxxxxxxxx", "auth-token")?;
//! let sms = SendMessage { to: "nope".to_string(), ..Default::default() };
//! match client.request(&sms).await {
//!     Ok(response) => println!("Sent: {}", response.raw_body),
//!     Err(Error::ServiceFault { code, message, response }) => {
//!         eprintln!("Fault {code} (HTTP {}): {message}", response.status.http);
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Capability Tokens
//!
//! ```
//! use callwire::capability::{generate, Capabilities};
//! use callwire::clock::FixedClock;
//! use std::time::Duration;
//!
//! let caps = Capabilities::new("AC123", "s3cr3t").allow_client_incoming("tommy");
//! let clock = FixedClock::from_unix(1257894000).unwrap();
//!
//! let token = generate(&caps, Duration::from_secs(60), &clock).unwrap();
//! assert_eq!(token, generate(&caps, Duration::from_secs(60), &clock).unwrap());
//! ```

pub mod capability;
mod client;
pub mod clock;
mod error;
pub mod metadata;
pub mod request;
pub mod resource;
mod response;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use request::Resource;
pub use response::{Response, Status};
