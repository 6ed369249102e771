//! Prints a capability token for the voice SDK.
//!
//! Run with: `cargo run --example capability_token`

use callwire::capability::{generate, Capabilities};
use callwire::clock::SystemClock;
use std::time::Duration;

fn main() -> Result<(), callwire::Error> {
    tracing_subscriber::fmt()
        .with_env_filter("callwire=debug")
        .init();

    let caps = Capabilities::new("ACxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx", "your-auth-token")
        .allow_client_incoming("tommy")
        .allow_client_outgoing("APxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx");

    let token = generate(&caps, Duration::from_secs(3600), &SystemClock)?;
    println!("{token}");

    Ok(())
}
