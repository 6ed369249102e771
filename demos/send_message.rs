//! Sends an SMS and looks the message up again.
//!
//! This example shows how to:
//! - Create a client from account credentials
//! - Dispatch a POST descriptor and a GET descriptor
//! - Tell service faults apart from other errors
//!
//! Run with:
//! `ACCOUNT_SID=AC... AUTH_TOKEN=... TO=+1555... FROM=+1500... cargo run --example send_message`

use callwire::request::{Message, SendMessage};
use callwire::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("callwire=debug,send_message=info")
        .init();

    let var = |name: &str| std::env::var(name).unwrap_or_default();
    let client = Client::new(var("ACCOUNT_SID"), var("AUTH_TOKEN"))?;

    let sms = SendMessage {
        from: var("FROM"),
        to: var("TO"),
        body: "Hello from callwire".to_string(),
        ..Default::default()
    };

    let sent = match client.request(&sms).await {
        Ok(response) => response,
        Err(Error::ServiceFault { code, message, .. }) => {
            eprintln!("Rejected with fault {code}: {message}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let Some(sid) = sent.message.as_ref().map(|m| m.sid.clone()) else {
        println!("No message in response:\n{}", sent.raw_body);
        return Ok(());
    };
    println!("Sent {sid} (HTTP {}, {:?})", sent.status.http, sent.latency);

    let fetched = client
        .request(&Message {
            sid,
            ..Default::default()
        })
        .await?;
    if let Some(message) = &fetched.message {
        println!("Status: {}", message.status);
    }

    Ok(())
}
