//! Request descriptors, one per REST operation.
//!
//! Every descriptor is a plain value implementing [`Resource`]. The trait
//! supplies the three things the client needs to issue a call: the HTTP
//! method, the resource path below the API root, and the ordered list of
//! query or form parameters.
//!
//! ```
//! use callwire::request::{Calls, Resource};
//!
//! let calls = Calls {
//!     to: "+15551234567".to_string(),
//!     start_time_after: "2024-01-01".to_string(),
//!     ..Default::default()
//! };
//!
//! assert_eq!(calls.path("AC123").unwrap(), "/2010-04-01/Accounts/AC123/Calls");
//! assert_eq!(calls.query_string(), "To=%2B15551234567&StartTime>=2024-01-01");
//! ```

mod account;
mod call;
mod caller_id;
mod conference;
mod message;
mod notification;
mod queue;
mod recording;
mod usage;

pub use account::{Account, Accounts};
pub use call::{Call, Calls, MakeCall, ModifyCall};
pub use caller_id::{
    AddOutgoingCallerId, DeleteOutgoingCallerId, OutgoingCallerId, OutgoingCallerIds,
    UpdateOutgoingCallerId,
};
pub use conference::{
    Conference, Conferences, DeleteParticipant, Participant, Participants, UpdateParticipant,
};
pub use message::{Message, Messages, SendMessage};
pub use notification::{DeleteNotification, Notification, Notifications};
pub use queue::{ChangeQueue, CreateQueue, DeQueue, DeleteQueue, Queue, QueueMember, QueueMembers, Queues};
pub use recording::{DeleteRecording, Recording, Recordings};
pub use usage::UsageRecords;

use crate::metadata::{encode_params, Param};
use crate::{Error, Result};
use http::Method;

/// REST API version every path is rooted at.
pub const API_VERSION: &str = "2010-04-01";

/// Path of the account collection.
pub const ACCOUNTS_PATH: &str = "/2010-04-01/Accounts";

/// A REST operation the client can dispatch.
pub trait Resource {
    /// HTTP method used for this operation.
    ///
    /// `GET` and `DELETE` carry their parameters in the query string, `POST`
    /// sends them as a url-encoded form body.
    const METHOD: Method;

    /// Builds the resource path for the given account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when an identifier the path needs is
    /// empty.
    fn path(&self, account_sid: &str) -> Result<String>;

    /// Tagged parameters in declaration order.
    fn params(&self) -> Vec<Param<'_>> {
        Vec::new()
    }

    /// Encodes [`params`](Resource::params), skipping empty values.
    fn query_string(&self) -> String {
        encode_params(&self.params())
    }
}

/// Path of a collection or instance owned by `account_sid`.
pub(crate) fn account_path(account_sid: &str, suffix: &str) -> String {
    format!("{ACCOUNTS_PATH}/{account_sid}{suffix}")
}

/// Returns `value` if it is non-empty.
pub(crate) fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::MissingField { field });
    }
    Ok(value)
}
