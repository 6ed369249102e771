use super::{account_path, required, Resource};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Lists verified outgoing caller IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingCallerIds {
    pub phone_number: String,
    pub friendly_name: String,
}

impl Resource for OutgoingCallerIds {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/OutgoingCallerIds"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("PhoneNumber", &self.phone_number),
            Param::eq("FriendlyName", &self.friendly_name),
        ]
    }
}

fn caller_id_path(account_sid: &str, sid: &str) -> Result<String> {
    let sid = required("sid", sid)?;
    Ok(account_path(account_sid, &format!("/OutgoingCallerIds/{sid}")))
}

/// Fetches a single outgoing caller ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingCallerId {
    pub sid: String,
}

impl Resource for OutgoingCallerId {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        caller_id_path(account_sid, &self.sid)
    }
}

/// Renames an outgoing caller ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutgoingCallerId {
    pub sid: String,
    pub friendly_name: String,
}

impl Resource for UpdateOutgoingCallerId {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        caller_id_path(account_sid, &self.sid)
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![Param::eq("FriendlyName", &self.friendly_name)]
    }
}

/// Removes an outgoing caller ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOutgoingCallerId {
    pub sid: String,
}

impl Resource for DeleteOutgoingCallerId {
    const METHOD: Method = Method::DELETE;

    fn path(&self, account_sid: &str) -> Result<String> {
        caller_id_path(account_sid, &self.sid)
    }
}

/// Starts verification of a new outgoing caller ID.
///
/// The service answers with a validation request holding the code the
/// callee must enter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutgoingCallerId {
    pub phone_number: String,
    pub friendly_name: String,
    pub call_delay: String,
    pub extension: String,
    pub status_callback: String,
    pub status_callback_method: String,
}

impl Resource for AddOutgoingCallerId {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/OutgoingCallerIds"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("PhoneNumber", &self.phone_number),
            Param::eq("FriendlyName", &self.friendly_name),
            Param::eq("CallDelay", &self.call_delay),
            Param::eq("Extension", &self.extension),
            Param::eq("StatusCallback", &self.status_callback),
            Param::eq("StatusCallbackMethod", &self.status_callback_method),
        ]
    }
}
