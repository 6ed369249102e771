use super::{account_path, required, Resource};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Lists recordings, optionally those of a single call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recordings {
    /// Filter by call, sent as `CallSid`.
    pub call_sid: String,
    pub date_created: String,
    pub date_created_before: String,
    pub date_created_after: String,
}

impl Resource for Recordings {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Recordings"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("CallSid", &self.call_sid),
            Param::eq("DateCreated", &self.date_created),
            Param::le("DateCreated", &self.date_created_before),
            Param::ge("DateCreated", &self.date_created_after),
        ]
    }
}

/// Fetches a single recording.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recording {
    pub sid: String,
}

impl Resource for Recording {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        Ok(account_path(account_sid, &format!("/Recordings/{sid}")))
    }
}

/// Deletes a recording.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRecording {
    pub sid: String,
}

impl Resource for DeleteRecording {
    const METHOD: Method = Method::DELETE;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        Ok(account_path(account_sid, &format!("/Recordings/{sid}")))
    }
}
