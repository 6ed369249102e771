use super::{account_path, required, Resource};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Lists conferences within the account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conferences {
    pub status: String,
    pub friendly_name: String,
    pub date_created: String,
    pub date_created_before: String,
    pub date_created_after: String,
    pub date_updated: String,
    pub date_updated_before: String,
    pub date_updated_after: String,
}

impl Resource for Conferences {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Conferences"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("Status", &self.status),
            Param::eq("FriendlyName", &self.friendly_name),
            Param::eq("DateCreated", &self.date_created),
            Param::le("DateCreated", &self.date_created_before),
            Param::ge("DateCreated", &self.date_created_after),
            Param::eq("DateUpdated", &self.date_updated),
            Param::le("DateUpdated", &self.date_updated_before),
            Param::ge("DateUpdated", &self.date_updated_after),
        ]
    }
}

/// Fetches a single conference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conference {
    pub sid: String,
}

impl Resource for Conference {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        Ok(account_path(account_sid, &format!("/Conferences/{sid}")))
    }
}

/// Lists the participants of a conference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participants {
    /// Conference SID.
    pub sid: String,
    pub muted: String,
}

impl Resource for Participants {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        Ok(account_path(account_sid, &format!("/Conferences/{sid}/Participants")))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![Param::eq("Muted", &self.muted)]
    }
}

fn participant_path(account_sid: &str, sid: &str, call_sid: &str) -> Result<String> {
    let sid = required("sid", sid)?;
    let call_sid = required("call_sid", call_sid)?;
    Ok(account_path(
        account_sid,
        &format!("/Conferences/{sid}/Participants/{call_sid}"),
    ))
}

/// Fetches a single conference participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    /// Conference SID.
    pub sid: String,
    pub call_sid: String,
}

impl Resource for Participant {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        participant_path(account_sid, &self.sid, &self.call_sid)
    }
}

/// Mutes or unmutes a participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateParticipant {
    /// Conference SID.
    pub sid: String,
    pub call_sid: String,
    pub muted: String,
}

impl Resource for UpdateParticipant {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        participant_path(account_sid, &self.sid, &self.call_sid)
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![Param::eq("Muted", &self.muted)]
    }
}

/// Kicks a participant out of a conference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteParticipant {
    /// Conference SID.
    pub sid: String,
    pub call_sid: String,
}

impl Resource for DeleteParticipant {
    const METHOD: Method = Method::DELETE;

    fn path(&self, account_sid: &str) -> Result<String> {
        participant_path(account_sid, &self.sid, &self.call_sid)
    }
}
