use super::{account_path, required, Resource};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Lists messages sent from or to the account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    pub to: String,
    pub from: String,
    pub date_sent: String,
    pub date_sent_before: String,
    pub date_sent_after: String,
}

impl Resource for Messages {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Messages"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("To", &self.to),
            Param::eq("From", &self.from),
            Param::eq("DateSent", &self.date_sent),
            Param::le("DateSent", &self.date_sent_before),
            Param::ge("DateSent", &self.date_sent_after),
        ]
    }
}

/// Fetches a single message, or the media attached to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub sid: String,
    /// Address the media list instead of the message itself.
    pub media: bool,
    /// A single media item; only used together with `media`.
    pub media_sid: String,
}

impl Resource for Message {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        let mut path = account_path(account_sid, &format!("/Messages/{sid}"));
        if self.media {
            path.push_str("/Media");
            if !self.media_sid.is_empty() {
                path.push('/');
                path.push_str(&self.media_sid);
            }
        }
        Ok(path)
    }
}

/// Sends an SMS or MMS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendMessage {
    /// Message text, sent as `Body`.
    pub body: String,
    pub media_url: String,
    pub from: String,
    pub to: String,
    pub application_sid: String,
    pub status_callback: String,
}

impl Resource for SendMessage {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Messages"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("Body", &self.body),
            Param::eq("MediaUrl", &self.media_url),
            Param::eq("From", &self.from),
            Param::eq("To", &self.to),
            Param::eq("ApplicationSid", &self.application_sid),
            Param::eq("StatusCallback", &self.status_callback),
        ]
    }
}
