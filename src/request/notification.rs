use super::{account_path, required, Resource};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Lists notifications generated for the account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    /// `0` for errors, `1` for warnings.
    pub log: String,
    pub message_date: String,
    pub message_date_before: String,
    pub message_date_after: String,
}

impl Resource for Notifications {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Notifications"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("Log", &self.log),
            Param::eq("MessageDate", &self.message_date),
            Param::le("MessageDate", &self.message_date_before),
            Param::ge("MessageDate", &self.message_date_after),
        ]
    }
}

/// Fetches a single notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub sid: String,
}

impl Resource for Notification {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        Ok(account_path(account_sid, &format!("/Notifications/{sid}")))
    }
}

/// Removes a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteNotification {
    pub sid: String,
}

impl Resource for DeleteNotification {
    const METHOD: Method = Method::DELETE;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        Ok(account_path(account_sid, &format!("/Notifications/{sid}")))
    }
}
