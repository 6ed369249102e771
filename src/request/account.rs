use super::{required, Resource, ACCOUNTS_PATH};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Lists the accounts visible to the credentials, including subaccounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accounts {
    pub friendly_name: String,
    pub status: String,
}

impl Resource for Accounts {
    const METHOD: Method = Method::GET;

    fn path(&self, _account_sid: &str) -> Result<String> {
        Ok(ACCOUNTS_PATH.to_string())
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("FriendlyName", &self.friendly_name),
            Param::eq("Status", &self.status),
        ]
    }
}

/// Fetches a single account or subaccount.
///
/// The path addresses `sid` from this descriptor, not the client's own
/// account SID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub sid: String,
}

impl Resource for Account {
    const METHOD: Method = Method::GET;

    fn path(&self, _account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        Ok(format!("{ACCOUNTS_PATH}/{sid}"))
    }
}
