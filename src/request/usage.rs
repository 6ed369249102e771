use super::{account_path, Resource};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Requests usage records, optionally narrowed to a time-bucket
/// sub-resource such as `Daily`, `LastMonth` or `AllTime`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageRecords {
    /// Appended verbatim after `/Usage/Records/`.
    pub sub_resource: String,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
}

impl Resource for UsageRecords {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(
            account_sid,
            &format!("/Usage/Records/{}", self.sub_resource),
        ))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("Category", &self.category),
            Param::eq("StartDate", &self.start_date),
            Param::eq("EndDate", &self.end_date),
        ]
    }
}
