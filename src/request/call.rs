use super::{account_path, required, Resource};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Lists calls made to and from the account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calls {
    pub to: String,
    pub from: String,
    pub status: String,
    pub start_time: String,
    pub start_time_before: String,
    pub start_time_after: String,
    pub parent_call_sid: String,
}

impl Resource for Calls {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Calls"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("To", &self.to),
            Param::eq("From", &self.from),
            Param::eq("Status", &self.status),
            Param::eq("StartTime", &self.start_time),
            Param::le("StartTime", &self.start_time_before),
            Param::ge("StartTime", &self.start_time_after),
            Param::eq("ParentCallSid", &self.parent_call_sid),
        ]
    }
}

/// Fetches a single call, or its recordings or notifications.
///
/// `recordings` takes precedence when both selectors are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Call {
    pub sid: String,
    pub recordings: bool,
    pub notifications: bool,
}

impl Resource for Call {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        let mut path = account_path(account_sid, &format!("/Calls/{sid}"));
        if self.recordings {
            path.push_str("/Recordings");
        } else if self.notifications {
            path.push_str("/Notifications");
        }
        Ok(path)
    }
}

/// Places an outbound call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeCall {
    pub from: String,
    pub to: String,
    pub url: String,
    pub application_sid: String,
    pub method: String,
    pub fallback_url: String,
    pub fallback_method: String,
    pub status_callback: String,
    pub status_callback_method: String,
    pub send_digits: String,
    pub if_machine: String,
    pub timeout: String,
    pub record: String,
    pub sip_auth_username: String,
    pub sip_auth_password: String,
}

impl Resource for MakeCall {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Calls"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("From", &self.from),
            Param::eq("To", &self.to),
            Param::eq("Url", &self.url),
            Param::eq("ApplicationSid", &self.application_sid),
            Param::eq("Method", &self.method),
            Param::eq("FallbackUrl", &self.fallback_url),
            Param::eq("FallbackMethod", &self.fallback_method),
            Param::eq("StatusCallback", &self.status_callback),
            Param::eq("StatusCallbackMethod", &self.status_callback_method),
            Param::eq("SendDigits", &self.send_digits),
            Param::eq("IfMachine", &self.if_machine),
            Param::eq("Timeout", &self.timeout),
            Param::eq("Record", &self.record),
            Param::eq("SipAuthUsername", &self.sip_auth_username),
            Param::eq("SipAuthPassword", &self.sip_auth_password),
        ]
    }
}

/// Redirects or ends a call in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyCall {
    pub sid: String,
    pub url: String,
    pub method: String,
    pub status: String,
    pub fallback_url: String,
    pub fallback_method: String,
    pub status_callback: String,
    pub status_callback_method: String,
}

impl Resource for ModifyCall {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        let sid = required("sid", &self.sid)?;
        Ok(account_path(account_sid, &format!("/Calls/{sid}")))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("Url", &self.url),
            Param::eq("Method", &self.method),
            Param::eq("Status", &self.status),
            Param::eq("FallbackUrl", &self.fallback_url),
            Param::eq("FallbackMethod", &self.fallback_method),
            Param::eq("StatusCallback", &self.status_callback),
            Param::eq("StatusCallbackMethod", &self.status_callback_method),
        ]
    }
}
