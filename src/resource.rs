//! Typed views of the XML documents returned by the REST API.
//!
//! Every response is wrapped in a `<TwilioResponse>` root. Only the element
//! matching the request is present, so [`Resources`] holds each possible
//! payload as an `Option`. All leaf values are kept as strings since the
//! service leaves many of them empty.

use serde::{Deserialize, Deserializer};

/// The parsed body of a response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Resources {
    pub account: Option<Account>,
    pub accounts: Option<AccountList>,
    pub call: Option<Call>,
    pub calls: Option<CallList>,
    pub message: Option<Message>,
    pub messages: Option<MessageList>,
    pub media: Option<Media>,
    pub media_list: Option<MediaList>,
    pub conference: Option<Conference>,
    pub conferences: Option<ConferenceList>,
    pub participant: Option<Participant>,
    pub participants: Option<ParticipantList>,
    pub queue: Option<Queue>,
    pub queues: Option<QueueList>,
    pub queue_member: Option<QueueMember>,
    pub queue_members: Option<QueueMemberList>,
    pub recording: Option<Recording>,
    pub recordings: Option<RecordingList>,
    pub notification: Option<Notification>,
    pub notifications: Option<NotificationList>,
    pub outgoing_caller_id: Option<OutgoingCallerId>,
    pub outgoing_caller_ids: Option<OutgoingCallerIdList>,
    pub validation_request: Option<ValidationRequest>,
    pub usage_records: Option<UsageRecordList>,
    pub rest_exception: Option<RestException>,
}

impl Resources {
    /// Parses a response body.
    ///
    /// Parsing is best-effort: a body that is not valid XML, or does not fit
    /// the expected shape, yields an empty `Resources`. An empty body is
    /// expected for some deletes and is not reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use callwire::resource::Resources;
    ///
    /// let body = "<TwilioResponse><Queue><Sid>QU1</Sid><CurrentSize>3</CurrentSize></Queue></TwilioResponse>";
    /// let resources = Resources::from_xml(body);
    /// assert_eq!(resources.queue.unwrap().current_size, "3");
    ///
    /// assert_eq!(Resources::from_xml("not xml"), Resources::default());
    /// ```
    pub fn from_xml(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        match quick_xml::de::from_str(body) {
            Ok(resources) => resources,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    body_len = body.len(),
                    "Failed to parse XML response body"
                );
                Self::default()
            }
        }
    }

    /// The fault reported by the service, if any.
    pub fn fault(&self) -> Option<&RestException> {
        self.rest_exception.as_ref()
    }
}

/// A fault reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RestException {
    /// `0` when the service sends an empty or non-numeric code.
    #[serde(deserialize_with = "lenient_code")]
    pub code: u32,
    pub message: String,
    pub more_info: String,
    /// HTTP status the service associates with the fault.
    pub status: String,
}

fn lenient_code<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(text.trim().parse().unwrap_or(0))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Account {
    pub sid: String,
    pub friendly_name: String,
    pub r#type: String,
    pub status: String,
    pub date_created: String,
    pub date_updated: String,
    pub owner_account_sid: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountList {
    #[serde(rename = "Account")]
    pub items: Vec<Account>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Call {
    pub sid: String,
    pub parent_call_sid: String,
    pub date_created: String,
    pub date_updated: String,
    pub account_sid: String,
    pub to: String,
    pub from: String,
    pub phone_number_sid: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub price: String,
    pub price_unit: String,
    pub direction: String,
    pub answered_by: String,
    pub forwarded_from: String,
    pub caller_name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CallList {
    #[serde(rename = "Call")]
    pub items: Vec<Call>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Message {
    pub sid: String,
    pub date_created: String,
    pub date_updated: String,
    pub date_sent: String,
    pub account_sid: String,
    pub to: String,
    pub from: String,
    pub body: String,
    pub num_segments: String,
    pub num_media: String,
    pub status: String,
    pub direction: String,
    pub price: String,
    pub price_unit: String,
    pub api_version: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessageList {
    #[serde(rename = "Message")]
    pub items: Vec<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Media {
    pub sid: String,
    pub account_sid: String,
    pub parent_sid: String,
    pub content_type: String,
    pub date_created: String,
    pub date_updated: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaList {
    #[serde(rename = "Media")]
    pub items: Vec<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Conference {
    pub sid: String,
    pub friendly_name: String,
    pub status: String,
    pub date_created: String,
    pub date_updated: String,
    pub account_sid: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConferenceList {
    #[serde(rename = "Conference")]
    pub items: Vec<Conference>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Participant {
    pub call_sid: String,
    pub conference_sid: String,
    pub account_sid: String,
    pub muted: String,
    pub start_conference_on_enter: String,
    pub end_conference_on_exit: String,
    pub date_created: String,
    pub date_updated: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticipantList {
    #[serde(rename = "Participant")]
    pub items: Vec<Participant>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Queue {
    pub sid: String,
    pub friendly_name: String,
    pub current_size: String,
    pub max_size: String,
    pub average_wait_time: String,
    pub date_created: String,
    pub date_updated: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueueList {
    #[serde(rename = "Queue")]
    pub items: Vec<Queue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueueMember {
    pub call_sid: String,
    pub date_enqueued: String,
    pub wait_time: String,
    pub position: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueueMemberList {
    #[serde(rename = "QueueMember")]
    pub items: Vec<QueueMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Recording {
    pub sid: String,
    pub call_sid: String,
    pub account_sid: String,
    pub duration: String,
    pub date_created: String,
    pub date_updated: String,
    pub api_version: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordingList {
    #[serde(rename = "Recording")]
    pub items: Vec<Recording>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Notification {
    pub sid: String,
    pub account_sid: String,
    pub call_sid: String,
    pub log: String,
    pub error_code: String,
    pub more_info: String,
    pub message_text: String,
    pub message_date: String,
    pub request_url: String,
    pub request_method: String,
    pub request_variables: String,
    pub response_headers: String,
    pub response_body: String,
    pub date_created: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationList {
    #[serde(rename = "Notification")]
    pub items: Vec<Notification>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutgoingCallerId {
    pub sid: String,
    pub friendly_name: String,
    pub phone_number: String,
    pub account_sid: String,
    pub date_created: String,
    pub date_updated: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutgoingCallerIdList {
    #[serde(rename = "OutgoingCallerId")]
    pub items: Vec<OutgoingCallerId>,
}

/// Answer to [`AddOutgoingCallerId`](crate::request::AddOutgoingCallerId).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ValidationRequest {
    pub account_sid: String,
    pub phone_number: String,
    pub friendly_name: String,
    pub validation_code: String,
    pub call_sid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UsageRecord {
    pub category: String,
    pub description: String,
    pub account_sid: String,
    pub start_date: String,
    pub end_date: String,
    pub usage: String,
    pub usage_unit: String,
    pub count: String,
    pub count_unit: String,
    pub price: String,
    pub price_unit: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UsageRecordList {
    #[serde(rename = "UsageRecord")]
    pub items: Vec<UsageRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_call() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<TwilioResponse>
  <Call>
    <Sid>CA42</Sid>
    <AccountSid>AC123</AccountSid>
    <To>+15551234567</To>
    <From>+15005550006</From>
    <Status>completed</Status>
    <Duration>17</Duration>
    <Direction>outbound-api</Direction>
    <Uri>/2010-04-01/Accounts/AC123/Calls/CA42</Uri>
  </Call>
</TwilioResponse>"#;

        let resources = Resources::from_xml(body);
        let call = resources.call.as_ref().expect("call element");
        assert_eq!(call.sid, "CA42");
        assert_eq!(call.to, "+15551234567");
        assert_eq!(call.status, "completed");
        assert_eq!(call.duration, "17");
        assert!(resources.fault().is_none());
        assert!(resources.calls.is_none());
    }

    #[test]
    fn test_parse_list_with_page_attributes() {
        let body = r#"<TwilioResponse>
  <Messages page="0" pagesize="50" uri="/2010-04-01/Accounts/AC123/Messages">
    <Message><Sid>SM1</Sid><Body>first</Body></Message>
    <Message><Sid>SM2</Sid><Body>second</Body></Message>
  </Messages>
</TwilioResponse>"#;

        let messages = Resources::from_xml(body).messages.expect("messages element");
        assert_eq!(messages.items.len(), 2);
        assert_eq!(messages.items[0].sid, "SM1");
        assert_eq!(messages.items[1].body, "second");
    }

    #[test]
    fn test_parse_rest_exception() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<TwilioResponse>
  <RestException>
    <Code>21211</Code>
    <Message>Invalid 'To' Phone Number</Message>
    <MoreInfo>https://www.twilio.com/docs/errors/21211</MoreInfo>
    <Status>400</Status>
  </RestException>
</TwilioResponse>"#;

        let resources = Resources::from_xml(body);
        let fault = resources.fault().expect("fault");
        assert_eq!(fault.code, 21211);
        assert_eq!(fault.message, "Invalid 'To' Phone Number");
        assert_eq!(fault.status, "400");
    }

    #[test]
    fn test_fault_with_empty_or_bad_code_is_kept() {
        let body = "<TwilioResponse><RestException><Code></Code>\
                    <Message>Boom</Message></RestException></TwilioResponse>";
        let fault = Resources::from_xml(body).rest_exception.expect("fault");
        assert_eq!(fault.code, 0);
        assert_eq!(fault.message, "Boom");

        let body = "<TwilioResponse><RestException><Code> 20404 </Code>\
                    <Message>Gone</Message></RestException></TwilioResponse>";
        assert_eq!(Resources::from_xml(body).fault().unwrap().code, 20404);

        let body = "<TwilioResponse><RestException><Code>n/a</Code>\
                    <Message>Odd</Message></RestException></TwilioResponse>";
        assert_eq!(Resources::from_xml(body).fault().unwrap().code, 0);
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let body = "<TwilioResponse><Brand><Sid>BN1</Sid></Brand>\
                    <Conference><Sid>CF1</Sid><Region>us1</Region></Conference></TwilioResponse>";
        let resources = Resources::from_xml(body);
        assert_eq!(resources.conference.unwrap().sid, "CF1");
    }

    #[test]
    fn test_malformed_and_empty_bodies_yield_empty_resources() {
        assert_eq!(Resources::from_xml(""), Resources::default());
        assert_eq!(Resources::from_xml("   \n"), Resources::default());
        assert_eq!(Resources::from_xml("<TwilioResponse><Call>"), Resources::default());
        assert_eq!(Resources::from_xml("{\"sid\": \"CA1\"}"), Resources::default());
    }

    #[test]
    fn test_parse_usage_records_and_validation_request() {
        let body = "<TwilioResponse><UsageRecords>\
            <UsageRecord><Category>calls</Category><Usage>12</Usage></UsageRecord>\
            </UsageRecords></TwilioResponse>";
        let usage = Resources::from_xml(body).usage_records.unwrap();
        assert_eq!(usage.items[0].category, "calls");
        assert_eq!(usage.items[0].usage, "12");

        let body = "<TwilioResponse><ValidationRequest>\
            <PhoneNumber>+15551234567</PhoneNumber><ValidationCode>123456</ValidationCode>\
            </ValidationRequest></TwilioResponse>";
        let validation = Resources::from_xml(body).validation_request.unwrap();
        assert_eq!(validation.validation_code, "123456");
    }
}
