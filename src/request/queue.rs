use super::{account_path, required, Resource};
use crate::metadata::Param;
use crate::Result;
use http::Method;

/// Lists queues within the account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queues;

impl Resource for Queues {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Queues"))
    }
}

fn queue_path(account_sid: &str, sid: &str) -> Result<String> {
    let sid = required("sid", sid)?;
    Ok(account_path(account_sid, &format!("/Queues/{sid}")))
}

/// `/Queues/{sid}/Members/Front` when `front` is set, otherwise
/// `/Queues/{sid}/Members/{call_sid}`.
fn member_path(account_sid: &str, sid: &str, call_sid: &str, front: bool) -> Result<String> {
    let mut path = queue_path(account_sid, sid)?;
    path.push_str("/Members/");
    if front {
        path.push_str("Front");
    } else {
        path.push_str(required("call_sid", call_sid)?);
    }
    Ok(path)
}

/// Fetches a single queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    pub sid: String,
}

impl Resource for Queue {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        queue_path(account_sid, &self.sid)
    }
}

/// Creates a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateQueue {
    pub friendly_name: String,
    pub max_size: String,
}

impl Resource for CreateQueue {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        Ok(account_path(account_sid, "/Queues"))
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("FriendlyName", &self.friendly_name),
            Param::eq("MaxSize", &self.max_size),
        ]
    }
}

/// Changes the name or capacity of a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeQueue {
    pub sid: String,
    pub friendly_name: String,
    pub max_size: String,
}

impl Resource for ChangeQueue {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        queue_path(account_sid, &self.sid)
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![
            Param::eq("FriendlyName", &self.friendly_name),
            Param::eq("MaxSize", &self.max_size),
        ]
    }
}

/// Removes a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteQueue {
    pub sid: String,
}

impl Resource for DeleteQueue {
    const METHOD: Method = Method::DELETE;

    fn path(&self, account_sid: &str) -> Result<String> {
        queue_path(account_sid, &self.sid)
    }
}

/// Lists the members waiting in a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueMembers {
    /// Queue SID.
    pub sid: String,
}

impl Resource for QueueMembers {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        let mut path = queue_path(account_sid, &self.sid)?;
        path.push_str("/Members");
        Ok(path)
    }
}

/// Fetches a queue member, either by call or the one at the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueMember {
    /// Queue SID.
    pub sid: String,
    /// Ignored when `front` is set.
    pub call_sid: String,
    pub front: bool,
}

impl Resource for QueueMember {
    const METHOD: Method = Method::GET;

    fn path(&self, account_sid: &str) -> Result<String> {
        member_path(account_sid, &self.sid, &self.call_sid, self.front)
    }
}

/// Dequeues a member and redirects its call to new TwiML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeQueue {
    /// Queue SID.
    pub sid: String,
    /// Ignored when `front` is set.
    pub call_sid: String,
    pub front: bool,
    pub url: String,
    pub method: String,
}

impl Resource for DeQueue {
    const METHOD: Method = Method::POST;

    fn path(&self, account_sid: &str) -> Result<String> {
        member_path(account_sid, &self.sid, &self.call_sid, self.front)
    }

    fn params(&self) -> Vec<Param<'_>> {
        vec![Param::eq("Url", &self.url), Param::eq("Method", &self.method)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_queue_member_by_call() {
        let member = QueueMember {
            sid: "QU1".to_string(),
            call_sid: "CA7".to_string(),
            front: false,
        };
        let path = member.path("AC123").unwrap();
        assert!(path.ends_with("/Members/CA7"));
        assert_eq!(path, "/2010-04-01/Accounts/AC123/Queues/QU1/Members/CA7");
    }

    #[test]
    fn test_queue_member_front_ignores_call_sid() {
        let member = QueueMember {
            sid: "QU1".to_string(),
            call_sid: "CA7".to_string(),
            front: true,
        };
        assert!(member.path("AC123").unwrap().ends_with("/Members/Front"));

        let member = QueueMember {
            sid: "QU1".to_string(),
            front: true,
            ..Default::default()
        };
        assert_eq!(
            member.path("AC123").unwrap(),
            "/2010-04-01/Accounts/AC123/Queues/QU1/Members/Front"
        );
    }

    #[test]
    fn test_queue_member_requires_call_sid_unless_front() {
        let member = QueueMember {
            sid: "QU1".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            member.path("AC123"),
            Err(Error::MissingField { field: "call_sid" })
        ));

        let member = QueueMember {
            front: true,
            ..Default::default()
        };
        assert!(matches!(
            member.path("AC123"),
            Err(Error::MissingField { field: "sid" })
        ));
    }

    #[test]
    fn test_dequeue_front() {
        let dequeue = DeQueue {
            sid: "QU1".to_string(),
            front: true,
            url: "https://example.com/twiml".to_string(),
            method: "POST".to_string(),
            ..Default::default()
        };
        assert_eq!(
            dequeue.path("AC123").unwrap(),
            "/2010-04-01/Accounts/AC123/Queues/QU1/Members/Front"
        );
        assert_eq!(
            dequeue.query_string(),
            "Url=https%3A%2F%2Fexample.com%2Ftwiml&Method=POST"
        );
        assert_eq!(DeQueue::METHOD, Method::POST);
    }

    #[test]
    fn test_queue_collection_paths() {
        assert_eq!(Queues.path("AC123").unwrap(), "/2010-04-01/Accounts/AC123/Queues");
        assert_eq!(Queues.query_string(), "");

        let members = QueueMembers {
            sid: "QU1".to_string(),
        };
        assert_eq!(
            members.path("AC123").unwrap(),
            "/2010-04-01/Accounts/AC123/Queues/QU1/Members"
        );
        assert!(QueueMembers::default().path("AC123").is_err());
    }

    #[test]
    fn test_create_and_change_queue() {
        let create = CreateQueue {
            friendly_name: "support".to_string(),
            max_size: "50".to_string(),
        };
        assert_eq!(create.query_string(), "FriendlyName=support&MaxSize=50");
        assert_eq!(CreateQueue::METHOD, Method::POST);

        let change = ChangeQueue {
            sid: "QU1".to_string(),
            max_size: "10".to_string(),
            ..Default::default()
        };
        assert_eq!(change.path("AC123").unwrap(), "/2010-04-01/Accounts/AC123/Queues/QU1");
        assert_eq!(change.query_string(), "MaxSize=10");
        assert!(ChangeQueue::default().path("AC123").is_err());
        assert_eq!(DeleteQueue::METHOD, Method::DELETE);
    }
}
