//! Integration tests using wiremock to simulate the REST API.

use callwire::request::{
    Calls, DeQueue, DeleteRecording, Messages, Participant, QueueMember, SendMessage,
    UpdateOutgoingCallerId,
};
use callwire::resource::Resources;
use callwire::{Client, Error};
use http::StatusCode;
use wiremock::matchers::{basic_auth, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "AC123";
const TOKEN: &str = "secret-token";

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .unwrap()
        .credentials(ACCOUNT, TOKEN)
        .build()
        .unwrap()
}

fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<TwilioResponse>{body}</TwilioResponse>"))
        .insert_header("content-type", "application/xml")
}

#[tokio::test]
async fn test_send_message_posts_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/Messages"))
        .and(basic_auth(ACCOUNT, TOKEN))
        .and(header("accept", "*/*"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("Body=Hello+there&From=%2B15005550006&To=%2B15551234567"))
        .respond_with(xml("<Message><Sid>SM1</Sid><Status>queued</Status></Message>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let sms = SendMessage {
        body: "Hello there".to_string(),
        from: "+15005550006".to_string(),
        to: "+15551234567".to_string(),
        ..Default::default()
    };

    let response = client.request(&sms).await.unwrap();

    assert_eq!(response.status.http, StatusCode::OK);
    assert_eq!(response.status.fault, 0);
    let message = response.message.as_ref().unwrap();
    assert_eq!(message.sid, "SM1");
    assert_eq!(message.status, "queued");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_calls_uses_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls"))
        .and(query_param("To", "+15551234567"))
        .and(query_param("Status", "completed"))
        .and(basic_auth(ACCOUNT, TOKEN))
        .respond_with(xml(
            "<Calls page=\"0\"><Call><Sid>CA1</Sid></Call><Call><Sid>CA2</Sid></Call></Calls>",
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let calls = Calls {
        to: "+15551234567".to_string(),
        status: "completed".to_string(),
        ..Default::default()
    };

    let response = client.request(&calls).await.unwrap();

    let sids: Vec<_> = response
        .calls
        .as_ref()
        .unwrap()
        .items
        .iter()
        .map(|c| c.sid.as_str())
        .collect();
    assert_eq!(sids, ["CA1", "CA2"]);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_unfiltered_list_has_no_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Messages"))
        .respond_with(xml("<Messages></Messages>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.request(&Messages::default()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_delete_recording() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/2010-04-01/Accounts/AC123/Recordings/RE1"))
        .and(basic_auth(ACCOUNT, TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .request(&DeleteRecording {
            sid: "RE1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.status.http, StatusCode::NO_CONTENT);
    assert!(response.raw_body.is_empty());
    assert!(!response.is_fault());
}

#[tokio::test]
async fn test_service_fault_is_returned_as_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/Messages"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(
                "<TwilioResponse><RestException>\
                 <Code>21211</Code>\
                 <Message>Invalid 'To' Phone Number</Message>\
                 <MoreInfo>https://www.twilio.com/docs/errors/21211</MoreInfo>\
                 <Status>400</Status>\
                 </RestException></TwilioResponse>",
            ),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let sms = SendMessage {
        to: "12".to_string(),
        body: "hi".to_string(),
        ..Default::default()
    };

    let err = client.request(&sms).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid 'To' Phone Number");
    assert_eq!(err.fault_code(), Some(21211));
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

    match err {
        Error::ServiceFault { response, .. } => {
            assert_eq!(response.status.fault, 21211);
            assert_eq!(response.status.http, StatusCode::BAD_REQUEST);
            assert_eq!(
                response.fault().unwrap().more_info,
                "https://www.twilio.com/docs/errors/21211"
            );
        }
        other => panic!("Expected ServiceFault, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fault_inside_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Conferences/CF1/Participants/CA1"))
        .respond_with(xml(
            "<RestException><Code>20404</Code><Message>The requested resource was not found</Message></RestException>",
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let participant = Participant {
        sid: "CF1".to_string(),
        call_sid: "CA1".to_string(),
    };

    let err = client.request(&participant).await.unwrap_err();
    assert_eq!(err.to_string(), "The requested resource was not found");
    assert_eq!(err.fault_code(), Some(20404));
    assert_eq!(err.status(), Some(StatusCode::OK));
}

#[tokio::test]
async fn test_http_error_without_fault_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.request(&Calls::default()).await.unwrap();

    assert_eq!(response.status.http, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.status.fault, 0);
    assert_eq!(response.raw_body, "Service Unavailable");
    assert!(response.calls.is_none());
}

#[tokio::test]
async fn test_malformed_xml_gives_empty_resources() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<TwilioResponse><Calls>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.request(&Calls::default()).await.unwrap();

    assert_eq!(response.data, Resources::default());
    assert_eq!(response.raw_body, "<TwilioResponse><Calls>");
}

#[tokio::test]
async fn test_missing_identifier_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let member = QueueMember {
        sid: "QU1".to_string(),
        front: false,
        ..Default::default()
    };
    let err = client.request(&member).await.unwrap_err();
    assert!(matches!(err, Error::MissingField { field: "call_sid" }));

    let err = client
        .request(&UpdateOutgoingCallerId {
            friendly_name: "Lobby".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_queue_member_front() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Queues/QU1/Members/Front"))
        .respond_with(xml(
            "<QueueMember><CallSid>CA5</CallSid><Position>1</Position></QueueMember>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let member = QueueMember {
        sid: "QU1".to_string(),
        call_sid: "CA9".to_string(),
        front: true,
    };

    let response = client.request(&member).await.unwrap();
    let member = response.queue_member.as_ref().unwrap();
    assert_eq!(member.call_sid, "CA5");
    assert_eq!(member.position, "1");
}

#[tokio::test]
async fn test_dequeue_posts_redirect() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/Queues/QU1/Members/CA9"))
        .and(body_string("Url=https%3A%2F%2Fexample.com%2Fnext.xml&Method=POST"))
        .respond_with(xml("<QueueMember><CallSid>CA9</CallSid></QueueMember>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let dequeue = DeQueue {
        sid: "QU1".to_string(),
        call_sid: "CA9".to_string(),
        url: "https://example.com/next.xml".to_string(),
        method: "POST".to_string(),
        ..Default::default()
    };

    client.request(&dequeue).await.unwrap();
}

#[tokio::test]
async fn test_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC123/Calls"))
        .and(header("user-agent", "test-agent"))
        .respond_with(xml("<Calls/>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .base_url(mock_server.uri())
        .unwrap()
        .credentials(ACCOUNT, TOKEN)
        .default_header("User-Agent", "test-agent")
        .unwrap()
        .build()
        .unwrap();

    client.request(&Calls::default()).await.unwrap();
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/2010-04-01/Accounts/AC123/Calls"))
        .respond_with(xml("<Calls/>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .base_url(format!("{}/proxy", mock_server.uri()))
        .unwrap()
        .credentials(ACCOUNT, TOKEN)
        .build()
        .unwrap();

    client.request(&Calls::default()).await.unwrap();
}

#[tokio::test]
async fn test_network_error_is_surfaced() {
    // Nothing listens on port 1.
    let client = Client::builder()
        .base_url("http://127.0.0.1:1")
        .unwrap()
        .credentials(ACCOUNT, TOKEN)
        .build()
        .unwrap();

    let err = client.request(&Calls::default()).await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.fault_code(), None);
}
