use relay_core::models::chat::ChatTurn;
use relay_core::models::request::IncomingRequest;
use relay_inference::client::InferenceClient;
use relay_inference::error::InferenceError;
use reqwest::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> InferenceClient {
    let endpoint = Url::parse(&format!("{}/chat", server.uri())).unwrap();
    InferenceClient::new(endpoint).unwrap()
}

fn request(message: &str, history: Vec<ChatTurn>) -> IncomingRequest {
    IncomingRequest {
        message: message.to_string(),
        conversation_history: history,
    }
}

#[tokio::test]
async fn posts_json_payload_and_returns_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "message": "hi",
            "conversationHistory": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = request("hi", vec![]);

    let reply = client.infer(&req.outbound()).await.unwrap();
    assert_eq!(reply, "hello");
}

#[tokio::test]
async fn sends_caller_history_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({
            "message": "again",
            "conversationHistory": [
                {"role": "user", "content": "first"},
                {"role": "assistant", "content": "reply"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = request(
        "again",
        vec![ChatTurn::user("first"), ChatTurn::assistant("reply")],
    );

    assert_eq!(client.infer(&req.outbound()).await.unwrap(), "ok");
}

#[tokio::test]
async fn accepts_answer_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "x"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reply = client.infer(&request("q", vec![]).outbound()).await.unwrap();
    assert_eq!(reply, "x");
}

#[tokio::test]
async fn reply_without_text_is_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .infer(&request("q", vec![]).outbound())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::EmptyReply));
    assert_eq!(err.to_string(), "No response from custom model API");
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .infer(&request("q", vec![]).outbound())
        .await
        .unwrap_err();

    match err {
        InferenceError::Status { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "model loading");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_reply_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .infer(&request("q", vec![]).outbound())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::ResponseParse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_request_error() {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&format!("{}/chat", server.uri())).unwrap();
    drop(server);

    let client = InferenceClient::new(endpoint).unwrap();
    let err = client
        .infer(&request("q", vec![]).outbound())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::Request(_)));
}
