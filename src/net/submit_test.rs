use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::mock_transport::MockTransport;
use crate::state::feedback::FeedbackKind;

fn submitter(transport: MockTransport) -> FormSubmitter<MockTransport> {
    FormSubmitter::new(transport, PortalConfig::default())
}

fn payload() -> Payload {
    Payload::from([
        ("username".to_owned(), "ada".to_owned()),
        ("password".to_owned(), "hunter22hunter".to_owned()),
    ])
}

fn run(
    submitter: &FormSubmitter<MockTransport>,
    target: AuthForm,
) -> (Option<Value>, Messages) {
    let messages = RefCell::new(Messages::default());
    let result = block_on(submitter.submit("/api/login", &payload(), target, &messages));
    (result, messages.into_inner())
}

// =============================================================
// Success path
// =============================================================

#[test]
fn success_uses_body_message_and_returns_body() {
    let body = json!({ "message": "Login successful.", "redirect_to": "/dashboard" });
    let s = submitter(MockTransport::json(200, &body));
    let (result, messages) = run(&s, AuthForm::Login);
    assert_eq!(result, Some(body));
    assert_eq!(messages.login, Feedback::success("Login successful."));
    assert!(messages.signup.is_empty());
}

#[test]
fn success_without_message_uses_generic_text() {
    let s = submitter(MockTransport::json(201, &json!({ "user_id": 42 })));
    let (result, messages) = run(&s, AuthForm::Signup);
    assert!(result.is_some());
    assert_eq!(messages.signup, Feedback::success("Success."));
    assert!(messages.login.is_empty());
}

#[test]
fn request_is_json_encoded_payload_at_endpoint() {
    let s = submitter(MockTransport::json(200, &json!({})));
    run(&s, AuthForm::Login);
    let requests = s.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "/api/login");
    assert_eq!(
        s.transport.sent_json(),
        json!({ "username": "ada", "password": "hunter22hunter" })
    );
}

#[test]
fn request_url_carries_configured_api_base() {
    let config = PortalConfig::default().with_api_base("https://auth.example.com/");
    let s = FormSubmitter::new(MockTransport::json(200, &json!({})), config);
    run(&s, AuthForm::Login);
    assert_eq!(s.transport.requests()[0].0, "https://auth.example.com/api/login");
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn string_detail_renders_verbatim() {
    let s = submitter(MockTransport::json(401, &json!({ "detail": "bad password" })));
    let (result, messages) = run(&s, AuthForm::Login);
    assert_eq!(result, None);
    assert_eq!(messages.login, Feedback::error("bad password"));
}

#[test]
fn list_detail_renders_joined_msgs() {
    let body = json!({ "detail": [{ "msg": "too short" }, { "msg": "missing digit" }] });
    let s = submitter(MockTransport::json(422, &body));
    let (result, messages) = run(&s, AuthForm::Signup);
    assert_eq!(result, None);
    assert_eq!(messages.signup.kind, FeedbackKind::Error);
    assert_eq!(messages.signup.text, "too short missing digit");
}

#[test]
fn missing_detail_renders_generic_failure() {
    let s = submitter(MockTransport::json(500, &json!({ "error": "boom" })));
    let (result, messages) = run(&s, AuthForm::Login);
    assert_eq!(result, None);
    assert_eq!(messages.login, Feedback::error("Request failed."));
}

#[test]
fn transport_failure_renders_its_description() {
    let s = submitter(MockTransport::failing("Failed to fetch"));
    let (result, messages) = run(&s, AuthForm::Login);
    assert_eq!(result, None);
    assert_eq!(messages.login, Feedback::error("Failed to fetch"));
}

#[test]
fn non_json_body_renders_parse_error_even_on_success_status() {
    for status in [200, 502] {
        let s = submitter(MockTransport::replying(status, "<html>Bad Gateway</html>"));
        let (result, messages) = run(&s, AuthForm::Signup);
        assert_eq!(result, None);
        assert_eq!(messages.signup.kind, FeedbackKind::Error);
        let expected = serde_json::from_str::<Value>("<html>Bad Gateway</html>")
            .unwrap_err()
            .to_string();
        assert_eq!(messages.signup.text, expected);
    }
}

#[test]
fn rejected_error_keeps_status_and_detail() {
    let s = submitter(MockTransport::json(403, &json!({ "detail": "Please confirm your email." })));
    let err = block_on(s.exchange("/api/login", &payload())).unwrap_err();
    match &err {
        SubmitError::Rejected { status, detail } => {
            assert_eq!(*status, 403);
            assert_eq!(detail, &ErrorDetail::Text("Please confirm your email.".to_owned()));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Please confirm your email.");
}

#[test]
fn each_submit_updates_only_its_target_once() {
    let s = submitter(MockTransport::json(400, &json!({ "detail": "taken" })));
    let messages = RefCell::new(Messages {
        login: Feedback::success("still here"),
        signup: Feedback::default(),
    });
    block_on(s.submit("/api/signup", &payload(), AuthForm::Signup, &messages));
    let messages = messages.into_inner();
    assert_eq!(messages.login, Feedback::success("still here"));
    assert_eq!(messages.signup, Feedback::error("taken"));
}
