use super::*;

#[test]
fn success_range_matches_fetch_ok() {
    assert!(HttpReply::new(200, "{}").is_success());
    assert!(HttpReply::new(201, "{}").is_success());
    assert!(HttpReply::new(299, "{}").is_success());
    assert!(!HttpReply::new(199, "{}").is_success());
    assert!(!HttpReply::new(302, "{}").is_success());
    assert!(!HttpReply::new(422, "{}").is_success());
    assert!(!HttpReply::new(502, "{}").is_success());
}

#[test]
fn network_error_displays_cause_only() {
    let err = TransportError::Network("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "Failed to fetch");
}

#[test]
fn json_posts_declare_json_content_type() {
    let headers = json_post_headers();
    assert_eq!(headers, [("Content-Type", "application/json")]);
    assert!(headers.iter().any(|(_, value)| *value == JSON_CONTENT_TYPE));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_transport_is_unavailable_natively() {
    let result = futures::executor::block_on(
        BrowserTransport.post_json("/api/login", "{}".to_owned()),
    );
    assert_eq!(result, Err(TransportError::Unavailable));
}
