use super::*;

#[test]
fn error_message_prefers_error_field() {
    let v = serde_json::json!({ "error": "No chemicals selected" });
    assert_eq!(
        error_message(&v, reqwest::StatusCode::BAD_REQUEST),
        "No chemicals selected"
    );
}

#[test]
fn error_message_falls_back_to_status() {
    let v = serde_json::json!({ "error": "   " });
    assert_eq!(
        error_message(&v, reqwest::StatusCode::INTERNAL_SERVER_ERROR),
        "HTTP 500 Internal Server Error"
    );
    assert_eq!(
        error_message(&serde_json::Value::Null, reqwest::StatusCode::BAD_GATEWAY),
        "HTTP 502 Bad Gateway"
    );
}

#[test]
fn with_retries_returns_first_success() {
    let mut calls = 0;
    let v = with_retries("probe", || {
        calls += 1;
        if calls < 2 {
            anyhow::bail!("flaky");
        }
        Ok(calls)
    })
    .expect("second attempt succeeds");
    assert_eq!(v, 2);
}

#[test]
fn with_retries_gives_up_with_label() {
    let mut calls = 0;
    let err = with_retries::<()>("list findings", || {
        calls += 1;
        anyhow::bail!("connection refused")
    })
    .unwrap_err();
    assert_eq!(calls, 3);
    let msg = format!("{:#}", err);
    assert!(msg.starts_with("list findings"), "{}", msg);
    assert!(msg.contains("connection refused"), "{}", msg);
}

#[test]
fn url_joins_base_and_path() {
    let cfg = crate::model::LabConfig {
        api_base: "http://lab.local/api/".to_string(),
        ..crate::model::LabConfig::default()
    };
    let client = RemoteClient::new(&cfg).expect("client");
    assert_eq!(client.url("/findings"), "http://lab.local/api/findings");
}
