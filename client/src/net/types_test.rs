use super::*;

#[test]
fn login_request_serializes_password_only() {
    let body = serde_json::to_value(AdminLoginRequest { password: "hunter2" }).unwrap();
    assert_eq!(body, serde_json::json!({ "password": "hunter2" }));
}

#[test]
fn login_response_decodes_token_and_expiry() {
    let resp: AdminLoginResponse =
        serde_json::from_str(r#"{"token":"abc","expires_at":"2026-10-20T12:00:00"}"#).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.expires_at.as_deref(), Some("2026-10-20T12:00:00"));
}

#[test]
fn login_response_tolerates_missing_expiry() {
    let resp: AdminLoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(resp.expires_at, None);
}
