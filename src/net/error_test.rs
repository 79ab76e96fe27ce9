use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn login_401_is_invalid_credentials() {
    let err = classify(Endpoint::Login, 401, r#"{"detail":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::InvalidCredentials);
}

#[test]
fn register_400_carries_backend_detail() {
    let err = classify(Endpoint::Register, 400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(err, ApiError::Validation("Email already registered".to_owned()));
}

#[test]
fn register_422_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"},{"msg":"field required"}]}"#;
    let err = classify(Endpoint::Register, 422, body);
    assert_eq!(
        err,
        ApiError::Validation("value is not a valid email address; field required".to_owned())
    );
}

#[test]
fn register_without_body_uses_generic_detail() {
    assert_eq!(
        classify(Endpoint::Register, 400, ""),
        ApiError::Validation("Registration failed.".to_owned())
    );
}

#[test]
fn current_user_401_is_unauthorized() {
    assert_eq!(classify(Endpoint::CurrentUser, 401, r#"{"detail":"Not authenticated"}"#), ApiError::Unauthorized);
}

#[test]
fn oauth_rejections_are_invalid_session() {
    for status in [400, 401, 404] {
        assert_eq!(classify(Endpoint::OAuthSession, status, ""), ApiError::InvalidSession);
    }
}

#[test]
fn server_errors_keep_status_and_detail() {
    let err = classify(Endpoint::Billing, 500, r#"{"detail":"Payment processing error"}"#);
    assert_eq!(err, ApiError::Status { status: 500, detail: "Payment processing error".to_owned() });
}

// =============================================================
// parse_detail / user_message
// =============================================================

#[test]
fn parse_detail_ignores_non_json() {
    assert_eq!(parse_detail("<html>bad gateway</html>"), None);
}

#[test]
fn parse_detail_ignores_blank_string() {
    assert_eq!(parse_detail(r#"{"detail":"  "}"#), None);
}

#[test]
fn user_message_shows_validation_detail_verbatim() {
    let err = ApiError::Validation("Email already registered".to_owned());
    assert_eq!(err.user_message(), "Email already registered");
}

#[test]
fn user_message_hides_transport_internals() {
    let err = ApiError::Transport("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message(), "Network error. Please try again.");
}
