use super::*;

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn login_input_is_trimmed() {
    assert_eq!(
        validate_login_input("  trader@example.com ", "secret"),
        Ok(("trader@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn login_requires_email_then_password() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email."));
    assert_eq!(validate_login_input("trader@example.com", ""), Err("Enter your password."));
}

#[test]
fn password_whitespace_is_kept() {
    let (_, password) = validate_login_input("a@b.co", " pass ").unwrap();
    assert_eq!(password, " pass ");
}

// =============================================================
// validate_register_input
// =============================================================

#[test]
fn register_requires_name() {
    assert_eq!(validate_register_input("a@b.co", "pw", "  "), Err("Enter your name."));
}

#[test]
fn register_input_is_trimmed() {
    assert_eq!(
        validate_register_input(" a@b.co ", "pw", " Ada "),
        Ok(("a@b.co".to_owned(), "pw".to_owned(), "Ada".to_owned()))
    );
}

#[test]
fn register_reports_missing_email() {
    assert_eq!(validate_register_input("", "pw", "Ada"), Err("Enter your email."));
}
