use super::*;
use crate::forms::rules::{
    PASSWORD_NEEDS_DIGIT, PASSWORD_NEEDS_SYMBOL, PASSWORD_NEEDS_UPPERCASE, PASSWORD_TOO_SHORT,
};

fn login(email: &str, password: &str) -> FormInput {
    FormInput::new().with("email", email).with("password", password)
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_accepts_valid_credentials() {
    let out = LoginSchema.validate(&login("ada@example.com", "hunter2")).unwrap();
    assert_eq!(
        out,
        LoginInput {
            email: "ada@example.com".to_owned(),
            password: "hunter2".to_owned(),
        }
    );
}

#[test]
fn login_rejects_malformed_email_with_exact_message() {
    for bad in ["", "ada", "ada@", "ada@example", "@example.com"] {
        let err = LoginSchema.validate(&login(bad, "pw")).unwrap_err();
        assert_eq!(err.messages_for("email"), vec!["Invalid email address"], "email {bad:?}");
        assert!(!err.has_field("password"));
    }
}

#[test]
fn login_collects_both_failures_in_schema_order() {
    let err = LoginSchema.validate(&FormInput::new()).unwrap_err();
    let pairs: Vec<_> = err.errors().iter().map(|e| (e.field, e.message)).collect();
    assert_eq!(
        pairs,
        vec![("email", "Invalid email address"), ("password", "Password is required")]
    );
}

#[test]
fn login_validation_is_repeatable() {
    let input = login("nope", "");
    assert_eq!(LoginSchema.validate(&input), LoginSchema.validate(&input));
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_keeps_optional_invitation_token() {
    let input = FormInput::new()
        .with("email", "ada@example.com")
        .with("name", "Ada")
        .with("password", "pw")
        .with("token", "invite-123");
    let out = SignupSchema.validate(&input).unwrap();
    assert_eq!(out.token.as_deref(), Some("invite-123"));
}

#[test]
fn signup_without_token_is_valid() {
    let input = FormInput::new()
        .with("email", "ada@example.com")
        .with("name", "Ada")
        .with("password", "pw");
    let out = SignupSchema.validate(&input).unwrap();
    assert_eq!(out.token, None);
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        serde_json::json!({ "email": "ada@example.com", "name": "Ada", "password": "pw" })
    );
}

#[test]
fn signup_reports_email_name_and_password() {
    let input = FormInput::new().with("email", "ada@").with("name", "");
    let err = SignupSchema.validate(&input).unwrap_err();
    let fields: Vec<_> = err.errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["email", "name", "password"]);
    assert_eq!(err.first_for("email"), Some("Invalid email address"));
    assert_eq!(err.first_for("name"), Some("Name is required"));
}

// =============================================================
// Federated auth
// =============================================================

#[test]
fn federated_accepts_profile_with_picture() {
    let input = FormInput::new()
        .with("email", "ada@example.com")
        .with("name", "Ada")
        .with("picture", "https://cdn.example.com/ada.png");
    let out = FederatedAuthSchema.validate(&input).unwrap();
    assert_eq!(out.picture.as_deref(), Some("https://cdn.example.com/ada.png"));
    assert_eq!(out.token, None);
}

#[test]
fn federated_rejects_non_url_picture() {
    let input = FormInput::new()
        .with("email", "ada@example.com")
        .with("name", "Ada")
        .with("picture", "ada.png");
    let err = FederatedAuthSchema.validate(&input).unwrap_err();
    assert_eq!(err.messages_for("picture"), vec!["Invalid url"]);
    assert_eq!(err.len(), 1);
}

#[test]
fn federated_absent_picture_is_valid() {
    let input = FormInput::new().with("email", "ada@example.com").with("name", "Ada");
    assert!(FederatedAuthSchema.validate(&input).is_ok());
}

// =============================================================
// Update password
// =============================================================

fn passwords(new: &str, confirm: &str) -> FormInput {
    FormInput::new().with("newPassword", new).with("confirmNewPassword", confirm)
}

#[test]
fn update_password_accepts_strong_matching_pair() {
    let out = UpdatePasswordSchema.validate(&passwords("Str0ng!pw", "Str0ng!pw")).unwrap();
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        serde_json::json!({ "newPassword": "Str0ng!pw", "confirmNewPassword": "Str0ng!pw" })
    );
}

#[test]
fn update_password_mismatch_is_attached_to_confirmation() {
    let err = UpdatePasswordSchema.validate(&passwords("Str0ng!pw", "Str0ng!px")).unwrap_err();
    assert_eq!(err.messages_for("confirmNewPassword"), vec!["Passwords don't match"]);
    assert!(!err.has_field("newPassword"));
}

#[test]
fn update_password_mismatch_reported_alongside_weak_password() {
    let err = UpdatePasswordSchema.validate(&passwords("abc", "abd")).unwrap_err();
    assert_eq!(
        err.messages_for("newPassword"),
        vec![PASSWORD_TOO_SHORT, PASSWORD_NEEDS_UPPERCASE, PASSWORD_NEEDS_DIGIT, PASSWORD_NEEDS_SYMBOL]
    );
    assert_eq!(err.messages_for("confirmNewPassword"), vec!["Passwords don't match"]);
    assert_eq!(err.errors().last().map(|e| e.field), Some("confirmNewPassword"));
}

#[test]
fn update_password_weak_but_matching_reports_only_strength() {
    let err = UpdatePasswordSchema.validate(&passwords("short", "short")).unwrap_err();
    assert!(err.has_field("newPassword"));
    assert!(!err.has_field("confirmNewPassword"));
}

#[test]
fn update_password_validation_is_repeatable() {
    let mismatched = passwords("abc", "abd");
    let first = UpdatePasswordSchema.validate(&mismatched);
    assert_eq!(first, UpdatePasswordSchema.validate(&mismatched));
    assert!(first.unwrap_err().has_field("confirmNewPassword"));

    let matching = passwords("Str0ng!pw", "Str0ng!pw");
    assert!(UpdatePasswordSchema.validate(&matching).is_ok());
    assert!(UpdatePasswordSchema.validate(&mismatched).is_err());
    assert_eq!(
        UpdatePasswordSchema.validate(&matching),
        UpdatePasswordSchema.validate(&matching)
    );
}

#[test]
fn update_password_exact_strength_messages() {
    let err = UpdatePasswordSchema.validate(&passwords("Strong1pw", "Strong1pw")).unwrap_err();
    assert_eq!(
        err.messages_for("newPassword"),
        vec!["Password must contain at least one special character (@$!%*?&)"]
    );
    let err = UpdatePasswordSchema.validate(&passwords("Ab1!", "Ab1!")).unwrap_err();
    assert_eq!(
        err.messages_for("newPassword"),
        vec!["Password must be at least 8 characters long"]
    );
}
