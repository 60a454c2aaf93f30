use super::*;

#[test]
fn user_optional_fields_default_to_none() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Ada",
        "email": "ada@example.com"
    }))
    .unwrap();
    assert_eq!(user.role, None);
    assert_eq!(user.avatar, None);
}

#[test]
fn user_fields_pass_through_verbatim() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 9,
        "name": "  Grace ",
        "email": "GRACE@EXAMPLE.COM",
        "role": "owner",
        "avatar": "avatars/9.png"
    }))
    .unwrap();
    assert_eq!(user.name, "  Grace ");
    assert_eq!(user.email, "GRACE@EXAMPLE.COM");
    assert_eq!(user.role.as_deref(), Some("owner"));
    assert_eq!(user.avatar.as_deref(), Some("avatars/9.png"));
}

#[test]
fn board_without_slug_parses() {
    let board: Board = serde_json::from_value(serde_json::json!({ "id": 1, "name": "Sprint 1" })).unwrap();
    assert_eq!(board.url, None);
    assert_eq!(board.description, None);
}

// =============================================================
// Error body
// =============================================================

fn message_of(body: serde_json::Value) -> Option<String> {
    error_message(&body)
}

#[test]
fn error_message_prefers_data_envelope() {
    let body = serde_json::json!({ "data": { "message": "User not found" }, "message": "outer" });
    assert_eq!(message_of(body).as_deref(), Some("User not found"));
}

#[test]
fn error_message_falls_back_to_top_level() {
    let body = serde_json::json!({ "message": "Forbidden" });
    assert_eq!(message_of(body).as_deref(), Some("Forbidden"));
}

#[test]
fn error_message_absent_or_empty_is_none() {
    assert_eq!(message_of(serde_json::json!({})), None);
    assert_eq!(message_of(serde_json::json!({ "data": {} })), None);
    assert_eq!(message_of(serde_json::json!({ "data": { "message": "" } })), None);
}

#[test]
fn error_message_skips_empty_data_message() {
    let body = serde_json::json!({ "data": { "message": "" }, "message": "Top level" });
    assert_eq!(message_of(body).as_deref(), Some("Top level"));
}

#[test]
fn error_message_survives_non_object_data() {
    let body = serde_json::json!({ "data": "oops", "message": "Top level" });
    assert_eq!(message_of(body).as_deref(), Some("Top level"));
    assert_eq!(message_of(serde_json::json!({ "data": { "message": 42 } })), None);
}
