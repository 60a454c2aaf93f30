use super::*;

#[test]
fn create_rejects_empty_name() {
    let err = CreateBoardSchema.validate(&FormInput::new().with("name", "")).unwrap_err();
    assert_eq!(err.messages_for("name"), vec!["Board name is required"]);
}

#[test]
fn create_rejects_absent_name() {
    let err = CreateBoardSchema.validate(&FormInput::new()).unwrap_err();
    assert!(err.has_field("name"));
}

#[test]
fn create_accepts_name_without_description() {
    let out = CreateBoardSchema
        .validate(&FormInput::new().with("name", "Sprint 1"))
        .unwrap();
    assert_eq!(
        out,
        CreateBoardInput {
            name: "Sprint 1".to_owned(),
            description: None,
        }
    );
    assert_eq!(serde_json::to_value(&out).unwrap(), serde_json::json!({ "name": "Sprint 1" }));
}

#[test]
fn create_keeps_description() {
    let input = FormInput::new().with("name", "Roadmap").with("description", "Q3 plans");
    let out = CreateBoardSchema.validate(&input).unwrap();
    assert_eq!(out.description.as_deref(), Some("Q3 plans"));
}

#[test]
fn update_accepts_empty_patch() {
    let out = UpdateBoardSchema.validate(&FormInput::new()).unwrap();
    assert_eq!(out, UpdateBoardInput::default());
    assert_eq!(serde_json::to_value(&out).unwrap(), serde_json::json!({}));
}

#[test]
fn update_rejects_present_but_empty_name() {
    let err = UpdateBoardSchema.validate(&FormInput::new().with("name", "")).unwrap_err();
    assert_eq!(err.messages_for("name"), vec!["Board name is required"]);
}

#[test]
fn update_description_only_patch() {
    let out = UpdateBoardSchema
        .validate(&FormInput::new().with("description", "new text"))
        .unwrap();
    assert_eq!(out.name, None);
    assert_eq!(out.description.as_deref(), Some("new text"));
}
