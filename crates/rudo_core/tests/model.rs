use rudo_core::{ListName, Task};

#[test]
fn list_name_serializes_as_a_plain_string() {
    let groceries = ListName::parse("groceries").unwrap();

    assert_eq!(
        serde_json::to_value(&groceries).unwrap(),
        serde_json::json!("groceries")
    );
}

#[test]
fn list_name_deserialization_revalidates() {
    let ok: ListName = serde_json::from_value(serde_json::json!("week_32")).unwrap();
    assert_eq!(ok.as_str(), "week_32");

    let err = serde_json::from_value::<ListName>(serde_json::json!("week 32")).unwrap_err();
    assert!(
        err.to_string().contains("only letters"),
        "unexpected error: {err}"
    );
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task {
        id: 2,
        text: "buy eggs".to_string(),
        completed: true,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["text"], "buy eggs");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
