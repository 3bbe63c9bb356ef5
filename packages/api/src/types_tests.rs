#![cfg(test)]

use crate::types::{FormFields, RelayReply};
use serde_json::json;

#[test]
fn form_fields_serialize_as_flat_object() {
    let fields: FormFields = [("name", "A"), ("email", "b@x.com")].into_iter().collect();
    let body = serde_json::to_string(&fields).unwrap();
    assert_eq!(body, r#"{"name":"A","email":"b@x.com"}"#);
    assert_eq!(fields.to_json(), json!({"name": "A", "email": "b@x.com"}));
}

#[test]
fn form_fields_last_value_wins() {
    let mut fields = FormFields::new();
    fields.insert("topic", "first");
    fields.insert("topic", "second");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields.get("topic"), Some("second"));
}

#[test]
fn only_200_is_accepted() {
    let reply = |status| RelayReply {
        status,
        body: json!({"success": status == 200, "message": "x"}),
    };
    assert!(reply(200).is_accepted());
    assert!(!reply(201).is_accepted());
    assert!(!reply(500).is_accepted());
    assert_eq!(reply(500).message(), Some("x"));
}
