use super::*;
use crate::messaging::models::{Notification, VibrationPattern, Visibility};
use serde_json::json;

fn message_with(title: Option<&str>, body: Option<&str>) -> RemoteMessage {
    RemoteMessage {
        notification: Some(Notification {
            title: title.map(str::to_string),
            body: body.map(str::to_string),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn test_normalize_keeps_title_and_body() {
    let content = normalize(&message_with(Some("Offer"), Some("50% off")));
    assert_eq!(content.title, "Offer");
    assert_eq!(content.body, "50% off");
}

#[test]
fn test_normalize_missing_title_uses_fallback() {
    let content = normalize(&message_with(None, Some("body")));
    assert_eq!(content.title, DEFAULT_TITLE);
    assert_eq!(content.body, "body");
}

#[test]
fn test_normalize_empty_title_uses_fallback() {
    let content = normalize(&message_with(Some(""), None));
    assert_eq!(content.title, DEFAULT_TITLE);
}

#[test]
fn test_normalize_missing_body_is_empty() {
    let content = normalize(&message_with(Some("Title"), None));
    assert_eq!(content.body, "");
}

#[test]
fn test_normalize_data_only_message() {
    let message = RemoteMessage::from_json(
        &json!({
            "data": { "promo": "X" }
        })
        .to_string(),
    )
    .unwrap();

    assert!(!message.has_notification());

    let content = normalize(&message);
    assert_eq!(content.title, DEFAULT_TITLE);
    assert_eq!(content.body, "");
    assert_eq!(content.tag, None);
    assert_eq!(content.data.get("promo").map(String::as_str), Some("X"));
}

#[test]
fn test_from_json_reads_fcm_fields() {
    let raw = json!({
        "messageId": "m1",
        "from": "276653859682",
        "notification": { "title": "Offer", "body": "50% off" },
        "data": { "screen": "home" }
    })
    .to_string();

    let message = RemoteMessage::from_json(&raw).unwrap();
    assert_eq!(message.message_id.as_deref(), Some("m1"));
    assert_eq!(message.from.as_deref(), Some("276653859682"));

    let content = normalize(&message);
    assert_eq!(content.title, "Offer");
    assert_eq!(content.body, "50% off");
    assert_eq!(content.tag.as_deref(), Some("m1"));
    assert_eq!(content.data.len(), 1);
}

#[test]
fn test_from_json_rejects_malformed_payload() {
    let err = RemoteMessage::from_json("{\"notification\": ").unwrap_err();
    assert!(matches!(err, MessagingError::Payload(_)));
}

#[test]
fn test_enums_use_fcm_names() {
    assert_eq!(serde_json::to_value(Visibility::Public).unwrap(), json!("PUBLIC"));
    assert_eq!(
        serde_json::to_value(crate::messaging::models::NotificationPriority::PriorityMax).unwrap(),
        json!("PRIORITY_MAX")
    );
    assert_eq!(VibrationPattern::alert().timings(), &[0, 250, 250, 250]);
}

#[test]
fn test_normalize_empty_message_id_gives_no_tag() {
    let message = RemoteMessage {
        message_id: Some(String::new()),
        ..message_with(Some("Title"), None)
    };
    assert_eq!(normalize(&message).tag, None);
}

#[test]
fn test_normalize_empty_body_stays_empty() {
    let content = normalize(&message_with(Some("Title"), Some("")));
    assert_eq!(content.title, "Title");
    assert_eq!(content.body, "");
}
