use super::*;

use chrono::TimeZone;

// =============================================================
// Helpers
// =============================================================

fn ts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

fn bot(id: &str, body: MessageBody) -> Message {
    Message {
        id: id.to_owned(),
        timestamp: ts(),
        is_user: false,
        sender: Some("Assistant".to_owned()),
        body,
    }
}

fn text(id: &str, text: &str) -> Message {
    bot(id, MessageBody::Text { text: text.to_owned() })
}

// =============================================================
// ButtonAction
// =============================================================

#[test]
fn button_action_parses_known_values() {
    assert_eq!("postback".parse::<ButtonAction>(), Ok(ButtonAction::Postback));
    assert_eq!("url".parse::<ButtonAction>(), Ok(ButtonAction::Url));
}

#[test]
fn button_action_rejects_unknown_values() {
    assert_eq!(
        "navigate".parse::<ButtonAction>(),
        Err(MessageError::UnknownAction("navigate".to_owned()))
    );
    assert!("URL".parse::<ButtonAction>().is_err());
}

#[test]
fn button_action_deserialize_rejects_unknown_action() {
    let raw = r#"{"id":"b1","label":"Go","action":"download","value":"x"}"#;
    assert!(serde_json::from_str::<MessageButton>(raw).is_err());
}

#[test]
fn button_action_as_str_matches_wire_name() {
    assert_eq!(ButtonAction::Postback.as_str(), "postback");
    assert_eq!(ButtonAction::Url.as_str(), "url");
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn message_deserializes_tagged_card_with_camel_case_fields() {
    let raw = r#"{
        "id": "5",
        "type": "card",
        "title": "Live Chat",
        "imageUrl": "https://example.com/a.png",
        "buttons": [
            {"id": "b1", "label": "Learn More", "action": "postback", "value": "learn_more"}
        ],
        "isUser": false,
        "sender": "Bot",
        "timestamp": "2024-05-01T09:30:00Z"
    }"#;
    let msg: Message = serde_json::from_str(raw).unwrap();
    assert_eq!(msg.kind(), MessageKind::Card);
    assert_eq!(msg.timestamp, ts());
    let MessageBody::Card(card) = &msg.body else {
        panic!("expected card body");
    };
    assert_eq!(card.title, "Live Chat");
    assert_eq!(card.subtitle, None);
    assert_eq!(card.image_url.as_deref(), Some("https://example.com/a.png"));
    assert_eq!(card.buttons.len(), 1);
}

#[test]
fn message_serializes_type_tag_and_is_user() {
    let msg = Message::user_text("hello", ts());
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["type"], "text");
    assert_eq!(value["text"], "hello");
    assert_eq!(value["isUser"], true);
    assert!(value.get("sender").is_none());
}

#[test]
fn suggestion_chips_text_is_optional() {
    let raw = r#"{
        "id": "3",
        "type": "suggestion_chips",
        "chips": [{"id": "c1", "label": "Pricing", "value": "pricing"}],
        "isUser": false,
        "timestamp": "2024-05-01T09:30:00Z"
    }"#;
    let msg: Message = serde_json::from_str(raw).unwrap();
    assert_eq!(
        msg.body,
        MessageBody::SuggestionChips {
            text: None,
            chips: vec![SuggestionChip::new("c1", "Pricing", "pricing")],
        }
    );
}

#[test]
fn unknown_message_type_is_rejected() {
    let raw = r#"{"id":"9","type":"video","isUser":false,"timestamp":"2024-05-01T09:30:00Z"}"#;
    assert!(serde_json::from_str::<Message>(raw).is_err());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn user_text_gets_unique_ids() {
    let a = Message::user_text("a", ts());
    let b = Message::user_text("a", ts());
    assert_ne!(a.id, b.id);
    assert!(a.is_user);
    assert_eq!(a.validate(), Ok(()));
}

#[test]
fn validate_rejects_empty_id() {
    assert_eq!(text("", "hi").validate(), Err(MessageError::EmptyId));
}

#[test]
fn validate_rejects_text_with_no_buttons() {
    let msg = bot(
        "4",
        MessageBody::TextWithButton {
            text: "Pick one".to_owned(),
            buttons: Vec::new(),
        },
    );
    assert!(matches!(
        msg.validate(),
        Err(MessageError::Empty { kind: MessageKind::TextWithButton, what: "buttons", .. })
    ));
}

#[test]
fn validate_rejects_url_button_without_http_url() {
    let msg = bot(
        "4",
        MessageBody::TextWithButton {
            text: "Pick one".to_owned(),
            buttons: vec![MessageButton::url("b2", "Book Demo", "javascript:alert(1)")],
        },
    );
    assert_eq!(
        msg.validate(),
        Err(MessageError::InvalidUrl {
            button_id: "b2".to_owned(),
            value: "javascript:alert(1)".to_owned(),
        })
    );
}

#[test]
fn validate_accepts_postback_value_that_is_not_a_url() {
    let msg = bot(
        "4",
        MessageBody::TextWithButton {
            text: "Pick one".to_owned(),
            buttons: vec![MessageButton::postback("b1", "View Features", "show_features")],
        },
    );
    assert_eq!(msg.validate(), Ok(()));
}

#[test]
fn validate_rejects_blank_button_label() {
    let msg = bot(
        "5",
        MessageBody::Card(Card {
            title: "Card".to_owned(),
            buttons: vec![MessageButton::postback("b1", "  ", "x")],
            ..Card::default()
        }),
    );
    assert_eq!(
        msg.validate(),
        Err(MessageError::IncompleteButton {
            message_id: "5".to_owned()
        })
    );
}

#[test]
fn validate_checks_buttons_inside_carousel_cards() {
    let msg = bot(
        "6",
        MessageBody::Carousel {
            cards: vec![CarouselCard {
                id: "c1".to_owned(),
                card: Card {
                    title: "Help Desk".to_owned(),
                    buttons: vec![MessageButton::url("b", "Open", "ftp://example.com")],
                    ..Card::default()
                },
            }],
        },
    );
    assert!(matches!(msg.validate(), Err(MessageError::InvalidUrl { .. })));
}

#[test]
fn validate_rejects_empty_carousel_and_card_without_id() {
    let empty = bot("6", MessageBody::Carousel { cards: Vec::new() });
    assert!(matches!(empty.validate(), Err(MessageError::Empty { what: "cards", .. })));

    let unnamed = bot(
        "6",
        MessageBody::Carousel {
            cards: vec![CarouselCard {
                id: String::new(),
                card: Card {
                    title: "x".to_owned(),
                    ..Card::default()
                },
            }],
        },
    );
    assert!(matches!(unnamed.validate(), Err(MessageError::CardWithoutId { .. })));
}

#[test]
fn validate_rejects_empty_chips_and_blank_chip() {
    let empty = bot(
        "3",
        MessageBody::SuggestionChips {
            text: None,
            chips: Vec::new(),
        },
    );
    assert!(matches!(empty.validate(), Err(MessageError::Empty { what: "chips", .. })));

    let blank = bot(
        "3",
        MessageBody::SuggestionChips {
            text: None,
            chips: vec![SuggestionChip::new("c1", "", "v")],
        },
    );
    assert!(matches!(blank.validate(), Err(MessageError::IncompleteChip { .. })));
}

#[test]
fn validate_transcript_rejects_duplicate_ids() {
    let messages = vec![text("1", "a"), text("2", "b"), text("1", "c")];
    assert_eq!(
        validate_transcript(&messages),
        Err(MessageError::DuplicateId("1".to_owned()))
    );
}

#[test]
fn validate_transcript_accepts_distinct_ids() {
    let messages = vec![text("1", "a"), text("2", "b")];
    assert_eq!(validate_transcript(&messages), Ok(()));
}

// =============================================================
// Buttons
// =============================================================

#[test]
fn body_buttons_collects_in_display_order() {
    let body = MessageBody::Carousel {
        cards: vec![
            CarouselCard {
                id: "c1".to_owned(),
                card: Card {
                    title: "One".to_owned(),
                    buttons: vec![MessageButton::postback("a", "A", "a")],
                    ..Card::default()
                },
            },
            CarouselCard {
                id: "c2".to_owned(),
                card: Card {
                    title: "Two".to_owned(),
                    buttons: vec![
                        MessageButton::postback("b", "B", "b"),
                        MessageButton::url("c", "C", "https://example.com"),
                    ],
                    ..Card::default()
                },
            },
        ],
    };
    let ids: Vec<&str> = body.buttons().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn text_body_has_no_buttons() {
    assert!(MessageBody::Text { text: "x".to_owned() }.buttons().is_empty());
}
