use super::*;

use crate::model::message::{MessageKind, validate_transcript};

#[test]
fn demo_script_has_six_valid_messages() {
    let script = demo_script(Utc::now());
    assert_eq!(script.len(), 6);
    assert_eq!(validate_transcript(&script), Ok(()));
}

#[test]
fn demo_script_covers_every_message_kind() {
    let kinds: Vec<MessageKind> = demo_script(Utc::now()).iter().map(Message::kind).collect();
    assert_eq!(
        kinds,
        [
            MessageKind::Text,
            MessageKind::Text,
            MessageKind::SuggestionChips,
            MessageKind::TextWithButton,
            MessageKind::Card,
            MessageKind::Carousel,
        ]
    );
}

#[test]
fn demo_script_is_oldest_first_and_before_now() {
    let now = Utc::now();
    let script = demo_script(now);
    assert!(script.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert_eq!(script[5].timestamp, now - Duration::seconds(60));
}

#[test]
fn demo_script_is_all_bot_messages() {
    assert!(demo_script(Utc::now()).iter().all(|m| !m.is_user && m.sender.is_some()));
}

#[test]
fn card_message_carries_try_now_url() {
    let script = demo_script(Utc::now());
    let MessageBody::Card(card) = &script[4].body else {
        panic!("expected card");
    };
    let try_now = card.buttons.iter().find(|b| b.label == "Try Now").unwrap();
    assert_eq!(try_now.value, TRY_NOW_URL);
}
