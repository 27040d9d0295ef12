//! Fixed demo script the conversation view opens with.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use chrono::{DateTime, Duration, Utc};

use super::message::{Card, CarouselCard, Message, MessageBody, MessageButton, SuggestionChip};

const AWAY_SENDER: &str = "Chatwoot";
const ASSISTANT_SENDER: &str = "Chatwoot Assistant";

/// Demo URL opened by the "Book Demo" button.
pub const BOOK_DEMO_URL: &str = "https://chatwoot.com/demo";
/// Demo URL opened by the card's "Try Now" button.
pub const TRY_NOW_URL: &str = "https://chatwoot.com/try";

fn bot(id: &str, sender: &str, timestamp: DateTime<Utc>, body: MessageBody) -> Message {
    Message {
        id: id.to_owned(),
        timestamp,
        is_user: false,
        sender: Some(sender.to_owned()),
        body,
    }
}

fn carousel_card(id: &str, title: &str, subtitle: &str, image_url: &str, button: MessageButton) -> CarouselCard {
    CarouselCard {
        id: id.to_owned(),
        card: Card {
            title: title.to_owned(),
            subtitle: Some(subtitle.to_owned()),
            image_url: Some(image_url.to_owned()),
            buttons: vec![button],
        },
    }
}

/// Build the six-message demo transcript, timestamped relative to `now`.
pub fn demo_script(now: DateTime<Utc>) -> Vec<Message> {
    let ago = |seconds: i64| now - Duration::seconds(seconds);

    vec![
        bot(
            "1",
            AWAY_SENDER,
            ago(300),
            MessageBody::Text {
                text: "Thank you for reaching out! We are currently away. We will get back to you as soon as we are back."
                    .to_owned(),
            },
        ),
        bot(
            "2",
            ASSISTANT_SENDER,
            ago(240),
            MessageBody::Text {
                text: "Hi there! I'm Chatwoot Assistant. How can I help you with Chatwoot today?".to_owned(),
            },
        ),
        bot(
            "3",
            ASSISTANT_SENDER,
            ago(180),
            MessageBody::SuggestionChips {
                text: Some("Here are some common topics I can help you with:".to_owned()),
                chips: vec![
                    SuggestionChip::new("chip1", "Getting Started", "getting_started"),
                    SuggestionChip::new("chip2", "Pricing", "pricing"),
                    SuggestionChip::new("chip3", "Features", "features"),
                    SuggestionChip::new("chip4", "Support", "support"),
                ],
            },
        ),
        bot(
            "4",
            ASSISTANT_SENDER,
            ago(120),
            MessageBody::TextWithButton {
                text: "Would you like to explore our main features or get a demo?".to_owned(),
                buttons: vec![
                    MessageButton::postback("btn1", "View Features", "show_features"),
                    MessageButton::url("btn2", "Book Demo", BOOK_DEMO_URL),
                ],
            },
        ),
        bot(
            "5",
            ASSISTANT_SENDER,
            ago(90),
            MessageBody::Card(Card {
                title: "Chatwoot Live Chat".to_owned(),
                subtitle: Some(
                    "Connect with your customers in real-time with our powerful live chat platform. \
                     Get instant notifications and respond quickly."
                        .to_owned(),
                ),
                image_url: Some(
                    "https://images.unsplash.com/photo-1553484771-371a605b060b?w=350&h=200&fit=crop&crop=center"
                        .to_owned(),
                ),
                buttons: vec![
                    MessageButton::postback("card_btn1", "Learn More", "learn_more"),
                    MessageButton::url("card_btn2", "Try Now", TRY_NOW_URL),
                ],
            }),
        ),
        bot(
            "6",
            ASSISTANT_SENDER,
            ago(60),
            MessageBody::Carousel {
                cards: vec![
                    carousel_card(
                        "carousel1",
                        "Live Chat",
                        "Real-time customer support with instant messaging",
                        "https://images.unsplash.com/photo-1556761175-b413da4baf72?w=280&h=160&fit=crop&crop=center",
                        MessageButton::postback("c1_btn1", "Learn More", "live_chat_details"),
                    ),
                    carousel_card(
                        "carousel2",
                        "Help Desk",
                        "Complete ticket management and customer support system",
                        "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=280&h=160&fit=crop&crop=center",
                        MessageButton::postback("c2_btn1", "View Features", "helpdesk_details"),
                    ),
                    carousel_card(
                        "carousel3",
                        "Knowledge Base",
                        "Self-service articles and documentation for customers",
                        "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=280&h=160&fit=crop&crop=center",
                        MessageButton::postback("c3_btn1", "Explore", "kb_details"),
                    ),
                ],
            },
        ),
    ]
}
