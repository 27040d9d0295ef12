use leptos::prelude::*;

use super::chat_options::ChatOptions;
use super::chat_widget::{ChatWidget, ShellHeader};
use super::conversation_view::ConversationView;
use super::message_content::MessageContent;
use crate::model::message::{Card, CarouselCard, MessageBody, MessageButton, SuggestionChip};
use crate::state::menu::MENU_OPTIONS;

fn render<V: IntoView>(f: impl FnOnce() -> V) -> String {
    Owner::new().with(|| f().to_html())
}

/// Markup of the first element opened with `open_tag`, up to `close_tag`.
fn element<'a>(html: &'a str, open_tag: &str, close_tag: &str) -> &'a str {
    let start = html.find(open_tag).unwrap_or_else(|| panic!("no {open_tag} in {html}"));
    let rest = &html[start..];
    &rest[..rest.find(close_tag).unwrap_or(rest.len())]
}

fn content(body: MessageBody) -> String {
    render(move || {
        view! {
            <MessageContent body=body on_button=Callback::new(|_: MessageButton| {}) on_chip=Callback::new(|_: SuggestionChip| {}) />
        }
    })
}

fn card(title: &str, buttons: Vec<MessageButton>) -> Card {
    Card {
        title: title.to_owned(),
        subtitle: Some("Subtitle".to_owned()),
        image_url: None,
        buttons,
    }
}

// =============================================================
// Message bodies
// =============================================================

#[test]
fn card_renders_title_and_buttons() {
    let html = content(MessageBody::Card(card(
        "Live Chat",
        vec![
            MessageButton::postback("b1", "Learn More", "learn_more"),
            MessageButton::url("b2", "Try Now", "https://example.com/try"),
        ],
    )));
    assert!(html.contains("message-card"));
    assert!(html.contains("Live Chat"));
    assert!(html.contains("Learn More"));
    assert!(html.contains("Try Now"));
}

#[test]
fn carousel_renders_every_card() {
    let cards = ["one", "two", "three"]
        .into_iter()
        .map(|id| CarouselCard {
            id: id.to_owned(),
            card: card(&format!("Card {id}"), vec![MessageButton::postback(format!("{id}-b"), "Explore", id)]),
        })
        .collect();
    let html = content(MessageBody::Carousel { cards });
    assert!(html.contains("message-carousel"));
    assert_eq!(html.matches("data-card-id").count(), 3);
    assert!(html.contains("Card two"));
    assert_eq!(html.matches("Explore").count(), 3);
}

#[test]
fn chips_render_as_buttons() {
    let html = content(MessageBody::SuggestionChips {
        text: Some("Pick one".to_owned()),
        chips: vec![
            SuggestionChip::new("c1", "Pricing", "pricing"),
            SuggestionChip::new("c2", "Support", "support"),
        ],
    });
    assert!(html.contains("Pick one"));
    assert_eq!(html.matches("suggestion-chip\"").count(), 2);
    assert!(html.contains("Pricing"));
    assert!(html.contains("Support"));
}

// =============================================================
// Shell
// =============================================================

#[test]
fn header_shows_title_and_subtitle() {
    let html = render(|| view! { <ShellHeader title="Need help?".to_owned() subtitle="We reply fast".to_owned() /> });
    assert!(html.contains("chat-widget__title"));
    assert!(html.contains("Need help?"));
    assert!(html.contains("We reply fast"));
    assert!(html.contains("chat-widget__logo-img"));
}

#[test]
fn menu_renders_four_rows() {
    let html = render(|| view! { <ChatOptions on_select=Callback::new(|_| {}) /> });
    assert_eq!(html.matches("chat-option__title").count(), 4);
    for option in MENU_OPTIONS {
        assert!(html.contains(option.title), "missing row {}", option.title);
    }
    assert_eq!(html.matches("chat-option--inert").count(), 3);
}

#[test]
fn shell_starts_collapsed() {
    let html = render(|| view! { <ChatWidget title="Hidden title".to_owned() /> });
    assert!(html.contains("chat-widget__toggle"));
    assert!(html.contains("Open chat"));
    assert!(!html.contains("class=\"chat-widget__container\""));
    assert!(!html.contains("Hidden title"));
}

// =============================================================
// Conversation
// =============================================================

#[test]
fn conversation_renders_demo_transcript() {
    let html = render(|| view! { <ConversationView conversation_title="Support".to_owned() /> });
    assert!(element(&html, "<h3 class=\"conversation__title\"", "</h3>").contains("Support"));
    assert!(html.contains("Today"));
    assert_eq!(html.matches("data-message-id").count(), 6);
    for label in ["Book Demo", "Learn More", "Try Now", "Getting Started", "Knowledge Base"] {
        assert!(html.contains(label), "missing {label}");
    }
    assert!(!html.contains("aria-label=\"Back\""));
}

#[test]
fn conversation_defaults_to_chatwoot_title() {
    let html = render(|| view! { <ConversationView /> });
    assert!(element(&html, "<h3 class=\"conversation__title\"", "</h3>").contains("Chatwoot"));
}
