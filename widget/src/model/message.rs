//! Transcript message types and construction-time validation.
//!
//! DESIGN
//! ======
//! The serde shape mirrors the JSON the widget was designed around: an internal
//! `"type"` tag plus camelCase fields. Validation runs when data enters a
//! transcript, never at click time, so handlers can trust every button and chip
//! they are given.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error returned when message data violates the transcript invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    /// A message was constructed without an id.
    #[error("message id must not be empty")]
    EmptyId,
    /// Two messages in one transcript share an id.
    #[error("duplicate message id: {0}")]
    DuplicateId(String),
    /// A button action string was neither `postback` nor `url`.
    #[error("unknown button action: {0}")]
    UnknownAction(String),
    /// A button is missing its id or label.
    #[error("button in message {message_id} is missing an id or label")]
    IncompleteButton { message_id: String },
    /// A `url` button does not carry an absolute http(s) URL.
    #[error("button {button_id} has invalid url: {value}")]
    InvalidUrl { button_id: String, value: String },
    /// A message kind that needs children (buttons, cards, chips) has none.
    #[error("{kind} message {message_id} has no {what}")]
    Empty {
        kind: MessageKind,
        message_id: String,
        what: &'static str,
    },
    /// A carousel card is missing its id.
    #[error("carousel card in message {message_id} is missing an id")]
    CardWithoutId { message_id: String },
    /// A suggestion chip is missing its id or label.
    #[error("chip in message {message_id} is missing an id or label")]
    IncompleteChip { message_id: String },
}

/// What a message button does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    /// Emit the button label into the transcript as a user message.
    Postback,
    /// Open the button value in a new browsing context.
    Url,
}

impl ButtonAction {
    /// Wire name of the action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postback => "postback",
            Self::Url => "url",
        }
    }
}

impl FromStr for ButtonAction {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postback" => Ok(Self::Postback),
            "url" => Ok(Self::Url),
            other => Err(MessageError::UnknownAction(other.to_owned())),
        }
    }
}

/// A clickable button attached to a text, card, or carousel message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageButton {
    pub id: String,
    pub label: String,
    pub action: ButtonAction,
    /// Postback payload, or the target URL for `url` buttons.
    pub value: String,
}

impl MessageButton {
    pub fn postback(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action: ButtonAction::Postback,
            value: value.into(),
        }
    }

    pub fn url(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action: ButtonAction::Url,
            value: url.into(),
        }
    }

    fn validate(&self, message_id: &str) -> Result<(), MessageError> {
        if self.id.is_empty() || self.label.trim().is_empty() {
            return Err(MessageError::IncompleteButton {
                message_id: message_id.to_owned(),
            });
        }
        if self.action == ButtonAction::Url && !is_http_url(&self.value) {
            return Err(MessageError::InvalidUrl {
                button_id: self.id.clone(),
                value: self.value.clone(),
            });
        }
        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty() && !host.starts_with('/'))
}

/// Card payload shared by `card` messages and carousel entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<MessageButton>,
}

/// One entry of a carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselCard {
    pub id: String,
    #[serde(flatten)]
    pub card: Card,
}

/// A quick-reply chip. Clicking always posts the label; chips never navigate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionChip {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl SuggestionChip {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Discriminant of [`MessageBody`], used for diagnostics and styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Text,
    TextWithButton,
    Card,
    Carousel,
    SuggestionChips,
}

impl MessageKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextWithButton => "text_with_button",
            Self::Card => "card",
            Self::Carousel => "carousel",
            Self::SuggestionChips => "suggestion_chips",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific message payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum MessageBody {
    Text {
        text: String,
    },
    TextWithButton {
        text: String,
        buttons: Vec<MessageButton>,
    },
    Card(Card),
    Carousel {
        cards: Vec<CarouselCard>,
    },
    SuggestionChips {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        chips: Vec<SuggestionChip>,
    },
}

impl MessageBody {
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Text { .. } => MessageKind::Text,
            Self::TextWithButton { .. } => MessageKind::TextWithButton,
            Self::Card(_) => MessageKind::Card,
            Self::Carousel { .. } => MessageKind::Carousel,
            Self::SuggestionChips { .. } => MessageKind::SuggestionChips,
        }
    }

    /// Every button carried by this body, in display order.
    pub fn buttons(&self) -> Vec<&MessageButton> {
        match self {
            Self::Text { .. } | Self::SuggestionChips { .. } => Vec::new(),
            Self::TextWithButton { buttons, .. } => buttons.iter().collect(),
            Self::Card(card) => card.buttons.iter().collect(),
            Self::Carousel { cards } => cards.iter().flat_map(|c| c.card.buttons.iter()).collect(),
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub is_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(flatten)]
    pub body: MessageBody,
}

impl Message {
    /// A plain text message authored by the local user, with a fresh id.
    pub fn user_text(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            is_user: true,
            sender: None,
            body: MessageBody::Text { text: text.into() },
        }
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    /// Check the per-message invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`MessageError`] found.
    pub fn validate(&self) -> Result<(), MessageError> {
        if self.id.is_empty() {
            return Err(MessageError::EmptyId);
        }
        let empty = |what: &'static str| MessageError::Empty {
            kind: self.kind(),
            message_id: self.id.clone(),
            what,
        };
        match &self.body {
            MessageBody::Text { .. } | MessageBody::Card(_) => {}
            MessageBody::TextWithButton { buttons, .. } => {
                if buttons.is_empty() {
                    return Err(empty("buttons"));
                }
            }
            MessageBody::Carousel { cards } => {
                if cards.is_empty() {
                    return Err(empty("cards"));
                }
                if cards.iter().any(|c| c.id.is_empty()) {
                    return Err(MessageError::CardWithoutId {
                        message_id: self.id.clone(),
                    });
                }
            }
            MessageBody::SuggestionChips { chips, .. } => {
                if chips.is_empty() {
                    return Err(empty("chips"));
                }
                if chips.iter().any(|c| c.id.is_empty() || c.label.trim().is_empty()) {
                    return Err(MessageError::IncompleteChip {
                        message_id: self.id.clone(),
                    });
                }
            }
        }
        for button in self.body.buttons() {
            button.validate(&self.id)?;
        }
        Ok(())
    }
}

/// Validate a batch of messages and the id-uniqueness invariant across it.
///
/// # Errors
///
/// Returns the first invalid message's error, or
/// [`MessageError::DuplicateId`] when two messages share an id.
pub fn validate_transcript(messages: &[Message]) -> Result<(), MessageError> {
    let mut seen = HashSet::with_capacity(messages.len());
    for message in messages {
        message.validate()?;
        if !seen.insert(message.id.as_str()) {
            return Err(MessageError::DuplicateId(message.id.clone()));
        }
    }
    Ok(())
}
