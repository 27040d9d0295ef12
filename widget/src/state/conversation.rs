//! Conversation transcript and draft input.
//!
//! DESIGN
//! ======
//! The transcript is append-only: handlers push to the end and never edit or
//! remove. Each handler returns what the view must do next (notify the parent,
//! open a URL) instead of performing side effects itself, keeping browser
//! calls in the component layer.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use chrono::{DateTime, Utc};

use crate::model::message::{
    ButtonAction, Message, MessageButton, MessageError, SuggestionChip, validate_transcript,
};
use crate::model::seed::demo_script;

/// What the view should do after a message button click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonOutcome {
    /// Open this URL in a new browsing context; the transcript is untouched.
    Navigate(String),
    /// The label was appended as a user message; notify the parent with it.
    Posted(String),
}

/// Result of a key press in the input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a send key; let the browser handle it.
    Ignored,
    /// Enter without Shift: suppress the default, and notify with the sent
    /// text when the draft was non-empty.
    Submitted(Option<String>),
}

impl KeyOutcome {
    /// Whether the browser's default handling must be suppressed.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Transcript plus draft for one conversation view.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    draft: String,
}

impl ConversationState {
    /// Start from a seed transcript.
    ///
    /// # Errors
    ///
    /// Returns a [`MessageError`] when any message is invalid or ids repeat.
    pub fn from_transcript(messages: Vec<Message>) -> Result<Self, MessageError> {
        validate_transcript(&messages)?;
        Ok(Self {
            messages,
            draft: String::new(),
        })
    }

    /// Start from the demo script. An invalid script logs and yields an empty
    /// transcript.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self::from_transcript(demo_script(now)).unwrap_or_else(|err| {
            log::error!("demo transcript rejected: {err}");
            Self::default()
        })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    fn append_user_text(&mut self, text: &str, now: DateTime<Utc>) {
        self.messages.push(Message::user_text(text, now));
    }

    /// Send the trimmed draft. Whitespace-only drafts are dropped and left
    /// as they are.
    pub fn send_message(&mut self, now: DateTime<Utc>) -> Option<String> {
        let text = self.draft.trim().to_owned();
        if text.is_empty() {
            return None;
        }
        self.append_user_text(&text, now);
        self.draft.clear();
        Some(text)
    }

    pub fn handle_button_click(&mut self, button: &MessageButton, now: DateTime<Utc>) -> ButtonOutcome {
        match button.action {
            ButtonAction::Url => ButtonOutcome::Navigate(button.value.clone()),
            ButtonAction::Postback => {
                self.append_user_text(&button.label, now);
                ButtonOutcome::Posted(button.label.clone())
            }
        }
    }

    /// Chips always post their label.
    pub fn handle_chip_click(&mut self, chip: &SuggestionChip, now: DateTime<Utc>) -> String {
        self.append_user_text(&chip.label, now);
        chip.label.clone()
    }

    /// Enter without Shift, outside an IME composition. An Enter that
    /// confirms a composed character belongs to the input method.
    #[must_use]
    pub fn is_send_key(key: &str, shift: bool, composing: bool) -> bool {
        key == "Enter" && !shift && !composing
    }

    pub fn handle_key(&mut self, key: &str, shift: bool, composing: bool, now: DateTime<Utc>) -> KeyOutcome {
        if !Self::is_send_key(key, shift, composing) {
            return KeyOutcome::Ignored;
        }
        KeyOutcome::Submitted(self.send_message(now))
    }
}
