//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget shell and the conversation panel. Each
//! mounted instance owns its own signals; nothing is shared through context,
//! so several tags on one page never observe each other.

pub mod chat_options;
pub mod chat_widget;
pub mod conversation_view;
pub mod icons;
pub mod message_content;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
