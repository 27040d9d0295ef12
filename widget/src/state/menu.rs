//! Support options listed in the expanded shell's menu.
//!
//! Only the conversation entry carries an action. The other entries render as
//! complete options but stay inert until they have real destinations.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::state::widget::ActiveView;

/// Icon shown in an option's colored badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Chat,
    Calendar,
    Phone,
    Book,
}

/// One row of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: MenuIcon,
    /// Modifier class selecting the badge color.
    pub accent: &'static str,
    /// Call-to-action text shown before the arrow.
    pub action_text: Option<&'static str>,
    /// View opened on click; `None` renders an inert option.
    pub action: Option<ActiveView>,
}

impl MenuOption {
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.action.is_none()
    }
}

/// The four fixed options, in display order.
pub const MENU_OPTIONS: [MenuOption; 4] = [
    MenuOption {
        title: "Conversations",
        description: "Your conversations",
        icon: MenuIcon::Chat,
        accent: "conversation",
        action_text: Some("New message"),
        action: Some(ActiveView::Conversation),
    },
    MenuOption {
        title: "Schedule a call",
        description: "Can't talk right now? Book a slot directly",
        icon: MenuIcon::Calendar,
        accent: "schedule",
        action_text: None,
        action: None,
    },
    MenuOption {
        title: "Call agent",
        description: "No queues, no fees",
        icon: MenuIcon::Phone,
        accent: "call",
        action_text: None,
        action: None,
    },
    MenuOption {
        title: "Knowledge base",
        description: "Find answers to the most FAQ",
        icon: MenuIcon::Book,
        accent: "knowledge",
        action_text: None,
        action: None,
    },
];
