//! Floating shell state: expanded/collapsed, active view, keep-alive guard.
//!
//! DESIGN
//! ======
//! Transitions are plain methods on a plain-field struct so the shell
//! component can drive them through `RwSignal::try_update` and tests can drive
//! them directly. Every transition returns the snapshot to persist, or `None`
//! while persistence is still suppressed. Nothing is written before the first
//! genuine user interaction of the page load.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::util::storage::PersistedWidget;

/// Period of the keep-alive re-assertion.
pub const KEEP_ALIVE_INTERVAL_MS: u32 = 1_000;

/// Which panel the expanded shell shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    /// Header plus support options.
    #[default]
    Menu,
    /// Transcript and input.
    Conversation,
}

impl ActiveView {
    /// Persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Conversation => "conversation",
        }
    }

    /// Parse the persisted string form; anything else is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "menu" => Some(Self::Menu),
            "conversation" => Some(Self::Conversation),
            _ => None,
        }
    }
}

/// Shell state for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetState {
    pub expanded: bool,
    pub active_view: ActiveView,
    /// Set when the user collapsed the widget; disarms the keep-alive.
    pub user_initiated_close: bool,
    /// True until the first user interaction of this page load.
    pub is_first_load: bool,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            expanded: false,
            active_view: ActiveView::Menu,
            user_initiated_close: false,
            is_first_load: true,
        }
    }
}

impl WidgetState {
    /// Start from a previously persisted snapshot. Still counts as first load:
    /// no writes and no keep-alive until the user acts.
    #[must_use]
    pub fn restored(snapshot: PersistedWidget) -> Self {
        Self {
            expanded: snapshot.expanded,
            active_view: snapshot.view,
            ..Self::default()
        }
    }

    fn snapshot(&self) -> Option<PersistedWidget> {
        if self.is_first_load {
            return None;
        }
        Some(PersistedWidget {
            expanded: self.expanded,
            view: self.active_view,
        })
    }

    /// Toggle button handler. Opening always lands on the menu.
    pub fn toggle_expand(&mut self) -> Option<PersistedWidget> {
        let expanded = !self.expanded;
        self.expanded = expanded;
        self.user_initiated_close = !expanded;
        self.is_first_load = false;
        if expanded {
            self.active_view = ActiveView::Menu;
        }
        self.snapshot()
    }

    /// Menu option / back button handler.
    pub fn select_view(&mut self, view: ActiveView) -> Option<PersistedWidget> {
        self.active_view = view;
        self.is_first_load = false;
        self.snapshot()
    }

    /// Whether the keep-alive interval should be running.
    #[must_use]
    pub fn keep_alive_armed(&self) -> bool {
        self.expanded && !self.user_initiated_close && !self.is_first_load
    }

    /// One keep-alive tick: re-assert `expanded` unless the user closed it.
    pub fn keep_alive_tick(&mut self) -> Option<PersistedWidget> {
        if self.user_initiated_close || self.is_first_load {
            return None;
        }
        self.expanded = true;
        self.snapshot()
    }

    /// Snapshot to flush when the page is being hidden or unloaded.
    #[must_use]
    pub fn page_hide_snapshot(&self) -> Option<PersistedWidget> {
        if !self.keep_alive_armed() {
            return None;
        }
        Some(PersistedWidget {
            expanded: true,
            view: self.active_view,
        })
    }

    /// The tab became visible again: re-assert and re-persist the expanded
    /// state under the keep-alive guard.
    pub fn visibility_regained(&mut self) -> Option<PersistedWidget> {
        if !self.keep_alive_armed() {
            return None;
        }
        self.expanded = true;
        self.snapshot()
    }
}
