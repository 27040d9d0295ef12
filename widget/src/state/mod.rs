//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split by surface (`widget` shell, `conversation` transcript,
//! `menu` options) so components depend on small focused models that are
//! testable without a browser.

pub mod conversation;
pub mod menu;
pub mod widget;
