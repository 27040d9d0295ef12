//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, navigation,
//! clocks) from component logic to improve reuse and testability.

pub mod navigation;
pub mod storage;
pub mod time;
