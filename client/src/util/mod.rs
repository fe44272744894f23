//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! dialogs) from page and component logic so the logic runs in plain tests.

pub mod clock;
pub mod dialog;
pub mod storage;
