//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from session, router,
//! and page logic to improve reuse and testability.

pub mod navigation;
pub mod storage;
