//! Utility helpers shared across the widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and browser concerns from component
//! logic to improve reuse and testability.

pub mod form;
pub mod poll;
pub mod preview;
