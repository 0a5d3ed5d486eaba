//! App State Components
//!
//! Centralized state management for the TUI.
//! Groups related state into logical modules.

mod focus;
mod layout;
mod scroll;

pub use focus::{FormFocus, FormSlot};
pub use layout::LayoutState;
pub use scroll::{LayoutCache, ScrollState};
