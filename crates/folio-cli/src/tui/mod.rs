//! Terminal User Interface for Folio

pub mod animation;
pub mod app;
pub mod components;
pub mod handlers;
pub mod page;
pub mod state;
pub mod themes;

// Re-exports
pub use app::{terminal_tracker_config, App};
pub use themes::THEME_REGISTRY;
