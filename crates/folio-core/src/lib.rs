//! Folio Core - Shared library for the terminal portfolio
//!
//! This crate provides everything that is not terminal rendering:
//! - Active section tracking for scroll-synchronized navigation
//! - Typed portfolio content loaded from TOML
//! - The simulated contact form
//! - Config file and directory handling

pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod error;
pub mod nav;
pub mod paths;

// Re-exports for convenience
pub use config::FolioConfig;
pub use contact::{ContactEvent, ContactField, ContactForm, SubmitState};
pub use content::{Portfolio, SectionKind};
pub use error::{ContactError, ContentError, NavError};
pub use nav::{scroll_progress, ActiveSectionTracker, Section, TrackerConfig};
