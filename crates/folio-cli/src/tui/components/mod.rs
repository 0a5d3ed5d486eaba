//! UI components for Folio
//!
//! Reusable rendering components: navbar, status bar, scrollbar, toasts.

pub mod navbar;
pub mod scrollbars;
pub mod status_bar;
pub mod toast;

pub use navbar::{logo_text, render_navbar, NavbarView, NAVBAR_HEIGHT};
pub use scrollbars::render_page_scrollbar;
pub use status_bar::{render_status_bar, StatusInfo};
pub use toast::{render_toasts, Toast, ToastQueue};
