//! Color themes

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::{ThemeRegistry, DEFAULT_THEME};

/// Global theme registry
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A complete color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    /// Page background
    pub bg_color: Color,
    /// Body text
    pub text_color: Color,
    /// Secondary text, hints, inactive links
    pub dim_color: Color,
    /// Primary highlight (active link, headings)
    pub accent_color: Color,
    /// Second highlight color (gradient end, badges)
    pub secondary_color: Color,
    /// Section titles and the owner's name
    pub title_color: Color,
    /// Borders around cards and form fields
    pub border_color: Color,

    pub success_color: Color,
    pub error_color: Color,
    pub warning_color: Color,

    /// Navigation bar background once the page has scrolled
    pub nav_solid_bg_color: Color,
    pub status_bar_bg_color: Color,
    pub scrollbar_bg_color: Color,
}
