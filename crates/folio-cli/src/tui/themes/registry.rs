//! Theme registry for discovering and accessing themes

use super::Theme;
use std::collections::HashMap;

/// Name of the theme used when a lookup misses
pub const DEFAULT_THEME: &str = "folio";

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
        };

        use super::definitions::*;

        registry.register(folio());
        registry.register(terminal());
        registry.register(nord());
        registry.register(dracula());
        registry.register(tokyo_night());
        registry.register(gruvbox_dark());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        match self.get(name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme = name, "Unknown theme, using default");
                &self.themes[DEFAULT_THEME]
            }
        }
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_registered_first() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.list()[0].0, DEFAULT_THEME);
        assert_eq!(registry.count(), registry.list().len());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("nope").name, DEFAULT_THEME);
        assert_eq!(registry.get_or_default("nord").name, "nord");
        assert!(registry.get("nope").is_none());
    }
}
