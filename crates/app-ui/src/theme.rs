//! Theme definitions and the live theme handle
//!
//! Two themes, light and dark, each a fixed color set over the shared token
//! scales. Theme instances are process-wide singletons behind `Arc`, which
//! is what the style cache keys its memoization on: pointer equality means
//! "same theme as last render".

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "light"),
            ThemeName::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Semantic colors for a theme, as hex strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Screen background
    pub background: String,
    /// Card and elevated surface background
    pub surface: String,
    /// Secondary surface (input fields, default badges)
    pub surface_secondary: String,
    /// Primary text
    pub text: String,
    /// Secondary/muted text
    pub text_secondary: String,
    /// Tertiary text (placeholders, chevrons)
    pub text_tertiary: String,
    /// Border color
    pub border: String,
    /// Accent/action color
    pub accent: String,
    /// Success color
    pub success: String,
    /// Error/danger color
    pub error: String,
    /// Warning color
    pub warning: String,
    /// Shadow color
    pub shadow: String,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic colors
    pub colors: ThemeColors,
    /// Whether this is a dark theme
    #[serde(rename = "isDark")]
    pub is_dark: bool,
}

/// The light theme singleton
pub fn light() -> Arc<Theme> {
    static LIGHT: OnceLock<Arc<Theme>> = OnceLock::new();
    Arc::clone(LIGHT.get_or_init(|| {
        Arc::new(Theme {
            name: ThemeName::Light,
            colors: ThemeColors {
                background: "#f5f5f5".to_string(),
                surface: "#ffffff".to_string(),
                surface_secondary: "#fafafa".to_string(),
                text: "#333333".to_string(),
                text_secondary: "#888888".to_string(),
                text_tertiary: "#999999".to_string(),
                border: "#dddddd".to_string(),
                accent: "#2196F3".to_string(),
                success: "#4CAF50".to_string(),
                error: "#F44336".to_string(),
                warning: "#FF9800".to_string(),
                shadow: "#000000".to_string(),
            },
            is_dark: false,
        })
    }))
}

/// The dark theme singleton
pub fn dark() -> Arc<Theme> {
    static DARK: OnceLock<Arc<Theme>> = OnceLock::new();
    Arc::clone(DARK.get_or_init(|| {
        Arc::new(Theme {
            name: ThemeName::Dark,
            colors: ThemeColors {
                background: "#121212".to_string(),
                surface: "#1e1e1e".to_string(),
                surface_secondary: "#2a2a2a".to_string(),
                text: "#e0e0e0".to_string(),
                text_secondary: "#aaaaaa".to_string(),
                text_tertiary: "#777777".to_string(),
                border: "#333333".to_string(),
                accent: "#64B5F6".to_string(),
                success: "#81C784".to_string(),
                error: "#E57373".to_string(),
                warning: "#FFB74D".to_string(),
                shadow: "#000000".to_string(),
            },
            is_dark: true,
        })
    }))
}

/// Get a theme singleton by name
pub fn theme_for(name: ThemeName) -> Arc<Theme> {
    match name {
        ThemeName::Light => light(),
        ThemeName::Dark => dark(),
    }
}

/// Cloneable handle to the currently active theme
///
/// The screen host flips this when the document's dark-mode state changes;
/// the registry reads it at the top of every render pass.
#[derive(Clone)]
pub struct ThemeState {
    inner: Arc<RwLock<Arc<Theme>>>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeState {
    /// Create a handle starting on the given theme
    pub fn new(name: ThemeName) -> Self {
        Self {
            inner: Arc::new(RwLock::new(theme_for(name))),
        }
    }

    /// The currently active theme
    pub fn current(&self) -> Arc<Theme> {
        Arc::clone(&self.inner.read())
    }

    /// Switch to the named theme
    pub fn set(&self, name: ThemeName) {
        *self.inner.write() = theme_for(name);
    }

    /// Switch between light and dark
    pub fn set_dark(&self, dark: bool) {
        self.set(if dark { ThemeName::Dark } else { ThemeName::Light });
    }

    /// Flip the current theme
    pub fn toggle(&self) {
        let next = !self.is_dark();
        self.set_dark(next);
    }

    /// Whether the active theme is dark
    pub fn is_dark(&self) -> bool {
        self.inner.read().is_dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Theme Name Tests
    // ==========================================================================

    #[test]
    fn test_theme_name_round_trip() {
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!("DARK".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert!("dim".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::Dark.to_string(), "dark");
    }

    #[test]
    fn test_theme_name_serialization() {
        assert_eq!(serde_json::to_string(&ThemeName::Dark).unwrap(), "\"dark\"");
    }

    // ==========================================================================
    // Theme Tests
    // ==========================================================================

    #[test]
    fn test_light_theme_colors() {
        let theme = light();
        assert!(!theme.is_dark);
        assert_eq!(theme.colors.background, "#f5f5f5");
        assert_eq!(theme.colors.accent, "#2196F3");
        assert_eq!(theme.colors.error, "#F44336");
    }

    #[test]
    fn test_dark_theme_colors() {
        let theme = dark();
        assert!(theme.is_dark);
        assert_eq!(theme.colors.background, "#121212");
        assert_eq!(theme.colors.surface, "#1e1e1e");
        assert_eq!(theme.colors.accent, "#64B5F6");
    }

    #[test]
    fn test_singletons_are_pointer_stable() {
        assert!(Arc::ptr_eq(&light(), &light()));
        assert!(Arc::ptr_eq(&dark(), &dark()));
        assert!(!Arc::ptr_eq(&light(), &dark()));
    }

    // ==========================================================================
    // Theme State Tests
    // ==========================================================================

    #[test]
    fn test_theme_state_defaults_to_light() {
        let state = ThemeState::default();
        assert!(!state.is_dark());
        assert!(Arc::ptr_eq(&state.current(), &light()));
    }

    #[test]
    fn test_theme_state_set_dark() {
        let state = ThemeState::default();
        state.set_dark(true);
        assert!(state.is_dark());
        state.set_dark(false);
        assert!(!state.is_dark());
    }

    #[test]
    fn test_theme_state_toggle() {
        let state = ThemeState::new(ThemeName::Dark);
        state.toggle();
        assert!(!state.is_dark());
        state.toggle();
        assert!(state.is_dark());
    }

    #[test]
    fn test_clones_share_state() {
        let state = ThemeState::default();
        let other = state.clone();
        state.set_dark(true);
        assert!(other.is_dark());
    }
}
