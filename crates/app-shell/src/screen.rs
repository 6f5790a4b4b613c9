//! Per-screen chrome configuration
//!
//! Each screen category gets a safe-area edge list and a background color
//! drawn from the active theme. Auth, detail and playground screens sit on
//! the surface color so cards and form fields blend in; list-style screens
//! sit on the page background.

use app_ui::Theme;
use serde::{Deserialize, Serialize};

/// Screen category, selecting chrome configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenType {
    /// Login and signup
    Auth,
    /// The home overview tab
    Dashboard,
    /// The settings tab
    Settings,
    /// Pushed detail screens
    Detail,
    /// The interactive playground tab
    Playground,
}

/// A safe-area edge the screen insets from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Status-bar edge
    Top,
    /// Home-indicator edge
    Bottom,
    /// Left notch edge
    Left,
    /// Right notch edge
    Right,
}

/// Resolved chrome for one screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Edges the screen insets from
    pub edges: &'static [Edge],
    /// Background color behind the document
    pub background_color: String,
}

impl ScreenType {
    /// Safe-area edges for this screen category.
    ///
    /// Tab screens leave the bottom edge to the tab bar; full-screen
    /// categories inset both ends.
    pub fn edges(self) -> &'static [Edge] {
        match self {
            ScreenType::Auth | ScreenType::Playground => &[Edge::Top, Edge::Bottom],
            ScreenType::Dashboard | ScreenType::Settings | ScreenType::Detail => &[Edge::Top],
        }
    }

    fn uses_surface(self) -> bool {
        matches!(
            self,
            ScreenType::Auth | ScreenType::Detail | ScreenType::Playground
        )
    }
}

/// Chrome for a screen category under the given theme
pub fn screen_config(screen: ScreenType, theme: &Theme) -> ScreenConfig {
    let background_color = if screen.uses_surface() {
        theme.colors.surface.clone()
    } else {
        theme.colors.background.clone()
    };
    ScreenConfig {
        edges: screen.edges(),
        background_color,
    }
}
