//! Design tokens for Tidemark
//!
//! Spacing, typography, and radius scales shared by every themed style
//! sheet. Tokens are theme-independent; only colors vary between light and
//! dark.

/// Spacing scale in pixels, 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const XS: f64 = 4.0;
    /// 8px - Small
    pub const SM: f64 = 8.0;
    /// 12px - Medium
    pub const MD: f64 = 12.0;
    /// 16px - Large
    pub const LG: f64 = 16.0;
    /// 24px - Extra large
    pub const XL: f64 = 24.0;
    /// 32px - 2x large
    pub const XXL: f64 = 32.0;

    /// Get a spacing value by name
    pub fn get(name: &str) -> Option<f64> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            _ => None,
        }
    }
}

/// Font size scale in pixels
pub mod typography {
    /// Caption text (12px)
    pub const CAPTION: f64 = 12.0;
    /// Body text (14px)
    pub const BODY: f64 = 14.0;
    /// Large body text (16px)
    pub const BODY_LARGE: f64 = 16.0;
    /// Title text (18px)
    pub const TITLE: f64 = 18.0;
    /// Display text (24px)
    pub const DISPLAY: f64 = 24.0;

    /// Get a font size by name
    pub fn get(name: &str) -> Option<f64> {
        match name {
            "caption" => Some(CAPTION),
            "body" => Some(BODY),
            "bodyLarge" => Some(BODY_LARGE),
            "title" => Some(TITLE),
            "display" => Some(DISPLAY),
            _ => None,
        }
    }
}

/// Heading sizes by level
pub mod heading {
    /// h1 (32px)
    pub const H1: f64 = 32.0;
    /// h2 (24px)
    pub const H2: f64 = 24.0;
    /// h3 (20px)
    pub const H3: f64 = 20.0;
    /// h4 (16px)
    pub const H4: f64 = 16.0;
}

/// Border radius tokens
pub mod radius {
    /// Small radius (8px), inputs and buttons
    pub const SM: f64 = 8.0;
    /// Medium radius (12px), cards
    pub const MD: f64 = 12.0;
    /// Full/round radius (9999px), badges and avatars
    pub const FULL: f64 = 9999.0;
}
