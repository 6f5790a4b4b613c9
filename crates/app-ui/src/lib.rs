//! Component library and design system for Tidemark
//!
//! Everything visual lives here: the design tokens, the light and dark
//! themes, the themed style sheets with their per-theme memoization, and the
//! typed component registry the render engine calls through. Components are
//! registered under the type tag spec documents reference, validate their
//! resolved props against a typed schema, and render to the engine's
//! abstract node tree.
//!
//! # Modules
//!
//! - [`tokens`] - Spacing, typography, and radius scales
//! - [`theme`] - Theme definitions and the live theme handle
//! - [`styles`] - Themed style sheets and the memoizing cache
//! - [`registry`] - Typed component registration and lookup
//! - [`components`] - The standard component set

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod registry;
pub mod styles;
pub mod theme;
pub mod tokens;

pub use components::standard_registry;
pub use registry::Registry;
pub use styles::{Style, StyleCache, StyleSheet};
pub use theme::{dark, light, theme_for, Theme, ThemeColors, ThemeName, ThemeState};
