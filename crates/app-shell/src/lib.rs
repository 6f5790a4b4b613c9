//! Screen shell for Tidemark
//!
//! Hosts a spec document on a screen: seeds state, mirrors the dark-mode
//! flag into the process theme, routes emitted events into the action table,
//! and fences render panics behind an error surface. Also home to the
//! hand-authored screen documents themselves.
//!
//! # Modules
//!
//! - [`screen`] - Per-screen safe-area and background configuration
//! - [`host`] - The screen host that mounts and drives a document
//! - [`specs`] - The application's screen documents

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod host;
pub mod screen;
pub mod specs;

pub use host::{HostOptions, ScreenHost};
pub use screen::{screen_config, Edge, ScreenConfig, ScreenType};
