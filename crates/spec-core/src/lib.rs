//! Spec document model for Tidemark
//!
//! This crate defines the declarative screen format: tree-shaped documents of
//! typed UI elements addressed by string keys, with deferred state-bound
//! expressions in their props. Screens are not hand-coded views; they are
//! assembled from reusable fragments and interpreted by the rendering engine.
//!
//! # Modules
//!
//! - [`value`] - Deferred prop values (`$path` / `$cond`) and predicates
//! - [`element`] - Element descriptors and event/repeat bindings
//! - [`document`] - The spec document and structural validation
//! - [`fragment`] - Keyed element collections with collision-safe merging
//! - [`builders`] - Reusable fragment builders (headers, sections, forms)
//! - [`screen`] - The screen assembler (`root → [header?, ...body, footer?]`)
//!
//! # Example
//!
//! ```rust
//! use spec_core::builders::{header_elements, HeaderOptions};
//! use spec_core::screen::ScreenSpec;
//!
//! let header = header_elements(HeaderOptions {
//!     title: "settings".into(),
//!     subtitle: None,
//!     key: None,
//! }).unwrap();
//!
//! let spec = ScreenSpec::new()
//!     .header("header", header)
//!     .build()
//!     .unwrap();
//! assert_eq!(spec.root, "root");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builders;
pub mod document;
pub mod element;
pub mod error;
pub mod fragment;
pub mod screen;
pub mod value;

pub use document::{state_object, Spec};
pub use element::{ActionBinding, RepeatBinding, UiElement};
pub use error::{Result, SpecError};
pub use fragment::Fragment;
pub use screen::{ScreenSpec, ROOT_KEY};
pub use value::{Operand, Predicate, PropValue};
