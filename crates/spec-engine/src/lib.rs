//! Rendering-engine contract for Tidemark
//!
//! The generic spec interpreter the rest of the workspace treats as a fixed
//! external collaborator: it owns the state store and its subscription model,
//! resolves deferred expressions, drives visibility and repeat instantiation,
//! and walks the document handing each node to a component resolver. Nothing
//! in here knows about themes, concrete components, or action semantics —
//! those live behind the [`render::ComponentResolver`] seam and the
//! action-handler table downstream.
//!
//! # Modules
//!
//! - [`store`] - Path-addressed state store with change listeners and the
//!   two-way binding primitive
//! - [`resolve`] - Expression resolution and predicate evaluation
//! - [`render`] - The render driver and the abstract output tree

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod render;
pub mod resolve;
pub mod store;

pub use render::{
    ComponentResolver, Emitter, EventBinding, EventSink, RenderContext, RenderNode, Renderer,
};
pub use resolve::{eval_predicate, resolve_params, resolve_props, resolve_value, Scope};
pub use store::{StateBinding, StateStore};
