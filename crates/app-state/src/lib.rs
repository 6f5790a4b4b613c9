//! Application state for Tidemark
//!
//! The non-visual half of the app: who is signed in, where navigation goes,
//! which alerts are pending, and the action-handler table that spec events
//! dispatch into. Handlers validate their params and silently no-op on
//! anything malformed, so a bad spec binding can never take a screen down.
//!
//! # Modules
//!
//! - [`session`] - Signed-in user state
//! - [`navigation`] - The navigator seam screens route through
//! - [`alerts`] - Pending alert queue
//! - [`actions`] - The action-handler table

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
pub mod alerts;
pub mod navigation;
pub mod session;

pub use actions::{ActionContext, ActionError, ActionHandler, ActionHandlers, Params};
pub use alerts::{Alert, AlertQueue};
pub use navigation::Navigator;
pub use session::{SessionState, User};
