//! Signed-in user state

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl User {
    /// Create a user, deriving the display name from the email's local part
    /// when no name is given
    pub fn from_email(name: &str, email: impl Into<String>) -> Self {
        let email = email.into();
        let name = if name.is_empty() {
            display_name_from_email(&email).to_string()
        } else {
            name.to_string()
        };
        Self { name, email }
    }
}

/// The local part of an email address, used as a fallback display name
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Cloneable handle to the current session
///
/// Signed out is the absence of a user. Login and signup handlers write
/// here; the screen host reads it when seeding auth state into documents.
#[derive(Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<Option<User>>>,
}

impl SessionState {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a user in, replacing any current user
    pub fn sign_in(&self, user: User) {
        *self.inner.write() = Some(user);
    }

    /// Sign out
    pub fn sign_out(&self) {
        *self.inner.write() = None;
    }

    /// The current user, if signed in
    pub fn current(&self) -> Option<User> {
        self.inner.read().clone()
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.inner.read().is_some()
    }
}
