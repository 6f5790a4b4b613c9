//! Pending alert queue
//!
//! The `showAlert` action queues here instead of talking to a platform
//! dialog API directly; the shell drains the queue and presents however it
//! likes. Tests read the queue to assert an alert was requested.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A requested alert dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Dialog title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Dialog body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Cloneable queue of alerts awaiting presentation
#[derive(Clone, Default)]
pub struct AlertQueue {
    inner: Arc<Mutex<Vec<Alert>>>,
}

impl AlertQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an alert
    pub fn push(&self, alert: Alert) {
        self.inner.lock().push(alert);
    }

    /// Take all pending alerts
    pub fn drain(&self) -> Vec<Alert> {
        std::mem::take(&mut *self.inner.lock())
    }

    /// Number of pending alerts
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain() {
        let queue = AlertQueue::new();
        queue.push(Alert {
            title: Some("hello!".to_string()),
            message: None,
        });
        assert_eq!(queue.len(), 1);

        let drained = queue.drain();
        assert_eq!(drained[0].title.as_deref(), Some("hello!"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clones_share_queue() {
        let queue = AlertQueue::new();
        queue.clone().push(Alert::default());
        assert_eq!(queue.len(), 1);
    }
}
