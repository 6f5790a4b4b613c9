//! Navigation seam
//!
//! Spec actions name screens by route string; what "navigating" means is the
//! platform shell's business. The trait keeps handlers testable without a
//! real router behind them.

use serde_json::{Map, Value};

/// Receives navigation requests from action handlers
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Push the named screen, with optional route params
    fn navigate(&self, screen: &str, params: Option<Map<String, Value>>);

    /// Pop back to the previous screen
    fn go_back(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_navigator_records_route() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|screen, params| screen == "/order/[id]" && params.is_some())
            .times(1)
            .return_const(());

        let params = Map::from_iter([("id".to_string(), Value::from("1234"))]);
        navigator.navigate("/order/[id]", Some(params));
    }
}
