//! The application's screen documents
//!
//! Each function assembles one screen from the shared builders and returns
//! the finished document. Assembly is fallible by design: a key collision
//! between fragments is a programming error surfaced at startup, not a
//! screen that silently lost elements.

mod auth;
mod dashboard;
mod order_detail;
mod playground;
mod profile;
mod settings;

pub use auth::{login_spec, signup_spec};
pub use dashboard::dashboard_spec;
pub use order_detail::{order_detail_spec, order_state, OrderParams};
pub use playground::playground_spec;
pub use profile::profile_spec;
pub use settings::settings_spec;

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Assembly Tests
    // ==========================================================================

    #[test]
    fn test_every_screen_assembles_and_validates() {
        for spec in [
            dashboard_spec().unwrap(),
            settings_spec().unwrap(),
            login_spec().unwrap(),
            signup_spec().unwrap(),
            profile_spec().unwrap(),
            order_detail_spec().unwrap(),
            playground_spec().unwrap(),
        ] {
            spec.validate().unwrap();
        }
    }

    #[test]
    fn test_screen_documents_round_trip_as_json() {
        let spec = settings_spec().unwrap();
        let wire = serde_json::to_value(&spec).unwrap();
        let back: spec_core::Spec = serde_json::from_value(wire).unwrap();
        assert_eq!(back, spec);
    }
}
