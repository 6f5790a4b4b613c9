//! End-to-end auth flow
//!
//! Drives the real login and signup documents through the screen host:
//! typing fills state, submit resolves deferred params against that state
//! and dispatches into the session.

use std::sync::Arc;

use app_shell::specs::{login_spec, signup_spec};
use app_shell::{HostOptions, ScreenHost, ScreenType};
use app_state::{Navigator, SessionState};
use parking_lot::Mutex;
use serde_json::{json, Map, Value};
use spec_engine::EventBinding;

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, screen: &str, _params: Option<Map<String, Value>>) {
        self.routes.lock().push(screen.to_string());
    }
    fn go_back(&self) {}
}

fn press(element: &str) -> EventBinding {
    EventBinding {
        element: element.to_string(),
        event: "press".to_string(),
        index: None,
    }
}

#[tokio::test]
async fn test_login_submit_signs_in_from_typed_state() {
    let session = SessionState::new();
    let host = ScreenHost::mount(
        login_spec().unwrap(),
        ScreenType::Auth,
        HostOptions::new(Arc::new(RecordingNavigator::default())).session(session.clone()),
    );

    // Simulate typing into the bound fields.
    host.store().set("/email", json!("jane@example.com"));
    host.store().set("/password", json!("hunter2"));

    host.emit(&press("loginFormSubmit")).await;

    let user = session.current().expect("signed in");
    assert_eq!(user.name, "jane");
    assert_eq!(user.email, "jane@example.com");

    session.sign_out();
    assert!(!session.is_signed_in());
}

#[tokio::test]
async fn test_login_with_empty_email_is_rejected() {
    let session = SessionState::new();
    let host = ScreenHost::mount(
        login_spec().unwrap(),
        ScreenType::Auth,
        HostOptions::new(Arc::new(RecordingNavigator::default())).session(session.clone()),
    );

    // Nothing typed; the deferred email param resolves to "".
    host.emit(&press("loginFormSubmit")).await;
    assert!(!session.is_signed_in());
}

#[tokio::test]
async fn test_signup_falls_back_to_email_local_part() {
    let session = SessionState::new();
    let host = ScreenHost::mount(
        signup_spec().unwrap(),
        ScreenType::Auth,
        HostOptions::new(Arc::new(RecordingNavigator::default())).session(session.clone()),
    );

    host.store().set("/email", json!("sam@example.com"));
    host.emit(&press("signupFormSubmit")).await;
    assert_eq!(session.current().expect("signed in").name, "sam");
}

#[tokio::test]
async fn test_auth_screens_cross_navigate() {
    let navigator = Arc::new(RecordingNavigator::default());
    let host = ScreenHost::mount(
        login_spec().unwrap(),
        ScreenType::Auth,
        HostOptions::new(navigator.clone()),
    );

    host.emit(&press("signupLinkBtn")).await;
    assert_eq!(navigator.routes.lock().as_slice(), ["/(auth)/signup"]);
}
