//! End-to-end settings screen flow
//!
//! Mounts the real settings document and exercises the dark-mode mirror and
//! the logout action through the screen host.

use std::sync::Arc;

use app_shell::specs::settings_spec;
use app_shell::{HostOptions, ScreenHost, ScreenType};
use app_state::{Navigator, SessionState, User};
use app_ui::ThemeState;
use serde_json::{json, Map, Value};
use spec_engine::EventBinding;

struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _screen: &str, _params: Option<Map<String, Value>>) {}
    fn go_back(&self) {}
}

fn mount(theme: ThemeState, session: SessionState) -> ScreenHost {
    ScreenHost::mount(
        settings_spec().unwrap(),
        ScreenType::Settings,
        HostOptions::new(Arc::new(NoopNavigator))
            .theme(theme)
            .session(session),
    )
}

#[test]
fn test_dark_mode_toggle_flips_theme_and_nothing_else() {
    let theme = ThemeState::default();
    let host = mount(theme.clone(), SessionState::new());

    assert!(!theme.is_dark());
    assert_eq!(host.store().get("/notifications"), Some(json!(true)));

    // The dark-mode switch writes its bound path.
    host.store().set("/darkMode", json!(true));
    assert!(theme.is_dark());
    assert_eq!(host.store().get("/notifications"), Some(json!(true)));

    host.store().set("/darkMode", json!(false));
    assert!(!theme.is_dark());
}

#[test]
fn test_screen_background_follows_theme() {
    let theme = ThemeState::default();
    let host = mount(theme.clone(), SessionState::new());

    let light_background = host.config().background_color;
    host.store().set("/darkMode", json!(true));
    let dark_background = host.config().background_color;
    assert_ne!(light_background, dark_background);
}

#[test]
fn test_settings_rows_render_with_switches() {
    let host = mount(ThemeState::default(), SessionState::new());
    let tree = host.render();

    let dark_row = tree.find("darkModeRow").expect("dark mode row renders");
    let mut switches = Vec::new();
    dark_row.find_kind("switch", &mut switches);
    assert_eq!(switches.len(), 1);

    assert!(tree.find("notifRow").is_some());
    assert!(tree.find("logoutBtn").is_some());
}

#[tokio::test]
async fn test_logout_button_signs_out() {
    let session = SessionState::new();
    session.sign_in(User::from_email("", "jane@example.com"));
    let host = mount(ThemeState::default(), session.clone());

    host.emit(&EventBinding {
        element: "logoutBtn".to_string(),
        event: "press".to_string(),
        index: None,
    })
    .await;

    assert!(!session.is_signed_in());
}
