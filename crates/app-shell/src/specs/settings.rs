//! The settings screen

use serde_json::json;
use spec_core::builders::{header_elements, section_elements, HeaderOptions, SectionOptions};
use spec_core::{state_object, ActionBinding, Fragment, Result, ScreenSpec, Spec, UiElement};

/// Preferences and account sections plus the log-out button.
///
/// The dark-mode row writes `/darkMode`, which the screen host mirrors into
/// the process theme.
pub fn settings_spec() -> Result<Spec> {
    let header = header_elements(HeaderOptions {
        title: "settings".into(),
        subtitle: None,
        key: None,
    })?;

    let mut body = Fragment::new();
    body.merge(section_elements(SectionOptions {
        key: "prefsSection".into(),
        title: "preferences".into(),
        children: vec!["notifRow".into(), "darkModeRow".into()],
    })?)?;
    body.insert(
        "notifRow",
        UiElement::new("SettingsRow")
            .prop("label", "notifications")
            .prop("description", "receive push notifications")
            .prop("trailingType", "switch")
            .prop("statePath", "/notifications"),
    )?;
    body.insert(
        "darkModeRow",
        UiElement::new("SettingsRow")
            .prop("label", "dark mode")
            .prop("description", "toggle dark theme")
            .prop("trailingType", "switch")
            .prop("statePath", "/darkMode"),
    )?;
    body.insert("divider1", UiElement::new("Divider").prop("margin", 8i64))?;

    body.merge(section_elements(SectionOptions {
        key: "accountSection".into(),
        title: "account".into(),
        children: vec!["profileRow".into(), "securityRow".into()],
    })?)?;
    body.insert(
        "profileRow",
        UiElement::new("SettingsRow")
            .prop("label", "profile")
            .prop("description", "edit your profile")
            .prop("trailingType", "chevron")
            .on(
                "press",
                ActionBinding::new("navigate").param("screen", "/profile"),
            ),
    )?;
    body.insert(
        "securityRow",
        UiElement::new("SettingsRow")
            .prop("label", "security")
            .prop("description", "password and authentication")
            .prop("trailingType", "chevron"),
    )?;
    body.insert("divider2", UiElement::new("Divider").prop("margin", 8i64))?;

    body.insert(
        "logoutContainer",
        UiElement::new("Container")
            .prop("padding", 16i64)
            .child("logoutBtn"),
    )?;
    body.insert(
        "logoutBtn",
        UiElement::new("Button")
            .prop("label", "log out")
            .prop("variant", "danger")
            .on("press", ActionBinding::new("logout")),
    )?;

    ScreenSpec::new()
        .state(state_object(json!({
            "notifications": true,
            "darkMode": false,
        })))
        .header("header", header)
        .body(
            body,
            [
                "prefsSection",
                "divider1",
                "accountSection",
                "divider2",
                "logoutContainer",
            ],
        )
        .build()
}
