//! The profile editing screen

use serde_json::json;
use spec_core::builders::{
    form_group_elements, header_with_back_elements, FormFieldOptions, FormGroupOptions,
    HeaderOptions, KeyboardType,
};
use spec_core::{state_object, PropValue, Result, ScreenSpec, Spec, UiElement};
use std::collections::BTreeMap;

/// Avatar plus a form that confirms the save with an alert
pub fn profile_spec() -> Result<Spec> {
    let header = header_with_back_elements(HeaderOptions {
        title: "profile".into(),
        subtitle: None,
        key: None,
    })?;

    let mut body = form_group_elements(FormGroupOptions {
        key: "profileForm".into(),
        fields: vec![
            FormFieldOptions {
                key: "nameField".into(),
                label: "name".into(),
                placeholder: "your name".into(),
                state_path: "/profileName".into(),
                keyboard_type: None,
                secure_text_entry: false,
            },
            FormFieldOptions {
                key: "emailField".into(),
                label: "email".into(),
                placeholder: "your email".into(),
                state_path: "/profileEmail".into(),
                keyboard_type: Some(KeyboardType::EmailAddress),
                secure_text_entry: false,
            },
            FormFieldOptions {
                key: "bioField".into(),
                label: "bio".into(),
                placeholder: "tell us about yourself".into(),
                state_path: "/profileBio".into(),
                keyboard_type: None,
                secure_text_entry: false,
            },
        ],
        submit_label: "save changes".into(),
        submit_action: "showAlert".into(),
        submit_params: BTreeMap::from([
            ("title".to_string(), PropValue::lit("saved")),
            (
                "message".to_string(),
                PropValue::lit("your profile has been updated"),
            ),
        ]),
    })?;

    body.insert(
        "avatarSection",
        UiElement::new("Container")
            .prop("padding", 16i64)
            .child("avatarRow"),
    )?;
    body.insert(
        "avatarRow",
        UiElement::new("Row")
            .prop("justifyContent", "center")
            .child("avatar"),
    )?;
    body.insert(
        "avatar",
        UiElement::new("Avatar")
            .prop("initials", "U")
            .prop("size", "xl"),
    )?;
    body.insert("divider1", UiElement::new("Divider").prop("margin", 8i64))?;

    ScreenSpec::new()
        .state(state_object(json!({
            "profileName": "",
            "profileEmail": "",
            "profileBio": "",
        })))
        .header("header", header)
        .body(body, ["avatarSection", "divider1", "profileForm"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_button_present() {
        let spec = profile_spec().unwrap();
        assert_eq!(spec.elements["headerBackBtn"].on["press"].action, "goBack");
    }

    #[test]
    fn test_save_shows_alert() {
        let spec = profile_spec().unwrap();
        let submit = &spec.elements["profileFormSubmit"].on["press"];
        assert_eq!(submit.action, "showAlert");
        assert_eq!(submit.params["title"], PropValue::lit("saved"));
    }
}
