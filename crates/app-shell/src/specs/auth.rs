//! Login and signup screens

use serde_json::json;
use spec_core::builders::{
    form_group_elements, header_elements, FormFieldOptions, FormGroupOptions, HeaderOptions,
    KeyboardType,
};
use spec_core::{
    state_object, ActionBinding, Fragment, PropValue, Result, ScreenSpec, Spec, UiElement,
};
use std::collections::BTreeMap;

fn email_field(placeholder: &str) -> FormFieldOptions {
    FormFieldOptions {
        key: "emailField".into(),
        label: "email".into(),
        placeholder: placeholder.into(),
        state_path: "/email".into(),
        keyboard_type: Some(KeyboardType::EmailAddress),
        secure_text_entry: false,
    }
}

fn password_field(placeholder: &str) -> FormFieldOptions {
    FormFieldOptions {
        key: "passwordField".into(),
        label: "password".into(),
        placeholder: placeholder.into(),
        state_path: "/password".into(),
        keyboard_type: None,
        secure_text_entry: true,
    }
}

fn link_button(key: &str, label: &str, screen: &str) -> Result<Fragment> {
    let button_key = format!("{key}Btn");
    let mut fragment = Fragment::new();
    fragment.insert(
        key,
        UiElement::new("Container")
            .prop("padding", 16i64)
            .child(&button_key),
    )?;
    fragment.insert(
        &button_key,
        UiElement::new("Button")
            .prop("label", label)
            .prop("variant", "ghost")
            .on("press", ActionBinding::new("navigate").param("screen", screen)),
    )?;
    Ok(fragment)
}

/// Email and password form submitting the `login` action
pub fn login_spec() -> Result<Spec> {
    let header = header_elements(HeaderOptions {
        title: "welcome back".into(),
        subtitle: Some("sign in to continue".into()),
        key: None,
    })?;

    let mut body = form_group_elements(FormGroupOptions {
        key: "loginForm".into(),
        fields: vec![
            email_field("enter your email"),
            password_field("enter your password"),
        ],
        submit_label: "log in".into(),
        submit_action: "login".into(),
        submit_params: BTreeMap::from([
            ("email".to_string(), PropValue::path("/email")),
            ("password".to_string(), PropValue::path("/password")),
        ]),
    })?;
    body.merge(link_button(
        "signupLink",
        "don't have an account? sign up",
        "/(auth)/signup",
    )?)?;

    ScreenSpec::new()
        .state(state_object(json!({ "email": "", "password": "" })))
        .header("header", header)
        .body(body, ["loginForm", "signupLink"])
        .build()
}

/// Name, email and password form submitting the `signup` action
pub fn signup_spec() -> Result<Spec> {
    let header = header_elements(HeaderOptions {
        title: "create account".into(),
        subtitle: Some("get started with your new account".into()),
        key: None,
    })?;

    let mut body = form_group_elements(FormGroupOptions {
        key: "signupForm".into(),
        fields: vec![
            FormFieldOptions {
                key: "nameField".into(),
                label: "name".into(),
                placeholder: "enter your name".into(),
                state_path: "/name".into(),
                keyboard_type: None,
                secure_text_entry: false,
            },
            email_field("enter your email"),
            password_field("choose a password"),
        ],
        submit_label: "sign up".into(),
        submit_action: "signup".into(),
        submit_params: BTreeMap::from([
            ("name".to_string(), PropValue::path("/name")),
            ("email".to_string(), PropValue::path("/email")),
            ("password".to_string(), PropValue::path("/password")),
        ]),
    })?;
    body.merge(link_button(
        "loginLink",
        "already have an account? log in",
        "/(auth)/login",
    )?)?;

    ScreenSpec::new()
        .state(state_object(json!({ "name": "", "email": "", "password": "" })))
        .header("header", header)
        .body(body, ["signupForm", "loginLink"])
        .build()
}
