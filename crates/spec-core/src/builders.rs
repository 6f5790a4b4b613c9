//! Reusable fragment builders
//!
//! Pure functions that each produce a fragment from a small options record.
//! Builders derive internal sub-keys by concatenating a caller-supplied
//! prefix with a fixed suffix (`{key}Title`, `{key}Submit`, ...), so two
//! invocations with different prefixes never collide. Builders never check
//! that referenced child keys exist; that is the engine's concern at
//! resolution time.

use serde::{Deserialize, Serialize};

use crate::element::{ActionBinding, UiElement};
use crate::error::Result;
use crate::fragment::Fragment;
use crate::value::PropValue;
use std::collections::BTreeMap;

/// Default key for header fragments
const DEFAULT_HEADER_KEY: &str = "header";

// =============================================================================
// Headers
// =============================================================================

/// Options for [`header_elements`]
#[derive(Debug, Clone, Default)]
pub struct HeaderOptions {
    /// Header title text
    pub title: String,
    /// Optional subtitle line
    pub subtitle: Option<String>,
    /// Key prefix; defaults to `header`
    pub key: Option<String>,
}

/// A padded container holding a title heading and an optional subtitle.
pub fn header_elements(options: HeaderOptions) -> Result<Fragment> {
    let prefix = options.key.unwrap_or_else(|| DEFAULT_HEADER_KEY.to_string());
    let title_key = format!("{prefix}Title");
    let subtitle_key = format!("{prefix}Subtitle");

    let mut container = UiElement::new("Container")
        .prop("padding", 16i64)
        .child(&title_key);
    if options.subtitle.is_some() {
        container = container.child(&subtitle_key);
    }

    let mut fragment = Fragment::new();
    fragment.insert(&prefix, container)?;
    fragment.insert(
        &title_key,
        UiElement::new("Heading")
            .prop("text", options.title)
            .prop("level", "h1"),
    )?;
    if let Some(subtitle) = options.subtitle {
        fragment.insert(
            &subtitle_key,
            UiElement::new("Paragraph").prop("text", subtitle),
        )?;
    }
    Ok(fragment)
}

/// A header with a back button wired to the `goBack` action.
pub fn header_with_back_elements(options: HeaderOptions) -> Result<Fragment> {
    let prefix = options.key.unwrap_or_else(|| DEFAULT_HEADER_KEY.to_string());
    let back_key = format!("{prefix}BackBtn");
    let title_key = format!("{prefix}Title");

    let mut fragment = Fragment::new();
    fragment.insert(
        &prefix,
        UiElement::new("Container")
            .prop("padding", 16i64)
            .children([back_key.as_str(), title_key.as_str()]),
    )?;
    fragment.insert(
        &back_key,
        UiElement::new("Button")
            .prop("label", "← back")
            .prop("variant", "ghost")
            .prop("size", "sm")
            .on("press", ActionBinding::new("goBack")),
    )?;
    fragment.insert(
        &title_key,
        UiElement::new("Heading")
            .prop("text", options.title)
            .prop("level", "h1"),
    )?;
    Ok(fragment)
}

// =============================================================================
// Sections
// =============================================================================

/// Options for [`section_elements`]
#[derive(Debug, Clone, Default)]
pub struct SectionOptions {
    /// Key of the section container
    pub key: String,
    /// Section header title
    pub title: String,
    /// Keys of the section's content elements, in order
    pub children: Vec<String>,
}

/// A padded container whose first child is a `SectionHeader`, followed by
/// the caller's content keys.
pub fn section_elements(options: SectionOptions) -> Result<Fragment> {
    let header_key = format!("{}Header", options.key);

    let mut children = vec![header_key.clone()];
    children.extend(options.children);

    let mut fragment = Fragment::new();
    fragment.insert(
        &options.key,
        UiElement::new("Container")
            .prop("padding", 16i64)
            .children(children),
    )?;
    fragment.insert(
        &header_key,
        UiElement::new("SectionHeader").prop("title", options.title),
    )?;
    Ok(fragment)
}

// =============================================================================
// Forms
// =============================================================================

/// Soft keyboard hint for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    /// Standard keyboard
    #[default]
    Default,
    /// Email entry (shows `@` and `.`)
    EmailAddress,
    /// Digits only
    Numeric,
    /// Phone pad
    PhonePad,
}

/// Options for a single form field
#[derive(Debug, Clone, Default)]
pub struct FormFieldOptions {
    /// Element key
    pub key: String,
    /// Field label
    pub label: String,
    /// Placeholder text
    pub placeholder: String,
    /// State path the field binds to; `/`-prefixed (e.g. `/email`)
    pub state_path: String,
    /// Keyboard hint
    pub keyboard_type: Option<KeyboardType>,
    /// Obscure the entered text
    pub secure_text_entry: bool,
}

/// A single `FormField` element.
pub fn form_field_element(options: FormFieldOptions) -> Result<Fragment> {
    let keyboard = options.keyboard_type.unwrap_or_default();
    let keyboard = serde_json::to_value(keyboard).unwrap_or_default();

    let mut fragment = Fragment::new();
    fragment.insert(
        &options.key,
        UiElement::new("FormField")
            .prop("label", options.label)
            .prop("placeholder", options.placeholder)
            .prop("statePath", options.state_path)
            .prop("keyboardType", keyboard)
            .prop("secureTextEntry", options.secure_text_entry),
    )?;
    Ok(fragment)
}

/// Options for [`form_group_elements`]
#[derive(Debug, Clone, Default)]
pub struct FormGroupOptions {
    /// Key of the enclosing column
    pub key: String,
    /// The fields, in order
    pub fields: Vec<FormFieldOptions>,
    /// Label of the submit button
    pub submit_label: String,
    /// Action dispatched on submit
    pub submit_action: String,
    /// Params for the submit action; values may be deferred expressions
    pub submit_params: BTreeMap<String, PropValue>,
}

/// A column of form fields followed by a `{key}Submit` button bound to the
/// submit action.
pub fn form_group_elements(options: FormGroupOptions) -> Result<Fragment> {
    let submit_key = format!("{}Submit", options.key);
    let mut column_children: Vec<String> =
        options.fields.iter().map(|f| f.key.clone()).collect();
    column_children.push(submit_key.clone());

    let mut fragment = Fragment::new();
    fragment.insert(
        &options.key,
        UiElement::new("Column")
            .prop("gap", 12i64)
            .prop("padding", 16i64)
            .children(column_children),
    )?;

    let mut submit = ActionBinding::new(options.submit_action);
    submit.params = options.submit_params;
    fragment.insert(
        &submit_key,
        UiElement::new("Button")
            .prop("label", options.submit_label)
            .prop("variant", "primary")
            .prop("size", "lg")
            .on("press", submit),
    )?;

    for field in options.fields {
        fragment.merge(form_field_element(field)?)?;
    }
    Ok(fragment)
}
