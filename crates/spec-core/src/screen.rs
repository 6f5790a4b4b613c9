//! Screen assembly
//!
//! Every screen has the same canonical shape: a single scrollable root whose
//! children are `[header?, ...body, footer?]` in that order. The assembler
//! merges independently authored fragments into one document and fails on
//! any key collision instead of letting the last writer win.

use serde_json::{Map, Value};

use crate::document::Spec;
use crate::element::UiElement;
use crate::error::Result;
use crate::fragment::Fragment;

/// Key of the synthetic root element every assembled screen gets
pub const ROOT_KEY: &str = "root";

/// Builder for a screen document
///
/// ```rust
/// use spec_core::builders::{header_elements, HeaderOptions};
/// use spec_core::screen::ScreenSpec;
///
/// let header = header_elements(HeaderOptions {
///     title: "dashboard".into(),
///     subtitle: None,
///     key: None,
/// }).unwrap();
///
/// let spec = ScreenSpec::new()
///     .header("header", header)
///     .build()
///     .unwrap();
/// assert_eq!(spec.elements["root"].children, vec!["header"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScreenSpec {
    state: Map<String, Value>,
    header: Option<(String, Fragment)>,
    body: Fragment,
    body_children: Vec<String>,
    footer: Option<(String, Fragment)>,
}

impl ScreenSpec {
    /// Start an empty screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state object, passed through to the document verbatim
    pub fn state(mut self, state: Map<String, Value>) -> Self {
        self.state = state;
        self
    }

    /// Attach a header fragment; `key` is its top-level element
    pub fn header(mut self, key: impl Into<String>, fragment: Fragment) -> Self {
        self.header = Some((key.into(), fragment));
        self
    }

    /// Attach the body fragment with the ordered top-level body keys
    pub fn body<I, S>(mut self, fragment: Fragment, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = fragment;
        self.body_children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a footer fragment; `key` is its top-level element
    pub fn footer(mut self, key: impl Into<String>, fragment: Fragment) -> Self {
        self.footer = Some((key.into(), fragment));
        self
    }

    /// Assemble the document.
    ///
    /// Fails with [`crate::SpecError::DuplicateKey`] if any two fragments
    /// share a key, or if a fragment claims the synthetic `root` key. An
    /// empty body is legal: the root exists and renders no content.
    pub fn build(self) -> Result<Spec> {
        let mut root_children: Vec<String> = Vec::new();
        let mut elements = Fragment::new();

        if let Some((key, fragment)) = self.header {
            root_children.push(key);
            elements.merge(fragment)?;
        }

        root_children.extend(self.body_children);
        elements.merge(self.body)?;

        if let Some((key, fragment)) = self.footer {
            root_children.push(key);
            elements.merge(fragment)?;
        }

        elements.insert(
            ROOT_KEY,
            UiElement::new("ScrollContainer").children(root_children),
        )?;

        Ok(Spec {
            root: ROOT_KEY.to_string(),
            state: self.state,
            elements: elements.into_elements(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{header_elements, section_elements, HeaderOptions, SectionOptions};
    use crate::document::state_object;
    use crate::error::SpecError;
    use serde_json::json;

    fn body_fragment() -> (Fragment, Vec<String>) {
        let mut body = Fragment::new();
        body.insert("intro", UiElement::new("Paragraph").prop("text", "hi"))
            .unwrap();
        body.insert("divider1", UiElement::new("Divider")).unwrap();
        (body, vec!["intro".into(), "divider1".into()])
    }

    // ==========================================================================
    // Shape Tests
    // ==========================================================================

    #[test]
    fn test_root_child_order() {
        let (body, children) = body_fragment();
        let header = header_elements(HeaderOptions {
            title: "t".into(),
            subtitle: None,
            key: None,
        })
        .unwrap();
        let mut footer = Fragment::new();
        footer
            .insert("footerNote", UiElement::new("Paragraph").prop("text", "bye"))
            .unwrap();

        let spec = ScreenSpec::new()
            .header("header", header)
            .body(body, children)
            .footer("footerNote", footer)
            .build()
            .unwrap();

        assert_eq!(spec.root, ROOT_KEY);
        assert_eq!(spec.elements[ROOT_KEY].element_type, "ScrollContainer");
        assert_eq!(
            spec.elements[ROOT_KEY].children,
            vec!["header", "intro", "divider1", "footerNote"]
        );
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_elements_are_exact_union() {
        let (body, children) = body_fragment();
        let header = header_elements(HeaderOptions {
            title: "t".into(),
            subtitle: Some("s".into()),
            key: None,
        })
        .unwrap();

        let header_keys: Vec<String> = header.keys().cloned().collect();
        let spec = ScreenSpec::new()
            .header("header", header)
            .body(body, children)
            .build()
            .unwrap();

        let mut expected: Vec<String> = header_keys;
        expected.extend(["intro".to_string(), "divider1".to_string()]);
        expected.push(ROOT_KEY.to_string());
        expected.sort();
        let got: Vec<String> = spec.elements.keys().cloned().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_empty_body_still_has_root() {
        let spec = ScreenSpec::new().build().unwrap();
        assert!(spec.elements[ROOT_KEY].children.is_empty());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_state_passed_through_verbatim() {
        let spec = ScreenSpec::new()
            .state(state_object(json!({ "notifications": true, "darkMode": false })))
            .build()
            .unwrap();
        assert_eq!(spec.state["notifications"], json!(true));
        assert_eq!(spec.state["darkMode"], json!(false));
        assert_eq!(spec.state.len(), 2);
    }

    // ==========================================================================
    // Collision Tests
    // ==========================================================================

    #[test]
    fn test_shared_prefix_collision_fails_assembly() {
        let header = header_elements(HeaderOptions {
            title: "a".into(),
            subtitle: None,
            key: Some("section".into()),
        })
        .unwrap();
        let body = section_elements(SectionOptions {
            key: "section".into(),
            title: "b".into(),
            children: vec![],
        })
        .unwrap();

        let result = ScreenSpec::new()
            .header("section", header)
            .body(body, ["section"])
            .build();
        assert!(matches!(result, Err(SpecError::DuplicateKey(_))));
    }

    #[test]
    fn test_fragment_claiming_root_fails() {
        let mut body = Fragment::new();
        body.insert(ROOT_KEY, UiElement::new("Container")).unwrap();
        let result = ScreenSpec::new().body(body, [ROOT_KEY]).build();
        assert!(matches!(result, Err(SpecError::DuplicateKey(_))));
    }
}
