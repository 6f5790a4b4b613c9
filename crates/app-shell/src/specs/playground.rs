//! The interactive playground screen
//!
//! Built element by element rather than through the screen assembler, as a
//! worked example of the raw document shape: conditional text, visibility
//! predicates, a repeat-driven todo list and every standard action.

use serde_json::json;
use spec_core::{
    state_object, ActionBinding, Fragment, Operand, Predicate, PropValue, Result, Spec, UiElement,
};

/// Counter, todo list and settings demos on one screen
pub fn playground_spec() -> Result<Spec> {
    let mut elements = Fragment::new();

    elements.insert(
        "page",
        UiElement::new("ScrollContainer").children([
            "header",
            "greeting",
            "divider1",
            "counterCard",
            "divider2",
            "todoCard",
            "divider3",
            "settingsCard",
        ]),
    )?;

    // Header
    elements.insert(
        "header",
        UiElement::new("Container")
            .prop("padding", 16i64)
            .children(["title", "subtitle"]),
    )?;
    elements.insert(
        "title",
        UiElement::new("Heading")
            .prop("text", "spec playground")
            .prop("level", "h1"),
    )?;
    elements.insert(
        "subtitle",
        UiElement::new("Paragraph").prop("text", "a hand-written document exercising the engine"),
    )?;

    // Greeting bound to /name
    elements.insert(
        "greeting",
        UiElement::new("Container")
            .prop("padding", 16i64)
            .children(["nameInput", "greetingText"]),
    )?;
    elements.insert(
        "nameInput",
        UiElement::new("TextInput")
            .prop("placeholder", "type your name...")
            .prop("statePath", "/name")
            .prop("label", "your name"),
    )?;
    elements.insert(
        "greetingText",
        UiElement::new("Heading")
            .prop(
                "text",
                PropValue::cond(
                    Predicate::Neq(Operand::path("/name"), Operand::lit("")),
                    PropValue::path("/name"),
                    PropValue::lit("..."),
                ),
            )
            .prop("level", "h3")
            .visible(Predicate::Neq(Operand::path("/name"), Operand::lit(""))),
    )?;

    elements.insert("divider1", UiElement::new("Divider").prop("margin", 8i64))?;
    elements.insert("divider2", UiElement::new("Divider").prop("margin", 8i64))?;
    elements.insert("divider3", UiElement::new("Divider").prop("margin", 8i64))?;

    // Counter
    elements.insert(
        "counterCard",
        UiElement::new("Card")
            .prop("title", "counter")
            .children(["counterRow", "counterBadge"]),
    )?;
    elements.insert(
        "counterRow",
        UiElement::new("Row")
            .prop("gap", 12i64)
            .prop("justifyContent", "center")
            .prop("alignItems", "center")
            .children(["decrementBtn", "countLabel", "incrementBtn"]),
    )?;
    elements.insert(
        "decrementBtn",
        UiElement::new("Button")
            .prop("label", "-")
            .prop("variant", "outline")
            .prop("size", "sm")
            .on(
                "press",
                ActionBinding::new("decrement")
                    .param("path", "/count")
                    .param("step", 1i64),
            ),
    )?;
    elements.insert(
        "countLabel",
        UiElement::new("Heading")
            .prop("text", PropValue::path("/count"))
            .prop("level", "h2"),
    )?;
    elements.insert(
        "incrementBtn",
        UiElement::new("Button")
            .prop("label", "+")
            .prop("variant", "primary")
            .prop("size", "sm")
            .on(
                "press",
                ActionBinding::new("increment")
                    .param("path", "/count")
                    .param("step", 1i64),
            ),
    )?;
    elements.insert(
        "counterBadge",
        UiElement::new("Badge")
            .prop(
                "label",
                PropValue::cond(
                    Predicate::Gt(Operand::path("/count"), Operand::lit(5)),
                    PropValue::lit("high"),
                    PropValue::lit("normal"),
                ),
            )
            .prop(
                "variant",
                PropValue::cond(
                    Predicate::Gt(Operand::path("/count"), Operand::lit(5)),
                    PropValue::lit("warning"),
                    PropValue::lit("info"),
                ),
            ),
    )?;

    // Todo list
    elements.insert(
        "todoCard",
        UiElement::new("Card")
            .prop("title", "todo list")
            .children(["todoInputRow", "todoList"]),
    )?;
    elements.insert(
        "todoInputRow",
        UiElement::new("Row")
            .prop("gap", 8i64)
            .prop("alignItems", "center")
            .children(["todoInput", "addTodoBtn"]),
    )?;
    elements.insert(
        "todoInput",
        UiElement::new("TextInput")
            .prop("placeholder", "new todo...")
            .prop("statePath", "/newTodo")
            .prop("flex", 1i64),
    )?;
    elements.insert(
        "addTodoBtn",
        UiElement::new("Button")
            .prop("label", "add")
            .prop("variant", "primary")
            .prop("size", "sm")
            .on(
                "press",
                ActionBinding::new("pushState")
                    .param("path", "/todos")
                    .param("value", json!({ "text": { "path": "/newTodo" } }))
                    .param("clearPath", "/newTodo"),
            ),
    )?;
    elements.insert(
        "todoList",
        UiElement::new("Column")
            .prop("gap", 4i64)
            .child("todoItem")
            .repeat("/todos"),
    )?;
    elements.insert(
        "todoItem",
        UiElement::new("ListItem")
            .prop("title", PropValue::path("$item/text"))
            .prop("trailing", "x")
            .on(
                "press",
                ActionBinding::new("removeState")
                    .param("path", "/todos")
                    .param("index", "$index"),
            ),
    )?;

    // Settings
    elements.insert(
        "settingsCard",
        UiElement::new("Card")
            .prop("title", "settings")
            .children(["darkModeSwitch", "alertBtn"]),
    )?;
    elements.insert(
        "darkModeSwitch",
        UiElement::new("Switch")
            .prop("label", "dark mode")
            .prop("statePath", "/darkMode"),
    )?;
    elements.insert(
        "alertBtn",
        UiElement::new("Button")
            .prop("label", "show alert")
            .prop("variant", "secondary")
            .on(
                "press",
                ActionBinding::new("showAlert")
                    .param("title", "hello!")
                    .param("message", "this alert was triggered by a spec action"),
            ),
    )?;

    Ok(Spec {
        root: "page".to_string(),
        state: state_object(json!({
            "name": "",
            "count": 0,
            "darkMode": false,
            "todos": [{ "text": "learn the engine" }, { "text": "build something cool" }],
            "newTodo": "",
        })),
        elements: elements.into_elements(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_validates() {
        playground_spec().unwrap().validate().unwrap();
    }

    #[test]
    fn test_todo_list_repeats_over_state() {
        let spec = playground_spec().unwrap();
        let list = &spec.elements["todoList"];
        assert_eq!(list.repeat.as_ref().unwrap().path, "/todos");
        assert_eq!(list.children, vec!["todoItem"]);
    }

    #[test]
    fn test_remove_routes_instance_index() {
        let spec = playground_spec().unwrap();
        let press = &spec.elements["todoItem"].on["press"];
        assert_eq!(press.action, "removeState");
        assert_eq!(press.params["index"], PropValue::lit("$index"));
    }
}
