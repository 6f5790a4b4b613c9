//! The dashboard overview screen

use serde_json::json;
use spec_core::builders::{header_elements, section_elements, HeaderOptions, SectionOptions};
use spec_core::{ActionBinding, Fragment, Result, ScreenSpec, Spec, UiElement};

fn stat_card(label: &str, value: &str, trend: &str, trend_value: &str, color: &str) -> UiElement {
    UiElement::new("StatCard")
        .prop("label", label)
        .prop("value", value)
        .prop("trend", trend)
        .prop("trendValue", trend_value)
        .prop("color", color)
}

fn order_press(id: &str, title: &str, status: &str, amount: &str) -> ActionBinding {
    ActionBinding::new("navigate")
        .param("screen", "/order/[id]")
        .param(
            "params",
            json!({ "id": id, "title": title, "status": status, "amount": amount }),
        )
}

/// The home overview: stat cards and a recent-activity list
pub fn dashboard_spec() -> Result<Spec> {
    let header = header_elements(HeaderOptions {
        title: "dashboard".into(),
        subtitle: Some("your overview".into()),
        key: None,
    })?;

    let mut body = Fragment::new();
    body.insert(
        "statsSection",
        UiElement::new("Container")
            .prop("padding", 16i64)
            .child("statsRow"),
    )?;
    body.insert(
        "statsRow",
        UiElement::new("Row")
            .prop("gap", 12i64)
            .children(["stat1", "stat2", "stat3"]),
    )?;
    body.insert("stat1", stat_card("orders", "128", "up", "+12%", "#4CAF50"))?;
    body.insert("stat2", stat_card("revenue", "$4.2k", "up", "+8%", "#2196F3"))?;
    body.insert(
        "stat3",
        stat_card("customers", "64", "down", "-3%", "#FF9800"),
    )?;
    body.insert("divider1", UiElement::new("Divider").prop("margin", 8i64))?;

    body.merge(section_elements(SectionOptions {
        key: "activitySection".into(),
        title: "recent activity".into(),
        children: vec!["activity1".into(), "activity2".into(), "activity3".into()],
    })?)?;
    body.insert(
        "activity1",
        UiElement::new("ListItem")
            .prop("title", "new order #1234")
            .prop("subtitle", "2 minutes ago")
            .prop("showChevron", true)
            .on(
                "press",
                order_press("1234", "new order #1234", "pending", "$42.50"),
            ),
    )?;
    body.insert(
        "activity2",
        UiElement::new("ListItem")
            .prop("title", "payment received")
            .prop("subtitle", "15 minutes ago")
            .prop("showChevron", true)
            .on(
                "press",
                order_press("5678", "payment received", "completed", "$128.00"),
            ),
    )?;
    body.insert(
        "activity3",
        UiElement::new("ListItem")
            .prop("title", "new customer signup")
            .prop("subtitle", "1 hour ago"),
    )?;

    ScreenSpec::new()
        .header("header", header)
        .body(body, ["statsSection", "divider1", "activitySection"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_order() {
        let spec = dashboard_spec().unwrap();
        assert_eq!(
            spec.elements["root"].children,
            vec!["header", "statsSection", "divider1", "activitySection"]
        );
    }

    #[test]
    fn test_activity_rows_route_to_order_detail() {
        let spec = dashboard_spec().unwrap();
        let press = &spec.elements["activity1"].on["press"];
        assert_eq!(press.action, "navigate");
        assert_eq!(
            press.params["screen"],
            spec_core::PropValue::lit("/order/[id]")
        );
    }
}
