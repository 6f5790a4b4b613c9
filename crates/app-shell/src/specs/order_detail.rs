//! The order detail screen

use serde_json::{json, Map, Value};
use spec_core::builders::{header_with_back_elements, section_elements, HeaderOptions, SectionOptions};
use spec_core::{
    state_object, Fragment, Operand, Predicate, PropValue, Result, ScreenSpec, Spec, UiElement,
};

/// Route params for an order detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParams {
    /// Order identifier
    pub id: String,
    /// Order title line
    pub title: String,
    /// Order status, `pending` or `completed`
    pub status: String,
    /// Formatted amount
    pub amount: String,
}

impl Default for OrderParams {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            status: "pending".to_string(),
            amount: "$0.00".to_string(),
        }
    }
}

/// Extra state seeding an order detail mount from route params
pub fn order_state(params: OrderParams) -> Map<String, Value> {
    state_object(json!({
        "orderId": params.id,
        "orderTitle": params.title,
        "orderStatus": params.status,
        "orderAmount": params.amount,
    }))
}

/// Order summary with a status badge driven by `/orderStatus`
pub fn order_detail_spec() -> Result<Spec> {
    let header = header_with_back_elements(HeaderOptions {
        title: "order details".into(),
        subtitle: None,
        key: None,
    })?;

    let mut body = Fragment::new();
    body.insert(
        "orderInfo",
        UiElement::new("Container")
            .prop("padding", 16i64)
            .children(["orderTitleText", "orderIdText", "orderAmountText"]),
    )?;
    body.insert(
        "orderTitleText",
        UiElement::new("Heading")
            .prop("text", PropValue::path("/orderTitle"))
            .prop("level", "h2"),
    )?;
    body.insert(
        "orderIdText",
        UiElement::new("Paragraph").prop("text", PropValue::path("/orderId")),
    )?;
    body.insert(
        "orderAmountText",
        UiElement::new("Heading")
            .prop("text", PropValue::path("/orderAmount"))
            .prop("level", "h1"),
    )?;
    body.insert("divider1", UiElement::new("Divider").prop("margin", 8i64))?;

    body.merge(section_elements(SectionOptions {
        key: "statusSection".into(),
        title: "status".into(),
        children: vec!["statusBadge".into()],
    })?)?;
    body.insert(
        "statusBadge",
        UiElement::new("Badge")
            .prop("label", PropValue::path("/orderStatus"))
            .prop(
                "variant",
                PropValue::cond(
                    Predicate::Eq(Operand::path("/orderStatus"), Operand::lit("completed")),
                    PropValue::lit("success"),
                    PropValue::lit("warning"),
                ),
            ),
    )?;

    ScreenSpec::new()
        .state(order_state(OrderParams::default()))
        .header("header", header)
        .body(body, ["orderInfo", "divider1", "statusSection"])
        .build()
}
