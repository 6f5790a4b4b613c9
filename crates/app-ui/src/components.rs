//! The standard component set
//!
//! Every component a spec document may reference: layout containers, text,
//! form controls, and the app-specific cards and rows. Each registration
//! pairs a typed props schema with a themed style factory; resolved props
//! that fail the schema omit the node.

use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use spec_engine::{RenderContext, RenderNode};

use crate::registry::Registry;
use crate::styles::StyleSheet;
use crate::theme::{Theme, ThemeState};
use crate::tokens::{heading, radius, spacing, typography};

/// Accept numbers and booleans where a spec binds non-string state into a
/// text prop
fn coerce_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "cannot render {} as text",
            other
        ))),
    }
}

fn text_node(text: impl Into<String>, style: serde_json::Map<String, Value>) -> RenderNode {
    RenderNode::new("text").text(text).style(style)
}

// =============================================================================
// Layout Components
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContainerProps {
    padding: Option<f64>,
    gap: Option<f64>,
    background_color: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RowProps {
    gap: Option<f64>,
    padding: Option<f64>,
    justify_content: Option<String>,
    align_items: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnProps {
    gap: Option<f64>,
    padding: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScrollContainerProps {
    padding: Option<f64>,
}

fn no_styles(_theme: &Theme) -> StyleSheet {
    StyleSheet::new()
}

fn scroll_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new().with(
        "container",
        json!({ "flex": 1, "backgroundColor": theme.colors.background }),
    )
}

// =============================================================================
// Text Components
// =============================================================================

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    fn font_size(self) -> f64 {
        match self {
            HeadingLevel::H1 => heading::H1,
            HeadingLevel::H2 => heading::H2,
            HeadingLevel::H3 => heading::H3,
            HeadingLevel::H4 => heading::H4,
        }
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeadingProps {
    #[serde(deserialize_with = "coerce_string")]
    text: String,
    level: Option<HeadingLevel>,
    color: Option<String>,
    align: Option<Align>,
}

fn heading_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new().with(
        "text",
        json!({ "fontWeight": "700", "color": theme.colors.text }),
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParagraphProps {
    text: String,
    font_size: Option<f64>,
    number_of_lines: Option<u32>,
    color: Option<String>,
    align: Option<Align>,
}

fn paragraph_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new().with("text", json!({ "color": theme.colors.text_secondary }))
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DividerProps {
    direction: Option<Direction>,
    thickness: Option<f64>,
    color: Option<String>,
    margin: Option<f64>,
}

// =============================================================================
// Surface Components
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardProps {
    title: Option<String>,
    subtitle: Option<String>,
    padding: Option<f64>,
    background_color: Option<String>,
    border_radius: Option<f64>,
    elevated: Option<bool>,
}

fn card_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "container",
            json!({
                "backgroundColor": theme.colors.surface,
                "borderRadius": spacing::MD,
            }),
        )
        .with(
            "elevated",
            json!({
                "shadowColor": theme.colors.shadow,
                "shadowOpacity": if theme.is_dark { 0.3 } else { 0.1 },
                "shadowRadius": 8,
                "elevation": 3,
            }),
        )
        .with(
            "title",
            json!({
                "fontSize": typography::TITLE,
                "fontWeight": "600",
                "color": theme.colors.text,
            }),
        )
        .with(
            "subtitle",
            json!({
                "fontSize": typography::BODY,
                "color": theme.colors.text_secondary,
                "marginBottom": spacing::MD,
            }),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListItemProps {
    title: String,
    subtitle: Option<String>,
    leading: Option<String>,
    trailing: Option<String>,
    show_chevron: Option<bool>,
}

fn list_item_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "content",
            json!({
                "flexDirection": "row",
                "alignItems": "center",
                "paddingVertical": spacing::MD,
                "paddingHorizontal": spacing::LG,
            }),
        )
        .with(
            "leading",
            json!({
                "fontSize": typography::BODY_LARGE,
                "color": theme.colors.text_secondary,
                "marginRight": spacing::MD,
                "width": spacing::XL,
                "textAlign": "center",
            }),
        )
        .with("body", json!({ "flex": 1 }))
        .with(
            "title",
            json!({ "fontSize": typography::BODY_LARGE, "color": theme.colors.text }),
        )
        .with(
            "subtitle",
            json!({
                "fontSize": typography::BODY,
                "color": theme.colors.text_secondary,
                "marginTop": 2,
            }),
        )
        .with(
            "trailing",
            json!({
                "fontSize": typography::BODY,
                "color": theme.colors.text_secondary,
                "marginLeft": spacing::SM,
            }),
        )
        .with(
            "chevron",
            json!({
                "fontSize": typography::BODY_LARGE,
                "color": theme.colors.text_tertiary,
                "marginLeft": spacing::SM,
            }),
        )
}

// =============================================================================
// Controls
// =============================================================================

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Outline,
    Ghost,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    /// (horizontal padding, vertical padding, font size)
    fn metrics(self) -> (f64, f64, f64) {
        match self {
            ButtonSize::Sm => (12.0, 6.0, 13.0),
            ButtonSize::Md => (16.0, 10.0, 15.0),
            ButtonSize::Lg => (24.0, 14.0, 17.0),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ButtonProps {
    label: String,
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
    disabled: Option<bool>,
    loading: Option<bool>,
}

fn button_styles(_theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "container",
            json!({
                "borderRadius": radius::SM,
                "alignItems": "center",
                "justifyContent": "center",
                "flexDirection": "row",
                "alignSelf": "flex-start",
            }),
        )
        .with("label", json!({ "fontWeight": "600" }))
}

/// (background, text color, border) for a button variant
fn button_palette(variant: ButtonVariant, theme: &Theme) -> (String, String, Option<String>) {
    match variant {
        ButtonVariant::Primary => (theme.colors.accent.clone(), "#ffffff".to_string(), None),
        ButtonVariant::Secondary => (
            theme.colors.text_secondary.clone(),
            "#ffffff".to_string(),
            None,
        ),
        ButtonVariant::Danger => (theme.colors.error.clone(), "#ffffff".to_string(), None),
        ButtonVariant::Outline => (
            "transparent".to_string(),
            theme.colors.accent.clone(),
            Some(theme.colors.accent.clone()),
        ),
        ButtonVariant::Ghost => ("transparent".to_string(), theme.colors.text.clone(), None),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextInputProps {
    label: Option<String>,
    placeholder: Option<String>,
    state_path: Option<String>,
    flex: Option<f64>,
    secure_text_entry: Option<bool>,
    keyboard_type: Option<String>,
    multiline: Option<bool>,
    number_of_lines: Option<u32>,
}

fn input_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "label",
            json!({
                "fontSize": typography::BODY,
                "fontWeight": "500",
                "color": theme.colors.text,
                "marginBottom": spacing::XS,
            }),
        )
        .with(
            "input",
            json!({
                "borderWidth": 1,
                "borderColor": theme.colors.border,
                "borderRadius": radius::SM,
                "paddingHorizontal": spacing::MD,
                "paddingVertical": 10,
                "fontSize": typography::BODY_LARGE,
                "color": theme.colors.text,
                "backgroundColor": theme.colors.surface,
            }),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwitchProps {
    value: Option<bool>,
    state_path: Option<String>,
    label: Option<String>,
    disabled: Option<bool>,
}

fn switch_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "container",
            json!({
                "flexDirection": "row",
                "alignItems": "center",
                "gap": spacing::SM,
            }),
        )
        .with(
            "label",
            json!({ "fontSize": typography::BODY_LARGE, "color": theme.colors.text }),
        )
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
enum BadgeVariant {
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BadgeProps {
    label: String,
    variant: Option<BadgeVariant>,
}

fn badge_styles(_theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "container",
            json!({
                "paddingHorizontal": spacing::SM,
                "paddingVertical": 2,
                "borderRadius": radius::FULL,
                "alignSelf": "flex-start",
            }),
        )
        .with(
            "label",
            json!({ "fontSize": typography::CAPTION, "fontWeight": "600" }),
        )
}

/// (background, text color) for a badge variant
fn badge_palette(variant: BadgeVariant, theme: &Theme) -> (String, String) {
    match variant {
        BadgeVariant::Default => (
            theme.colors.surface_secondary.clone(),
            theme.colors.text_secondary.clone(),
        ),
        BadgeVariant::Info => (theme.colors.accent.clone(), "#ffffff".to_string()),
        BadgeVariant::Success => (theme.colors.success.clone(), "#ffffff".to_string()),
        BadgeVariant::Warning => (theme.colors.warning.clone(), "#1a1a1a".to_string()),
        BadgeVariant::Error => (theme.colors.error.clone(), "#ffffff".to_string()),
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    fn pixels(self) -> f64 {
        match self {
            AvatarSize::Sm => 32.0,
            AvatarSize::Md => 48.0,
            AvatarSize::Lg => 64.0,
            AvatarSize::Xl => 96.0,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvatarProps {
    initials: Option<String>,
    size: Option<AvatarSize>,
}

fn avatar_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "circle",
            json!({
                "borderRadius": radius::FULL,
                "backgroundColor": theme.colors.accent,
                "alignItems": "center",
                "justifyContent": "center",
            }),
        )
        .with("initials", json!({ "color": "#ffffff", "fontWeight": "600" }))
}

// =============================================================================
// App Components
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormFieldProps {
    state_path: String,
    label: Option<String>,
    placeholder: Option<String>,
    keyboard_type: Option<String>,
    secure_text_entry: Option<bool>,
}

fn form_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with("field", json!({ "marginBottom": spacing::XS }))
        .with(
            "label",
            json!({
                "fontSize": typography::BODY,
                "fontWeight": "600",
                "marginBottom": spacing::XS,
                "color": theme.colors.text,
            }),
        )
        .with(
            "input",
            json!({
                "borderWidth": 1,
                "borderColor": theme.colors.border,
                "borderRadius": radius::SM,
                "padding": spacing::MD,
                "fontSize": typography::BODY_LARGE,
                "backgroundColor": theme.colors.surface_secondary,
                "color": theme.colors.text,
            }),
        )
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum TrailingType {
    Chevron,
    Switch,
    Badge,
    Text,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsRowProps {
    label: String,
    trailing_type: TrailingType,
    description: Option<String>,
    state_path: Option<String>,
    trailing_text: Option<String>,
}

fn settings_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "row",
            json!({
                "flexDirection": "row",
                "alignItems": "center",
                "justifyContent": "space-between",
                "paddingVertical": spacing::MD,
            }),
        )
        .with("left", json!({ "flex": 1, "marginRight": spacing::MD }))
        .with(
            "label",
            json!({
                "fontSize": typography::BODY_LARGE,
                "fontWeight": "500",
                "color": theme.colors.text,
            }),
        )
        .with(
            "description",
            json!({
                "fontSize": typography::CAPTION,
                "color": theme.colors.text_secondary,
                "marginTop": 2,
            }),
        )
        .with(
            "chevron",
            json!({ "fontSize": 22, "color": theme.colors.text_tertiary }),
        )
        .with(
            "trailingText",
            json!({ "fontSize": typography::BODY, "color": theme.colors.text_secondary }),
        )
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatCardProps {
    label: String,
    value: String,
    trend: Option<Trend>,
    trend_value: Option<String>,
    color: Option<String>,
}

fn stat_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "card",
            json!({
                "backgroundColor": theme.colors.surface,
                "borderRadius": spacing::MD,
                "padding": spacing::MD,
                "shadowColor": theme.colors.shadow,
                "shadowOpacity": if theme.is_dark { 0.3 } else { 0.08 },
                "shadowRadius": 8,
                "elevation": 2,
                "flex": 1,
            }),
        )
        .with(
            "label",
            json!({
                "fontSize": typography::CAPTION,
                "color": theme.colors.text_secondary,
                "textTransform": "uppercase",
                "letterSpacing": 0.5,
            }),
        )
        .with(
            "value",
            json!({
                "fontSize": typography::DISPLAY,
                "fontWeight": "700",
                "color": theme.colors.text,
                "marginTop": spacing::XS,
            }),
        )
        .with(
            "trend",
            json!({ "fontSize": typography::CAPTION, "marginTop": spacing::XS }),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionHeaderProps {
    title: String,
}

fn section_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with("header", json!({ "marginBottom": spacing::SM }))
        .with(
            "title",
            json!({
                "fontSize": typography::CAPTION,
                "fontWeight": "600",
                "textTransform": "uppercase",
                "color": theme.colors.text_secondary,
                "letterSpacing": 0.5,
            }),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmptyStateProps {
    title: String,
    message: Option<String>,
    action_label: Option<String>,
}

fn empty_styles(theme: &Theme) -> StyleSheet {
    StyleSheet::new()
        .with(
            "container",
            json!({ "alignItems": "center", "padding": spacing::XXL }),
        )
        .with(
            "title",
            json!({
                "fontSize": typography::TITLE,
                "fontWeight": "600",
                "color": theme.colors.text,
            }),
        )
        .with(
            "message",
            json!({
                "fontSize": typography::BODY,
                "color": theme.colors.text_secondary,
                "textAlign": "center",
                "marginTop": spacing::SM,
            }),
        )
        .with(
            "actionLabel",
            json!({
                "fontSize": typography::BODY,
                "color": theme.colors.accent,
                "fontWeight": "600",
                "marginTop": spacing::LG,
            }),
        )
}

// =============================================================================
// Registration
// =============================================================================

/// Build the full standard registry over a theme handle
pub fn standard_registry(theme: ThemeState) -> Registry {
    let mut registry = Registry::new(theme);

    registry.register::<ContainerProps, _>("Container", no_styles, render_container);
    registry.register::<RowProps, _>("Row", no_styles, render_row);
    registry.register::<ColumnProps, _>("Column", no_styles, render_column);
    registry.register::<ScrollContainerProps, _>("ScrollContainer", scroll_styles, render_scroll);

    registry.register::<HeadingProps, _>("Heading", heading_styles, render_heading);
    registry.register::<ParagraphProps, _>("Paragraph", paragraph_styles, render_paragraph);
    registry.register::<DividerProps, _>("Divider", no_styles, render_divider);

    registry.register::<CardProps, _>("Card", card_styles, render_card);
    registry.register::<ListItemProps, _>("ListItem", list_item_styles, render_list_item);

    registry.register::<ButtonProps, _>("Button", button_styles, render_button);
    registry.register::<TextInputProps, _>("TextInput", input_styles, render_text_input);
    registry.register::<SwitchProps, _>("Switch", switch_styles, render_switch);
    registry.register::<BadgeProps, _>("Badge", badge_styles, render_badge);
    registry.register::<AvatarProps, _>("Avatar", avatar_styles, render_avatar);

    registry.register::<FormFieldProps, _>("FormField", form_styles, render_form_field);
    registry.register::<SettingsRowProps, _>("SettingsRow", settings_styles, render_settings_row);
    registry.register::<StatCardProps, _>("StatCard", stat_styles, render_stat_card);
    registry.register::<SectionHeaderProps, _>(
        "SectionHeader",
        section_styles,
        render_section_header,
    );
    registry.register::<EmptyStateProps, _>("EmptyState", empty_styles, render_empty_state);

    registry
}

fn render_container(
    props: ContainerProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    _sheet: &StyleSheet,
) -> RenderNode {
    let mut node = RenderNode::new("view").children(ctx.children);
    if let Some(padding) = props.padding {
        node = node.style_attr("padding", padding);
    }
    if let Some(gap) = props.gap {
        node = node.style_attr("gap", gap);
    }
    if let Some(color) = props.background_color {
        node = node.style_attr("backgroundColor", color);
    }
    node
}

fn render_row(
    props: RowProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    _sheet: &StyleSheet,
) -> RenderNode {
    let mut node = RenderNode::new("view")
        .style_attr("flexDirection", "row")
        .children(ctx.children);
    if let Some(gap) = props.gap {
        node = node.style_attr("gap", gap);
    }
    if let Some(padding) = props.padding {
        node = node.style_attr("padding", padding);
    }
    if let Some(justify) = props.justify_content {
        node = node.style_attr("justifyContent", justify);
    }
    if let Some(align) = props.align_items {
        node = node.style_attr("alignItems", align);
    }
    node
}

fn render_column(
    props: ColumnProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    _sheet: &StyleSheet,
) -> RenderNode {
    let mut node = RenderNode::new("view")
        .style_attr("flexDirection", "column")
        .children(ctx.children);
    if let Some(gap) = props.gap {
        node = node.style_attr("gap", gap);
    }
    if let Some(padding) = props.padding {
        node = node.style_attr("padding", padding);
    }
    node
}

fn render_scroll(
    props: ScrollContainerProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let mut node = RenderNode::new("scroll")
        .style(sheet.get("container"))
        .children(ctx.children);
    if let Some(padding) = props.padding {
        node = node.style_attr("padding", padding);
    }
    node
}

fn render_heading(
    props: HeadingProps,
    _ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let mut node = text_node(props.text, sheet.get("text"))
        .style_attr("fontSize", props.level.unwrap_or_default().font_size())
        .style_attr("textAlign", props.align.unwrap_or_default().as_str());
    if let Some(color) = props.color {
        node = node.style_attr("color", color);
    }
    node
}

fn render_paragraph(
    props: ParagraphProps,
    _ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let font_size = props.font_size.unwrap_or(typography::BODY_LARGE);
    let mut node = text_node(props.text, sheet.get("text"))
        .style_attr("fontSize", font_size)
        .style_attr("lineHeight", font_size * 1.5)
        .style_attr("textAlign", props.align.unwrap_or_default().as_str())
        .maybe_attr("numberOfLines", props.number_of_lines);
    if let Some(color) = props.color {
        node = node.style_attr("color", color);
    }
    node
}

fn render_divider(
    props: DividerProps,
    _ctx: RenderContext<'_>,
    theme: &Theme,
    _sheet: &StyleSheet,
) -> RenderNode {
    let vertical = props.direction.unwrap_or_default() == Direction::Vertical;
    let thickness = props.thickness.unwrap_or(1.0);
    let margin = props.margin.unwrap_or(spacing::SM);
    let color = props.color.unwrap_or_else(|| theme.colors.border.clone());

    let mut node = RenderNode::new("view").style_attr("backgroundColor", color);
    if vertical {
        node = node
            .style_attr("width", thickness)
            .style_attr("height", "100%")
            .style_attr("marginHorizontal", margin);
    } else {
        node = node
            .style_attr("width", "100%")
            .style_attr("height", thickness)
            .style_attr("marginVertical", margin);
    }
    node
}

fn render_card(
    props: CardProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let mut node = RenderNode::new("view")
        .style(sheet.get("container"))
        .style_attr("padding", props.padding.unwrap_or(16.0));
    if props.elevated.unwrap_or(true) {
        node = node.style(sheet.get("elevated"));
    }
    if let Some(border_radius) = props.border_radius {
        node = node.style_attr("borderRadius", border_radius);
    }
    if let Some(color) = props.background_color {
        node = node.style_attr("backgroundColor", color);
    }

    if let Some(title) = props.title {
        let margin = if props.subtitle.is_some() { 2.0 } else { 12.0 };
        node = node.child(
            text_node(title, sheet.get("title")).style_attr("marginBottom", margin),
        );
    }
    if let Some(subtitle) = props.subtitle {
        node = node.child(text_node(subtitle, sheet.get("subtitle")));
    }
    node.children(ctx.children)
}

fn render_list_item(
    props: ListItemProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let pressable = ctx.element.on.contains_key("press") && ctx.emit.is_some();
    let mut node = RenderNode::new(if pressable { "pressable" } else { "view" })
        .style(sheet.get("content"));

    if let Some(leading) = props.leading {
        node = node.child(text_node(leading, sheet.get("leading")));
    }
    let mut body = RenderNode::new("view")
        .style(sheet.get("body"))
        .child(text_node(props.title, sheet.get("title")));
    if let Some(subtitle) = props.subtitle {
        body = body.child(text_node(subtitle, sheet.get("subtitle")));
    }
    node = node.child(body);
    if let Some(trailing) = props.trailing {
        node = node.child(text_node(trailing, sheet.get("trailing")));
    }
    if props.show_chevron.unwrap_or(false) {
        node = node.child(text_node(">", sheet.get("chevron")));
    }
    if pressable {
        if let Some(emit) = &ctx.emit {
            node = node.event(emit.binding("press"));
        }
    }
    node
}

fn render_button(
    props: ButtonProps,
    ctx: RenderContext<'_>,
    theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let (bg, text_color, border) = button_palette(props.variant.unwrap_or_default(), theme);
    let (padding_h, padding_v, font_size) = props.size.unwrap_or_default().metrics();
    let disabled = props.disabled.unwrap_or(false);
    let loading = props.loading.unwrap_or(false);

    let mut node = RenderNode::new("pressable")
        .style(sheet.get("container"))
        .style_attr("backgroundColor", bg)
        .style_attr("paddingHorizontal", padding_h)
        .style_attr("paddingVertical", padding_v)
        .attr("disabled", disabled || loading);
    if let Some(border) = border {
        node = node
            .style_attr("borderWidth", 1)
            .style_attr("borderColor", border);
    }
    if disabled {
        node = node.style_attr("opacity", 0.5);
    }
    if loading {
        node = node.child(
            RenderNode::new("spinner")
                .attr("color", text_color.clone())
                .style_attr("marginRight", spacing::SM),
        );
    }
    node = node.child(
        text_node(props.label, sheet.get("label"))
            .style_attr("color", text_color)
            .style_attr("fontSize", font_size),
    );
    if let Some(emit) = &ctx.emit {
        node = node.event(emit.binding("press"));
    }
    node
}

fn render_text_input(
    props: TextInputProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let value = props
        .state_path
        .as_ref()
        .and_then(|path| ctx.store.bind::<String>(path.clone()).get())
        .unwrap_or_default();

    let multiline = props.multiline.unwrap_or(false);
    let mut input = RenderNode::new("text-input")
        .style(sheet.get("input"))
        .attr("value", value)
        .maybe_attr("placeholder", props.placeholder)
        .maybe_attr("statePath", props.state_path)
        .attr("secureTextEntry", props.secure_text_entry.unwrap_or(false))
        .attr(
            "keyboardType",
            props.keyboard_type.unwrap_or_else(|| "default".to_string()),
        )
        .attr("multiline", multiline);
    if multiline {
        let lines = props.number_of_lines.unwrap_or(3);
        input = input
            .style_attr("minHeight", f64::from(lines) * 20.0)
            .style_attr("textAlignVertical", "top");
    }

    let mut node = RenderNode::new("view");
    if let Some(flex) = props.flex {
        node = node.style_attr("flex", flex);
    }
    if let Some(label) = props.label {
        node = node.child(text_node(label, sheet.get("label")));
    }
    node.child(input)
}

fn render_switch(
    props: SwitchProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let bound = props
        .state_path
        .as_ref()
        .and_then(|path| ctx.store.bind::<bool>(path.clone()).get());
    let value = bound.or(props.value).unwrap_or(false);

    let control = RenderNode::new("switch")
        .attr("value", value)
        .maybe_attr("statePath", props.state_path)
        .attr("disabled", props.disabled.unwrap_or(false));

    let mut node = RenderNode::new("view")
        .style(sheet.get("container"))
        .child(control);
    if let Some(label) = props.label {
        node = node.child(text_node(label, sheet.get("label")));
    }
    node
}

fn render_badge(
    props: BadgeProps,
    _ctx: RenderContext<'_>,
    theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let (bg, text_color) = badge_palette(props.variant.unwrap_or_default(), theme);
    RenderNode::new("view")
        .style(sheet.get("container"))
        .style_attr("backgroundColor", bg)
        .child(text_node(props.label, sheet.get("label")).style_attr("color", text_color))
}

fn render_avatar(
    props: AvatarProps,
    _ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let size = props.size.unwrap_or_default().pixels();
    RenderNode::new("view")
        .style(sheet.get("circle"))
        .style_attr("width", size)
        .style_attr("height", size)
        .child(
            text_node(props.initials.unwrap_or_default(), sheet.get("initials"))
                .style_attr("fontSize", size / 2.5),
        )
}

fn render_form_field(
    props: FormFieldProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let value = ctx
        .store
        .bind::<String>(props.state_path.clone())
        .get()
        .unwrap_or_default();

    let input = RenderNode::new("text-input")
        .style(sheet.get("input"))
        .attr("value", value)
        .attr("statePath", props.state_path)
        .maybe_attr("placeholder", props.placeholder)
        .attr(
            "keyboardType",
            props.keyboard_type.unwrap_or_else(|| "default".to_string()),
        )
        .attr("secureTextEntry", props.secure_text_entry.unwrap_or(false));

    let mut node = RenderNode::new("view").style(sheet.get("field"));
    if let Some(label) = props.label {
        node = node.child(text_node(label, sheet.get("label")));
    }
    node.child(input)
}

fn render_settings_row(
    props: SettingsRowProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let pressable = props.trailing_type == TrailingType::Chevron && ctx.emit.is_some();
    let mut node = RenderNode::new(if pressable { "pressable" } else { "view" })
        .style(sheet.get("row"));

    let mut left = RenderNode::new("view")
        .style(sheet.get("left"))
        .child(text_node(props.label, sheet.get("label")));
    if let Some(description) = props.description {
        left = left.child(text_node(description, sheet.get("description")));
    }
    node = node.child(left);

    match props.trailing_type {
        TrailingType::Switch => {
            if let Some(path) = props.state_path {
                let value = ctx.store.bind::<bool>(path.clone()).get().unwrap_or(false);
                node = node.child(
                    RenderNode::new("switch")
                        .attr("value", value)
                        .attr("statePath", path),
                );
            }
        }
        TrailingType::Chevron => {
            node = node.child(text_node("\u{203a}", sheet.get("chevron")));
        }
        TrailingType::Text => {
            if let Some(text) = props.trailing_text {
                node = node.child(text_node(text, sheet.get("trailingText")));
            }
        }
        TrailingType::Badge => {
            if let Some(text) = props.trailing_text {
                node = node.child(RenderNode::new("badge").text(text));
            }
        }
    }

    if pressable {
        if let Some(emit) = &ctx.emit {
            node = node.event(emit.binding("press"));
        }
    }
    node
}

fn render_stat_card(
    props: StatCardProps,
    _ctx: RenderContext<'_>,
    theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    let mut value = text_node(props.value, sheet.get("value"));
    if let Some(color) = props.color {
        value = value.style_attr("color", color);
    }
    let mut node = RenderNode::new("view")
        .style(sheet.get("card"))
        .child(text_node(props.label, sheet.get("label")))
        .child(value);

    if let Some(trend_value) = props.trend_value {
        let (arrow, color) = match props.trend {
            Some(Trend::Up) => ("\u{2191} ", theme.colors.success.clone()),
            Some(Trend::Down) => ("\u{2193} ", theme.colors.error.clone()),
            _ => ("", theme.colors.text_secondary.clone()),
        };
        node = node.child(
            text_node(format!("{}{}", arrow, trend_value), sheet.get("trend"))
                .style_attr("color", color),
        );
    }
    node
}

fn render_section_header(
    props: SectionHeaderProps,
    _ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    RenderNode::new("view")
        .style(sheet.get("header"))
        .child(text_node(props.title, sheet.get("title")))
}

fn render_empty_state(
    props: EmptyStateProps,
    ctx: RenderContext<'_>,
    _theme: &Theme,
    sheet: &StyleSheet,
) -> RenderNode {
    if cfg!(debug_assertions) && props.action_label.is_some() && ctx.emit.is_none() {
        tracing::warn!(key = ctx.key, "action label provided but no event handler bound");
    }

    let mut node = RenderNode::new("view")
        .style(sheet.get("container"))
        .child(text_node(props.title, sheet.get("title")));
    if let Some(message) = props.message {
        node = node.child(text_node(message, sheet.get("message")));
    }
    if let (Some(action_label), Some(emit)) = (props.action_label, &ctx.emit) {
        node = node.child(
            RenderNode::new("pressable")
                .child(text_node(action_label, sheet.get("actionLabel")))
                .event(emit.binding("action")),
        );
    }
    node
}
