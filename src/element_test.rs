#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn container() -> Element {
    Element::new(ElementKind::Container, 50.0, 50.0, 200.0, 100.0)
}

// =============================================================
// ElementKind
// =============================================================

#[test]
fn kind_is_vector() {
    assert!(ElementKind::Rectangle.is_vector());
    assert!(ElementKind::Oval.is_vector());
    assert!(ElementKind::Polygon.is_vector());
    assert!(ElementKind::Star.is_vector());
    assert!(ElementKind::Path.is_vector());
    assert!(!ElementKind::Text.is_vector());
    assert!(!ElementKind::Container.is_vector());
}

#[test]
fn kind_is_text() {
    assert!(ElementKind::Text.is_text());
    assert!(!ElementKind::Button.is_text());
}

#[test]
fn kind_default_names() {
    assert_eq!(ElementKind::Text.default_name(), "Text");
    assert_eq!(ElementKind::Oval.default_name(), "Oval");
}

#[test]
fn kind_serde_lowercase() {
    let json = serde_json::to_string(&ElementKind::Rectangle).unwrap();
    assert_eq!(json, "\"rectangle\"");
    let parsed: ElementKind = serde_json::from_str("\"oval\"").unwrap();
    assert_eq!(parsed, ElementKind::Oval);
}

// =============================================================
// Element construction
// =============================================================

#[test]
fn new_element_gets_fresh_id() {
    let a = container();
    let b = container();
    assert_ne!(a.id, b.id);
}

#[test]
fn new_element_has_default_name_and_empty_styles() {
    let el = container();
    assert_eq!(el.name, "Container");
    assert!(el.content.is_none());
    assert_eq!(el.styles, json!({}));
    assert!(!el.just_created);
}

#[test]
fn new_element_stores_geometry() {
    let el = Element::new(ElementKind::Rectangle, 10.0, 20.0, 30.0, 40.0);
    assert_eq!(el.x, 10.0);
    assert_eq!(el.y, 20.0);
    assert_eq!(el.width, 30.0);
    assert_eq!(el.height, 40.0);
}

#[test]
fn just_created_is_not_serialized() {
    let mut el = container();
    el.just_created = true;
    let json = serde_json::to_value(&el).unwrap();
    assert!(json.get("just_created").is_none());
    let back: Element = serde_json::from_value(json).unwrap();
    assert!(!back.just_created);
}

// =============================================================
// PartialElement application
// =============================================================

#[test]
fn apply_updates_geometry_fields() {
    let mut el = container();
    el.apply(&PartialElement { x: Some(99.0), y: Some(88.0), ..Default::default() });
    assert_eq!(el.x, 99.0);
    assert_eq!(el.y, 88.0);
    // Untouched fields unchanged.
    assert_eq!(el.width, 200.0);
    assert_eq!(el.height, 100.0);
}

#[test]
fn apply_updates_name_and_content() {
    let mut el = container();
    el.apply(&PartialElement {
        name: Some("Hero".into()),
        content: Some("Welcome".into()),
        ..Default::default()
    });
    assert_eq!(el.name, "Hero");
    assert_eq!(el.content.as_deref(), Some("Welcome"));
}

#[test]
fn apply_empty_partial_is_noop() {
    let mut el = container();
    let before = (el.x, el.y, el.width, el.height, el.name.clone());
    el.apply(&PartialElement::default());
    assert_eq!((el.x, el.y, el.width, el.height, el.name.clone()), before);
}

#[test]
fn apply_merges_styles_preserving_existing_keys() {
    let mut el = container();
    el.styles = json!({"backgroundColor": "#f3f4f6", "padding": "16px"});
    el.apply(&PartialElement {
        styles: Some(json!({"color": "#111"})),
        ..Default::default()
    });
    assert_eq!(el.styles["backgroundColor"], "#f3f4f6");
    assert_eq!(el.styles["padding"], "16px");
    assert_eq!(el.styles["color"], "#111");
}

#[test]
fn apply_null_style_value_removes_key() {
    let mut el = container();
    el.styles = json!({"backgroundColor": "#fff", "border": "1px solid #000"});
    el.apply(&PartialElement {
        styles: Some(json!({"border": null})),
        ..Default::default()
    });
    assert!(el.styles.get("border").is_none());
    assert_eq!(el.styles["backgroundColor"], "#fff");
}

#[test]
fn apply_styles_onto_non_object_bag_resets_to_object() {
    let mut el = container();
    el.styles = json!("garbage");
    el.apply(&PartialElement {
        styles: Some(json!({"color": "#abc"})),
        ..Default::default()
    });
    assert_eq!(el.styles["color"], "#abc");
}

#[test]
fn partial_position_helper() {
    let p = PartialElement::position(5.0, 6.0);
    assert_eq!(p.x, Some(5.0));
    assert_eq!(p.y, Some(6.0));
    assert!(p.width.is_none());
    assert!(p.height.is_none());
}

#[test]
fn partial_geometry_helper() {
    let p = PartialElement::geometry(1.0, 2.0, 3.0, 4.0);
    assert_eq!(p.width, Some(3.0));
    assert_eq!(p.height, Some(4.0));
}

#[test]
fn partial_serializes_only_present_fields() {
    let p = PartialElement::position(10.0, 20.0);
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json, json!({"x": 10.0, "y": 20.0}));
}

// =============================================================
// StyleBag
// =============================================================

#[test]
fn style_bag_background_color() {
    let styles = json!({"backgroundColor": "#3b82f6"});
    assert_eq!(StyleBag::new(&styles).background_color(), Some("#3b82f6"));
    let empty = json!({});
    assert!(StyleBag::new(&empty).background_color().is_none());
}

#[test]
fn style_bag_color_defaults() {
    let empty = json!({});
    assert_eq!(StyleBag::new(&empty).color(), "#1f2937");
}

#[test]
fn style_bag_font_size_parses_px_string() {
    let styles = json!({"fontSize": "36px"});
    assert_eq!(StyleBag::new(&styles).font_size(), Some(36.0));
}

#[test]
fn style_bag_font_size_accepts_number() {
    let styles = json!({"fontSize": 14.5});
    assert_eq!(StyleBag::new(&styles).font_size(), Some(14.5));
}

#[test]
fn style_bag_font_size_rejects_garbage() {
    let styles = json!({"fontSize": "large"});
    assert!(StyleBag::new(&styles).font_size().is_none());
}

#[test]
fn style_bag_border_radius_rejects_percent_and_multi_corner() {
    let percent = json!({"borderRadius": "50%"});
    assert!(StyleBag::new(&percent).border_radius().is_none());
    let multi = json!({"borderRadius": "20px 0px 20px 0px"});
    assert!(StyleBag::new(&multi).border_radius().is_none());
    let plain = json!({"borderRadius": "8px"});
    assert_eq!(StyleBag::new(&plain).border_radius(), Some(8.0));
}

#[test]
fn style_bag_border_shorthand() {
    let styles = json!({"border": "2px solid #1e40af"});
    let bag = StyleBag::new(&styles);
    assert_eq!(bag.border_color(), Some("#1e40af"));
    assert_eq!(bag.border_width(), Some(2.0));
}

#[test]
fn style_bag_border_without_hex_color() {
    let styles = json!({"border": "1px solid red"});
    assert!(StyleBag::new(&styles).border_color().is_none());
}
