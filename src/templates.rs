//! Composite template elements: menus and navigation bars.
//!
//! Each template is a single container element whose `content` is a multi-line
//! rendering hint and whose style bag carries the CSS-flavored presentation
//! the host applies when exporting. Unknown template names fall back to a
//! generic variant rather than failing.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use serde_json::json;

use crate::element::{Element, ElementKind};

/// Left/top used by menu templates, below the default navigation position.
const MENU_X: f64 = 50.0;
const MENU_Y: f64 = 150.0;

/// Navigation bars span the full desktop page width just under the top edge.
const NAV_X: f64 = 0.0;
const NAV_Y: f64 = 50.0;
const NAV_WIDTH: f64 = 1200.0;
const NAV_HEIGHT: f64 = 60.0;

/// Build a menu element for the given template name.
#[must_use]
pub fn menu(template_name: &str) -> Element {
    let (content, width, height, styles) = match template_name {
        "Menu Dropdown" => (
            "PRODUCT\nDesign - An infinite canvas\nContent - Create your first blog\nPublish - Go live within seconds\n\nRESOURCES\nBlog - Interviews and how-tos\nUpdates - Features and bug fixes\nDocumentation - Get started with our API",
            320.0,
            260.0,
            json!({
                "backgroundColor": "#ffffff",
                "borderRadius": "12px",
                "padding": "24px",
                "border": "1px solid #e5e7eb",
                "boxShadow": "0 10px 25px rgba(0,0,0,0.1)",
                "fontSize": "14px",
                "color": "#374151",
                "lineHeight": "1.6",
            }),
        ),
        "Menu Sidebar" => (
            "☰ MENU\n\n🎨 Design\nAn infinite canvas\n\n📝 Content\nCreate your first blog\n\n🚀 Publish\nGo live within seconds\n\n📚 Resources\nBlog & Documentation",
            280.0,
            400.0,
            json!({
                "backgroundColor": "#f8fafc",
                "borderRadius": "0px",
                "padding": "20px",
                "borderRight": "1px solid #e5e7eb",
                "fontSize": "14px",
                "color": "#374151",
                "lineHeight": "1.8",
            }),
        ),
        "Menu Grid" => (
            "PRODUCT\n\n🎨 Design\nInfinite canvas\n\n📝 Content\nFirst blog\n\n🚀 Publish\nGo live\n\n📦 API\nDevelopers",
            360.0,
            200.0,
            json!({
                "backgroundColor": "#ffffff",
                "borderRadius": "16px",
                "padding": "32px",
                "border": "1px solid #e5e7eb",
                "boxShadow": "0 4px 6px rgba(0,0,0,0.05)",
                "fontSize": "14px",
                "color": "#374151",
                "lineHeight": "1.5",
            }),
        ),
        "Menu Cards" => (
            "🎨 Design\nAn infinite canvas for creativity\n\n📝 Content\nCreate and manage your blog\n\n🚀 Publish\nGo live within seconds",
            400.0,
            180.0,
            json!({
                "backgroundColor": "#ffffff",
                "borderRadius": "20px",
                "padding": "24px",
                "boxShadow": "0 8px 30px rgba(0,0,0,0.12)",
                "fontSize": "15px",
                "color": "#1f2937",
                "lineHeight": "1.7",
            }),
        ),
        "Menu Tabs" => (
            "Design | Content | Publish\n\n🎨 DESIGN TOOLS\nCreate with an infinite canvas\nComponents and interactions\nResponsive breakpoints\n\n📱 PREVIEW MODE\nSee your work come to life",
            380.0,
            160.0,
            json!({
                "backgroundColor": "#ffffff",
                "borderRadius": "12px",
                "padding": "20px",
                "border": "1px solid #e5e7eb",
                "borderTop": "3px solid #3b82f6",
                "fontSize": "14px",
                "color": "#374151",
                "lineHeight": "1.6",
            }),
        ),
        _ => (
            "Menu Items\nOption 1\nOption 2\nOption 3",
            200.0,
            120.0,
            json!({
                "backgroundColor": "#ffffff",
                "borderRadius": "8px",
                "padding": "16px",
                "border": "1px solid #e5e7eb",
                "fontSize": "14px",
                "color": "#374151",
            }),
        ),
    };

    build(template_name, content, MENU_X, MENU_Y, width, height, styles)
}

/// Build a navigation bar element for the given template name.
#[must_use]
pub fn navigation(template_name: &str) -> Element {
    let (content, styles) = match template_name {
        "Navigation Horizontal" => (
            "🐦 Features | Discover | Gallery | Templates | Updates | Downloads | Blog | About | Careers",
            json!({
                "padding": "16px 40px",
                "backgroundColor": "#ffffff",
                "borderBottom": "1px solid #f0f0f0",
                "fontSize": "15px",
                "color": "#666666",
                "boxShadow": "0 1px 3px rgba(0,0,0,0.1)",
            }),
        ),
        "Navigation Minimal" => (
            "🐦 Features | Discover | Gallery | Templates | Updates",
            json!({
                "padding": "20px 40px",
                "backgroundColor": "#ffffff",
                "fontSize": "15px",
                "color": "#333333",
            }),
        ),
        "Navigation Split" => (
            "🐦 Product ▽ | Resources ▽ | Community ▽ | Changelog | Pricing",
            json!({
                "padding": "16px 40px",
                "backgroundColor": "#ffffff",
                "borderBottom": "1px solid #f0f0f0",
                "fontSize": "15px",
                "color": "#666666",
            }),
        ),
        _ => (
            "🐦 Features | Gallery | Templates",
            json!({
                "padding": "16px 40px",
                "backgroundColor": "#ffffff",
                "fontSize": "15px",
                "color": "#666666",
            }),
        ),
    };

    build(template_name, content, NAV_X, NAV_Y, NAV_WIDTH, NAV_HEIGHT, styles)
}

fn build(
    name: &str,
    content: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    styles: serde_json::Value,
) -> Element {
    let mut element = Element::new(ElementKind::Container, x, y, width, height);
    element.name = name.to_owned();
    element.content = Some(content.to_owned());
    element.styles = styles;
    element
}
