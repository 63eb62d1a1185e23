//! Prompt-driven element generation.
//!
//! `generate` maps a free-text prompt onto a canned response table by keyword,
//! most specific first; an unmatched prompt yields the feature card. All
//! generated elements are containers whose content and style bag mimic the
//! requested component. `element_from_payload` decodes a JSON payload from an
//! external generation service, falling back to a plain container when the
//! payload does not parse.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use serde::Deserialize;
use serde_json::json;

use crate::consts::{DEFAULT_INSERT_X, DEFAULT_INSERT_Y};
use crate::element::{Element, ElementKind};

/// Build an element for a free-text prompt via keyword matching.
#[must_use]
pub fn generate(prompt: &str) -> Element {
    let p = prompt.to_lowercase();

    if p.contains("cta") || p.contains("call to action") {
        return cta_button();
    }
    if p.contains("ghost") && p.contains("button") {
        return ghost_button();
    }
    if p.contains("button") {
        return button();
    }
    if p.contains("hero") {
        return hero();
    }
    if p.contains("pricing") {
        return pricing_card();
    }
    if p.contains("testimonial") {
        return testimonial();
    }
    if p.contains("stats") || p.contains("statistics") {
        return stats_widget();
    }
    if p.contains("card") || p.contains("feature") {
        return card();
    }
    if p.contains("box") || p.contains("container") {
        return boxed();
    }

    card()
}

#[derive(Deserialize)]
struct Payload {
    #[serde(default)]
    kind: Option<ElementKind>,
    name: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    styles: Option<serde_json::Value>,
}

/// Decode an element from a generation-service JSON payload.
///
/// A payload that fails to parse yields a generic container so the insert
/// gesture still completes.
pub fn element_from_payload(payload: &str) -> Element {
    match serde_json::from_str::<Payload>(payload) {
        Ok(p) => {
            let mut element = Element::new(
                p.kind.unwrap_or(ElementKind::Container),
                DEFAULT_INSERT_X,
                DEFAULT_INSERT_Y,
                p.width.unwrap_or(200.0),
                p.height.unwrap_or(100.0),
            );
            element.name = p.name;
            element.content = p.content;
            if let Some(styles) = p.styles {
                element.styles = styles;
            }
            element
        }
        Err(err) => {
            log::warn!("unparseable generation payload: {err}");
            let mut element =
                Element::new(ElementKind::Container, DEFAULT_INSERT_X, DEFAULT_INSERT_Y, 200.0, 100.0);
            element.name = "AI Element".to_owned();
            element.content = Some("AI Generated Content".to_owned());
            element.styles = json!({
                "backgroundColor": "#f3f4f6",
                "borderRadius": "8px",
                "padding": "16px",
            });
            element
        }
    }
}

// --- Canned responses ---

fn build(
    name: &str,
    content: &str,
    width: f64,
    height: f64,
    styles: serde_json::Value,
) -> Element {
    let mut element =
        Element::new(ElementKind::Container, DEFAULT_INSERT_X, DEFAULT_INSERT_Y, width, height);
    element.name = name.to_owned();
    element.content = Some(content.to_owned());
    element.styles = styles;
    element
}

fn button() -> Element {
    build(
        "AI Button",
        "Get Started",
        140.0,
        44.0,
        json!({
            "backgroundColor": "#3b82f6",
            "color": "#ffffff",
            "padding": "12px 24px",
            "borderRadius": "8px",
            "fontSize": "14px",
            "fontWeight": "600",
            "textAlign": "center",
        }),
    )
}

fn cta_button() -> Element {
    build(
        "CTA Button",
        "Start Free Trial →",
        200.0,
        56.0,
        json!({
            "background": "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            "color": "#ffffff",
            "padding": "16px 32px",
            "borderRadius": "12px",
            "fontSize": "16px",
            "fontWeight": "700",
            "textAlign": "center",
            "boxShadow": "0 8px 25px rgba(102, 126, 234, 0.3)",
        }),
    )
}

fn ghost_button() -> Element {
    build(
        "Ghost Button",
        "Learn More",
        140.0,
        44.0,
        json!({
            "backgroundColor": "transparent",
            "color": "#374151",
            "padding": "12px 24px",
            "borderRadius": "8px",
            "fontSize": "14px",
            "fontWeight": "500",
            "textAlign": "center",
            "border": "2px solid #d1d5db",
        }),
    )
}

fn boxed() -> Element {
    build(
        "AI Container",
        "Content goes here\nAdd your text or elements",
        300.0,
        150.0,
        json!({
            "backgroundColor": "#f8fafc",
            "border": "1px solid #e2e8f0",
            "borderRadius": "12px",
            "padding": "24px",
            "fontSize": "14px",
            "color": "#64748b",
            "lineHeight": "1.6",
        }),
    )
}

fn card() -> Element {
    build(
        "Feature Card",
        "✨ Amazing Feature\nThis feature will revolutionize your workflow and boost productivity by 300%.\n\nLearn More →",
        320.0,
        200.0,
        json!({
            "backgroundColor": "#ffffff",
            "border": "1px solid #e5e7eb",
            "borderRadius": "16px",
            "padding": "32px",
            "fontSize": "15px",
            "color": "#374151",
            "lineHeight": "1.7",
            "boxShadow": "0 4px 6px rgba(0, 0, 0, 0.05)",
        }),
    )
}

fn hero() -> Element {
    build(
        "AI Hero Section",
        "🚀 Build amazing websites\nCreate stunning designs with our intuitive builder\n\nGet Started →",
        500.0,
        250.0,
        json!({
            "background": "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            "color": "#ffffff",
            "padding": "60px 40px",
            "borderRadius": "16px",
            "fontSize": "16px",
            "fontWeight": "500",
            "textAlign": "center",
            "lineHeight": "1.8",
        }),
    )
}

fn pricing_card() -> Element {
    build(
        "Pricing Card",
        "💎 Pro Plan\n$29/month\n\n✓ Unlimited projects\n✓ Advanced features\n✓ Priority support\n\nChoose Plan",
        280.0,
        320.0,
        json!({
            "backgroundColor": "#ffffff",
            "border": "2px solid #3b82f6",
            "borderRadius": "20px",
            "padding": "40px 24px",
            "fontSize": "14px",
            "color": "#374151",
            "lineHeight": "1.6",
            "textAlign": "center",
            "boxShadow": "0 10px 25px rgba(59, 130, 246, 0.15)",
        }),
    )
}

fn testimonial() -> Element {
    build(
        "Testimonial",
        "💬 \"This tool completely transformed our design process. We're now 5x faster!\"\n\n— Sarah Johnson, Design Lead at TechCorp",
        400.0,
        140.0,
        json!({
            "backgroundColor": "#f9fafb",
            "border": "1px solid #e5e7eb",
            "borderRadius": "16px",
            "borderLeft": "4px solid #10b981",
            "padding": "24px",
            "fontSize": "15px",
            "color": "#374151",
            "lineHeight": "1.6",
            "fontStyle": "italic",
        }),
    )
}

fn stats_widget() -> Element {
    build(
        "Stats Widget",
        "📊 Performance\n\n🚀 99.9% Uptime\n👥 10K+ Users\n⭐ 4.9/5 Rating\n📈 500% Growth",
        240.0,
        200.0,
        json!({
            "backgroundColor": "#1f2937",
            "color": "#ffffff",
            "borderRadius": "16px",
            "padding": "32px",
            "fontSize": "14px",
            "lineHeight": "1.8",
            "textAlign": "center",
        }),
    )
}
