#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Breakpoint
// =============================================================

#[test]
fn breakpoint_default_is_desktop() {
    assert_eq!(Breakpoint::default(), Breakpoint::Desktop);
}

#[test]
fn breakpoint_desktop_size() {
    let size = Breakpoint::Desktop.canvas_size();
    assert_eq!(size.width, 1200.0);
    assert_eq!(size.height, 800.0);
}

#[test]
fn breakpoint_tablet_size() {
    let size = Breakpoint::Tablet.canvas_size();
    assert_eq!(size.width, 834.0);
    assert_eq!(size.height, 1194.0);
}

#[test]
fn breakpoint_phone_size() {
    let size = Breakpoint::Phone.canvas_size();
    assert_eq!(size.width, 390.0);
    assert_eq!(size.height, 844.0);
}

#[test]
fn breakpoint_from_tag_recognized() {
    assert_eq!(Breakpoint::from_tag("desktop"), Breakpoint::Desktop);
    assert_eq!(Breakpoint::from_tag("tablet"), Breakpoint::Tablet);
    assert_eq!(Breakpoint::from_tag("phone"), Breakpoint::Phone);
}

#[test]
fn breakpoint_from_tag_unrecognized_falls_back_to_desktop() {
    assert_eq!(Breakpoint::from_tag("watch"), Breakpoint::Desktop);
    assert_eq!(Breakpoint::from_tag(""), Breakpoint::Desktop);
    assert_eq!(Breakpoint::from_tag("DESKTOP"), Breakpoint::Desktop);
}

#[test]
fn breakpoint_serde_lowercase() {
    let json = serde_json::to_string(&Breakpoint::Phone).unwrap();
    assert_eq!(json, "\"phone\"");
    let parsed: Breakpoint = serde_json::from_str("\"tablet\"").unwrap();
    assert_eq!(parsed, Breakpoint::Tablet);
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn viewport_default_is_desktop_at_full_zoom() {
    let vp = Viewport::default();
    assert_eq!(vp.breakpoint, Breakpoint::Desktop);
    assert_eq!(vp.zoom_percent, 100.0);
    assert_eq!(vp.scale(), 1.0);
}

#[test]
fn viewport_scale_from_percent() {
    let vp = Viewport { breakpoint: Breakpoint::Desktop, zoom_percent: 50.0 };
    assert_eq!(vp.scale(), 0.5);
}

#[test]
fn viewport_set_zoom_clamps_low() {
    let mut vp = Viewport::default();
    vp.set_zoom_percent(1.0);
    assert_eq!(vp.zoom_percent, 10.0);
}

#[test]
fn viewport_set_zoom_clamps_high() {
    let mut vp = Viewport::default();
    vp.set_zoom_percent(9999.0);
    assert_eq!(vp.zoom_percent, 400.0);
}

#[test]
fn viewport_screen_to_canvas_identity_at_full_zoom() {
    let vp = Viewport::default();
    let p = vp.screen_to_canvas(Point::new(120.0, 80.0));
    assert_eq!(p, Point::new(120.0, 80.0));
}

#[test]
fn viewport_screen_to_canvas_divides_by_scale() {
    let vp = Viewport { breakpoint: Breakpoint::Desktop, zoom_percent: 200.0 };
    let p = vp.screen_to_canvas(Point::new(100.0, 50.0));
    assert_eq!(p, Point::new(50.0, 25.0));
}

#[test]
fn viewport_canvas_to_screen_roundtrip() {
    let vp = Viewport { breakpoint: Breakpoint::Phone, zoom_percent: 75.0 };
    let original = Point::new(33.0, 99.0);
    let roundtripped = vp.screen_to_canvas(vp.canvas_to_screen(original));
    assert!((roundtripped.x - original.x).abs() < 1e-9);
    assert!((roundtripped.y - original.y).abs() < 1e-9);
}

#[test]
fn viewport_screen_dist_to_canvas() {
    let vp = Viewport { breakpoint: Breakpoint::Desktop, zoom_percent: 200.0 };
    assert_eq!(vp.screen_dist_to_canvas(16.0), 8.0);
}

#[test]
fn viewport_canvas_size_tracks_breakpoint() {
    let vp = Viewport { breakpoint: Breakpoint::Tablet, zoom_percent: 100.0 };
    assert_eq!(vp.canvas_size().width, 834.0);
}
