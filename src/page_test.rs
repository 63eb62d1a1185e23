#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::element::ElementKind;

fn rect_at(x: f64, y: f64) -> Element {
    Element::new(ElementKind::Rectangle, x, y, 100.0, 80.0)
}

// =============================================================
// Page: insertion and lookup
// =============================================================

#[test]
fn page_new_is_empty() {
    let page = Page::new("Home");
    assert!(page.is_empty());
    assert_eq!(page.len(), 0);
    assert_eq!(page.name, "Home");
}

#[test]
fn page_insert_appends_in_order() {
    let mut page = Page::new("Home");
    let a = rect_at(0.0, 0.0);
    let b = rect_at(10.0, 10.0);
    let (id_a, id_b) = (a.id, b.id);
    page.insert(a);
    page.insert(b);

    let ids: Vec<ElementId> = page.elements().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![id_a, id_b]);
}

#[test]
fn page_get_finds_element() {
    let mut page = Page::new("Home");
    let el = rect_at(5.0, 6.0);
    let id = el.id;
    page.insert(el);
    assert_eq!(page.get(&id).map(|e| e.x), Some(5.0));
}

#[test]
fn page_get_missing_returns_none() {
    let page = Page::new("Home");
    assert!(page.get(&Uuid::new_v4()).is_none());
}

// =============================================================
// Page: removal
// =============================================================

#[test]
fn page_remove_returns_element_and_preserves_order() {
    let mut page = Page::new("Home");
    let a = rect_at(0.0, 0.0);
    let b = rect_at(1.0, 1.0);
    let c = rect_at(2.0, 2.0);
    let (id_a, id_b, id_c) = (a.id, b.id, c.id);
    page.insert(a);
    page.insert(b);
    page.insert(c);

    let removed = page.remove(&id_b);
    assert_eq!(removed.map(|e| e.id), Some(id_b));

    let ids: Vec<ElementId> = page.elements().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![id_a, id_c]);
}

#[test]
fn page_remove_missing_returns_none() {
    let mut page = Page::new("Home");
    assert!(page.remove(&Uuid::new_v4()).is_none());
}

// =============================================================
// Page: mutation helpers
// =============================================================

#[test]
fn page_apply_partial_updates_element() {
    let mut page = Page::new("Home");
    let el = rect_at(0.0, 0.0);
    let id = el.id;
    page.insert(el);

    let ok = page.apply_partial(&id, &PartialElement::position(40.0, 50.0));
    assert!(ok);
    assert_eq!(page.get(&id).map(|e| (e.x, e.y)), Some((40.0, 50.0)));
}

#[test]
fn page_apply_partial_unknown_id_is_noop() {
    let mut page = Page::new("Home");
    assert!(!page.apply_partial(&Uuid::new_v4(), &PartialElement::position(1.0, 2.0)));
}

#[test]
fn page_set_position_and_size() {
    let mut page = Page::new("Home");
    let el = rect_at(0.0, 0.0);
    let id = el.id;
    page.insert(el);

    assert!(page.set_position(&id, 7.0, 8.0));
    assert!(page.set_size(&id, 300.0, 150.0));
    let el = page.get(&id).unwrap();
    assert_eq!((el.x, el.y, el.width, el.height), (7.0, 8.0, 300.0, 150.0));
}

#[test]
fn page_set_position_unknown_id_returns_false() {
    let mut page = Page::new("Home");
    assert!(!page.set_position(&Uuid::new_v4(), 0.0, 0.0));
    assert!(!page.set_size(&Uuid::new_v4(), 10.0, 10.0));
}

// =============================================================
// Project: pages
// =============================================================

#[test]
fn project_new_has_home_page_current() {
    let project = Project::new("Portfolio");
    assert_eq!(project.pages().len(), 1);
    assert_eq!(project.pages()[0].name, "Home");
    assert_eq!(project.current_page_id(), project.pages()[0].id);
    assert!(project.current_page().is_some());
}

#[test]
fn project_add_page_appends_without_switching() {
    let mut project = Project::new("Portfolio");
    let home = project.current_page_id();
    let about = project.add_page("About");

    assert_eq!(project.pages().len(), 2);
    assert_eq!(project.current_page_id(), home);
    assert_ne!(about, home);
}

#[test]
fn project_switch_page_moves_pointer() {
    let mut project = Project::new("Portfolio");
    let about = project.add_page("About");
    assert!(project.switch_page(&about));
    assert_eq!(project.current_page_id(), about);
}

#[test]
fn project_switch_to_unknown_page_keeps_pointer() {
    let mut project = Project::new("Portfolio");
    let home = project.current_page_id();
    assert!(!project.switch_page(&Uuid::new_v4()));
    assert_eq!(project.current_page_id(), home);
}

#[test]
fn project_rename_page() {
    let mut project = Project::new("Portfolio");
    let home = project.current_page_id();
    assert!(project.rename_page(&home, "Landing"));
    assert_eq!(project.pages()[0].name, "Landing");
}

#[test]
fn project_rename_unknown_page_returns_false() {
    let mut project = Project::new("Portfolio");
    assert!(!project.rename_page(&Uuid::new_v4(), "X"));
}

#[test]
fn project_current_page_mut_edits_current_only() {
    let mut project = Project::new("Portfolio");
    let about = project.add_page("About");
    project.switch_page(&about);

    if let Some(page) = project.current_page_mut() {
        page.insert(rect_at(0.0, 0.0));
    }

    assert_eq!(project.pages()[0].len(), 0);
    assert_eq!(project.pages()[1].len(), 1);
}
