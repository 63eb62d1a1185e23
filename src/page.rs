//! Page and project model: ordered element lists and page bookkeeping.
//!
//! A `Page` owns an ordered `Vec<Element>` — order is paint order, later
//! elements draw above earlier ones. Insertion appends; the only structural
//! mutation besides append is removal (there is no reorder operation). A
//! `Project` holds the ordered page list plus the current-page pointer.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::{Element, ElementId, PartialElement};

/// Unique identifier for a page.
pub type PageId = Uuid;

/// An identified, named, ordered sequence of elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
    elements: Vec<Element>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), elements: Vec::new() }
    }

    /// Append an element. Order is creation order; there is no reordering.
    pub fn insert(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let idx = self.elements.iter().position(|e| &e.id == id)?;
        Some(self.elements.remove(idx))
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Return a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Apply a sparse update to an element. Returns false if the id is unknown.
    pub fn apply_partial(&mut self, id: &ElementId, partial: &PartialElement) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        element.apply(partial);
        true
    }

    /// Move an element. Returns false if the id is unknown.
    pub fn set_position(&mut self, id: &ElementId, x: f64, y: f64) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        element.x = x;
        element.y = y;
        true
    }

    /// Resize an element. Returns false if the id is unknown.
    pub fn set_size(&mut self, id: &ElementId, width: f64, height: f64) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        element.width = width;
        element.height = height;
        true
    }

    /// Elements in paint order (bottom first).
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the page has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A builder project: ordered pages plus the current-page pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pages: Vec<Page>,
    current_page_id: PageId,
}

impl Project {
    /// Create a project with a single empty "Home" page, which is current.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let home = Page::new("Home");
        let current_page_id = home.id;
        Self { id: Uuid::new_v4(), name: name.into(), pages: vec![home], current_page_id }
    }

    /// Append a new empty page and return its id. Does not switch to it.
    pub fn add_page(&mut self, name: impl Into<String>) -> PageId {
        let page = Page::new(name);
        let id = page.id;
        self.pages.push(page);
        id
    }

    /// Switch the current page. Returns false (and keeps the pointer) if the
    /// id is unknown.
    pub fn switch_page(&mut self, id: &PageId) -> bool {
        if self.pages.iter().any(|p| &p.id == id) {
            self.current_page_id = *id;
            true
        } else {
            false
        }
    }

    /// Rename a page. Returns false if the id is unknown.
    pub fn rename_page(&mut self, id: &PageId, name: impl Into<String>) -> bool {
        let Some(page) = self.pages.iter_mut().find(|p| &p.id == id) else {
            return false;
        };
        page.name = name.into();
        true
    }

    /// The current page's id.
    #[must_use]
    pub fn current_page_id(&self) -> PageId {
        self.current_page_id
    }

    /// The current page. `None` only if the pointer is dangling, which the
    /// mutation API never produces.
    #[must_use]
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == self.current_page_id)
    }

    /// Mutable access to the current page.
    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == self.current_page_id)
    }

    /// All pages in creation order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}
