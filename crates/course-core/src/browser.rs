//! Session state for the course browser.
//!
//! Owns the injected catalog plus everything the user can change: the
//! search query, the dark-mode flag, which cards are expanded and which
//! card is selected. The visible list is always derived from the query,
//! never stored.

use crate::catalog::Catalog;
use crate::course::Course;
use crate::filter::filter_courses;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    query: String,
    dark_mode: bool,
    /// Codes of expanded cards. Only ever holds visible codes.
    expanded: HashSet<String>,
    selected: usize,
}

impl Browser {
    pub fn new(catalog: Catalog, dark_mode: bool) -> Self {
        Self {
            catalog,
            query: String::new(),
            dark_mode,
            expanded: HashSet::new(),
            selected: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> Vec<&Course> {
        filter_courses(&self.query, self.catalog.courses())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.on_query_changed();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.on_query_changed();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.on_query_changed();
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    fn on_query_changed(&mut self) {
        let visible: HashSet<String> = self.visible().iter().map(|c| c.code.clone()).collect();
        // Cards that left the list are gone; their expanded flag goes with them.
        self.expanded.retain(|code| visible.contains(code));
        self.selected = 0;
        tracing::debug!(query = %self.query, matches = visible.len(), "query changed");
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "theme toggled");
        self.dark_mode
    }

    pub fn is_expanded(&self, code: &str) -> bool {
        self.expanded.contains(code)
    }

    /// Flips one visible card. Returns the new flag; unknown or hidden codes stay collapsed.
    pub fn toggle_expanded(&mut self, code: &str) -> bool {
        if !self.visible().iter().any(|c| c.code == code) {
            return false;
        }
        let expanded = if self.expanded.remove(code) {
            false
        } else {
            self.expanded.insert(code.to_string());
            true
        };
        tracing::debug!(code, expanded, "card toggled");
        expanded
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.visible().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    pub fn toggle_selected(&mut self) -> Option<bool> {
        let code = self.selected_course()?.code.clone();
        Some(self.toggle_expanded(&code))
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new(Catalog::builtin(), false)
    }
}
