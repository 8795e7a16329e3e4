//! Headless model of the task desk page.
//!
//! Every element the controller touches is addressed by its [`ElementId`] and
//! carries the small slice of DOM state the behaviors read or write: text,
//! class list, visibility, attributes, dataset entries, disabled flag and
//! form value. The UI layer renders a [`PageState`] snapshot; the controller
//! mutates it through a shared [`Page`] handle.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::ThemeMode;

pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    ThemeToggle,
    UserTaskForm,
    StatusWindow,
    StatusMessage,
    LogContent,
    CheckStatusContainer,
    CheckStatusButton,
    ObjectIdResult,
    ObjectIdMessage,
    RewriteBtn,
    Description,
    Notification,
}

impl ElementId {
    pub const ALL: [ElementId; 12] = [
        ElementId::ThemeToggle,
        ElementId::UserTaskForm,
        ElementId::StatusWindow,
        ElementId::StatusMessage,
        ElementId::LogContent,
        ElementId::CheckStatusContainer,
        ElementId::CheckStatusButton,
        ElementId::ObjectIdResult,
        ElementId::ObjectIdMessage,
        ElementId::RewriteBtn,
        ElementId::Description,
        ElementId::Notification,
    ];

    /// The `id` attribute of the element in the page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::ThemeToggle => "themeToggle",
            ElementId::UserTaskForm => "userTaskForm",
            ElementId::StatusWindow => "statusWindow",
            ElementId::StatusMessage => "statusMessage",
            ElementId::LogContent => "logContent",
            ElementId::CheckStatusContainer => "checkStatusContainer",
            ElementId::CheckStatusButton => "checkStatusButton",
            ElementId::ObjectIdResult => "objectIdResult",
            ElementId::ObjectIdMessage => "objectIdMessage",
            ElementId::RewriteBtn => "rewriteBtn",
            ElementId::Description => "description",
            ElementId::Notification => "notification",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementState {
    pub text: String,
    pub value: String,
    pub disabled: bool,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub dataset: BTreeMap<String, String>,
}

impl ElementState {
    pub fn is_hidden(&self) -> bool {
        self.classes.contains(HIDDEN_CLASS)
    }

    pub fn hide(&mut self) {
        self.classes.insert(HIDDEN_CLASS.to_string());
    }

    pub fn show(&mut self) {
        self.classes.remove(HIDDEN_CLASS);
    }

    /// Replaces the whole class list, like assigning `className`.
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    pub fn class_name(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn hidden() -> Self {
        let mut element = Self::default();
        element.hide();
        element
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    /// `data-theme` on the document element; `None` until first applied.
    pub document_theme: Option<ThemeMode>,
    elements: BTreeMap<ElementId, ElementState>,
}

impl Default for PageState {
    /// Initial markup: result panels and the toast start hidden.
    fn default() -> Self {
        let elements = ElementId::ALL
            .into_iter()
            .map(|id| {
                let element = match id {
                    ElementId::StatusWindow
                    | ElementId::CheckStatusContainer
                    | ElementId::ObjectIdResult
                    | ElementId::Notification => ElementState::hidden(),
                    _ => ElementState::default(),
                };
                (id, element)
            })
            .collect();
        Self {
            document_theme: None,
            elements,
        }
    }
}

impl PageState {
    pub fn element(&self, id: ElementId) -> &ElementState {
        // Every id is inserted by `Default` and never removed.
        &self.elements[&id]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut ElementState {
        self.elements.entry(id).or_default()
    }

    pub fn text(&self, id: ElementId) -> &str {
        &self.element(id).text
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.element_mut(id).text = text.into();
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.element(id).is_hidden()
    }
}

/// Shared, cloneable handle to the page model.
///
/// Every mutation bumps a revision counter so a renderer can cheaply detect
/// that a fresh snapshot is needed.
#[derive(Clone, Default)]
pub struct Page {
    state: Arc<RwLock<PageState>>,
    revision: Arc<AtomicU64>,
}

impl Page {
    pub fn new(state: PageState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            revision: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&PageState) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let result = f(&mut state);
        self.revision.fetch_add(1, Ordering::Release);
        result
    }

    pub fn snapshot(&self) -> PageState {
        self.read(PageState::clone)
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_hides_panels() {
        let state = PageState::default();
        assert!(state.is_hidden(ElementId::StatusWindow));
        assert!(state.is_hidden(ElementId::CheckStatusContainer));
        assert!(state.is_hidden(ElementId::ObjectIdResult));
        assert!(state.is_hidden(ElementId::Notification));
        assert!(!state.is_hidden(ElementId::RewriteBtn));
        assert!(state.document_theme.is_none());
    }

    #[test]
    fn test_set_class_name_replaces_classes() {
        let mut element = ElementState::default();
        element.hide();
        element.set_class_name("error");
        assert!(!element.is_hidden());
        assert_eq!(element.class_name(), "error");

        element.set_class_name("");
        assert!(element.classes.is_empty());
    }

    #[test]
    fn test_update_bumps_revision() {
        let page = Page::default();
        let before = page.revision();
        page.update(|state| state.set_text(ElementId::StatusMessage, "hi"));
        assert!(page.revision() > before);
        assert_eq!(page.read(|s| s.text(ElementId::StatusMessage).to_string()), "hi");
    }

    #[test]
    fn test_element_ids_match_markup() {
        assert_eq!(ElementId::CheckStatusButton.as_str(), "checkStatusButton");
        assert_eq!(ElementId::RewriteBtn.as_str(), "rewriteBtn");
        assert_eq!(ElementId::ALL.len(), 12);
    }
}
