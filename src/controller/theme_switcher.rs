use std::sync::Arc;

use crate::page::{ElementId, Page};
use crate::storage::KeyValueStore;
use crate::types::ThemeMode;

pub const THEME_STORAGE_KEY: &str = "theme";

pub struct ThemeSwitcher {
    page: Page,
    store: Arc<dyn KeyValueStore>,
}

impl ThemeSwitcher {
    pub fn new(page: Page, store: Arc<dyn KeyValueStore>) -> Self {
        Self { page, store }
    }

    /// Applies the persisted theme, dark when nothing valid is stored.
    pub fn init(&self) -> ThemeMode {
        let theme = self
            .store
            .get(THEME_STORAGE_KEY)
            .and_then(|value| ThemeMode::parse(value.trim()))
            .unwrap_or_default();
        self.apply(theme);
        theme
    }

    pub fn toggle(&self) -> ThemeMode {
        let current = self.page.read(|state| state.document_theme);
        // A missing attribute counts as dark.
        let next = current.unwrap_or(ThemeMode::Dark).toggled();
        self.apply(next);
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, next.as_str()) {
            tracing::warn!(theme = %next, "failed to persist theme: {err}");
        }
        next
    }

    fn apply(&self, theme: ThemeMode) {
        self.page.update(|state| {
            state.document_theme = Some(theme);
            state.set_text(ElementId::ThemeToggle, theme.toggle_label());
        });
    }
}
