use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::page::{ElementId, Page};
use crate::types::NotificationKind;

pub const NOTIFICATION_HIDE_DELAY: Duration = Duration::from_millis(3000);

/// Transient toast shared by the page behaviors.
///
/// Each `show` cancels the hide timer of the previous one, so a toast is
/// always visible for the full delay.
pub struct NotificationPresenter {
    page: Page,
    delay: Duration,
    pending_hide: Mutex<Option<JoinHandle<()>>>,
}

impl NotificationPresenter {
    pub fn new(page: Page) -> Self {
        Self::with_delay(page, NOTIFICATION_HIDE_DELAY)
    }

    pub fn with_delay(page: Page, delay: Duration) -> Self {
        Self {
            page,
            delay,
            pending_hide: Mutex::new(None),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: &str, kind: NotificationKind) {
        self.page.update(|state| {
            let notification = state.element_mut(ElementId::Notification);
            notification.text = message.to_string();
            notification.set_class_name(match kind {
                NotificationKind::Error => "error",
                NotificationKind::Success => "",
            });
            notification.show();
        });

        let page = self.page.clone();
        let delay = self.delay;
        let hide = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            page.update(|state| state.element_mut(ElementId::Notification).hide());
        });

        let mut pending = self
            .pending_hide
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(hide) {
            previous.abort();
        }
    }
}

impl Drop for NotificationPresenter {
    fn drop(&mut self) {
        let pending = self
            .pending_hide
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
