/// Page controller for the task desk
///
/// Each behavior is an explicit component holding the collaborators it
/// needs, so it can be driven in isolation:
///
/// - `theme_switcher` - light/dark toggle persisted to the key-value store
/// - `task_submitter` - posts the task form and renders status and log
/// - `status_checker` - looks up the object id of the submitted task
/// - `description_rewriter` - swaps the description for a rewritten one
/// - `notification` - transient toast shared by the above
///
/// # Usage
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use taskdesk::controller::UIController;
/// use taskdesk::http::ReqwestClient;
/// use taskdesk::page::Page;
/// use taskdesk::storage::MemoryStore;
///
/// # async fn example() {
/// let controller = UIController::new(
///     Page::default(),
///     Arc::new(ReqwestClient::new("http://127.0.0.1:5000")),
///     Arc::new(MemoryStore::new()),
/// );
/// controller.init();
/// controller.rewrite_description().await;
/// # }
/// ```
pub mod description_rewriter;
pub mod notification;
pub mod status_checker;
pub mod task_submitter;
pub mod theme_switcher;

use std::sync::Arc;

pub use description_rewriter::{DescriptionRewriter, RewriteOutcome};
pub use notification::NotificationPresenter;
pub use status_checker::StatusChecker;
pub use task_submitter::TaskSubmitter;
pub use theme_switcher::ThemeSwitcher;

use crate::http::HttpClient;
use crate::page::Page;
use crate::storage::KeyValueStore;
use crate::types::{TaskForm, ThemeMode};

pub struct UIController {
    page: Page,
    theme: ThemeSwitcher,
    submitter: TaskSubmitter,
    checker: StatusChecker,
    rewriter: DescriptionRewriter,
    notifications: Arc<NotificationPresenter>,
}

impl UIController {
    pub fn new(page: Page, http: Arc<dyn HttpClient>, store: Arc<dyn KeyValueStore>) -> Self {
        let notifications = Arc::new(NotificationPresenter::new(page.clone()));
        Self::with_notifications(page, http, store, notifications)
    }

    pub fn with_notifications(
        page: Page,
        http: Arc<dyn HttpClient>,
        store: Arc<dyn KeyValueStore>,
        notifications: Arc<NotificationPresenter>,
    ) -> Self {
        Self {
            theme: ThemeSwitcher::new(page.clone(), store),
            submitter: TaskSubmitter::new(page.clone(), http.clone()),
            checker: StatusChecker::new(page.clone(), http.clone()),
            rewriter: DescriptionRewriter::new(page.clone(), http, notifications.clone()),
            notifications,
            page,
        }
    }

    /// Page-load setup: applies the persisted theme.
    pub fn init(&self) -> ThemeMode {
        let theme = self.theme.init();
        tracing::debug!(%theme, "page controller initialised");
        theme
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn notifications(&self) -> &NotificationPresenter {
        &self.notifications
    }

    pub fn toggle_theme(&self) -> ThemeMode {
        self.theme.toggle()
    }

    pub async fn submit_task(&self, form: &TaskForm) {
        self.submitter.submit(form).await;
    }

    pub async fn check_status(&self) {
        self.checker.check().await;
    }

    pub async fn rewrite_description(&self) -> RewriteOutcome {
        self.rewriter.rewrite().await
    }
}
