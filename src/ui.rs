use crate::config::AppConfig;
use crate::controller::UIController;
use crate::http::ReqwestClient;
use crate::page::{ElementId, Page, PageState};
use crate::storage::KeyValueStore;
use crate::theme::theme_definition;
use crate::views::{StatusPanel, TaskFormView};
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::Duration;

const TASKDESK_CSS: Asset = asset!("/assets/taskdesk.css");
const PAGE_REFRESH_INTERVAL: Duration = Duration::from_millis(50);

/// Controller shared with the views through context.
#[derive(Clone)]
pub struct ControllerHandle(pub Arc<UIController>);

impl ControllerHandle {
    /// Runs an async controller action on the UI task.
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(Arc<UIController>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        let future = action(self.0.clone());
        spawn(future);
    }
}

fn build_controller() -> UIController {
    let config = AppConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!("invalid configuration, using defaults: {err}");
        AppConfig {
            server_url: crate::config::DEFAULT_SERVER_URL.to_string(),
            storage_dir: None,
        }
    });
    tracing::info!(server_url = %config.server_url, "starting task desk");

    let http = Arc::new(ReqwestClient::new(config.server_url.clone()));
    UIController::new(Page::default(), http, preference_store(&config))
}

#[cfg(not(target_arch = "wasm32"))]
fn preference_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    use crate::storage::FileStore;
    match &config.storage_dir {
        Some(dir) => Arc::new(FileStore::new(dir.clone())),
        None => Arc::new(FileStore::in_data_dir()),
    }
}

#[cfg(target_arch = "wasm32")]
fn preference_store(_config: &AppConfig) -> Arc<dyn KeyValueStore> {
    Arc::new(crate::storage::MemoryStore::new())
}

#[component]
pub fn App() -> Element {
    let controller = use_hook(|| {
        let controller = Arc::new(build_controller());
        controller.init();
        ControllerHandle(controller)
    });
    use_context_provider(|| controller.clone());

    let page = use_signal(|| controller.0.page().snapshot());
    use_page_refresh(controller.0.page().clone(), page);

    let snapshot = page();
    let theme = snapshot.document_theme.unwrap_or_default();
    let definition = theme_definition(theme);
    let notification = snapshot.element(ElementId::Notification);

    rsx! {
        document::Link { rel: "stylesheet", href: TASKDESK_CSS }
        style { dangerous_inner_html: "{definition.css}" }
        div { "data-theme": theme.as_str(),
            AppHeader { page }
            div { class: "main-container",
                TaskFormView { page }
                StatusPanel { page }
            }
            div {
                id: ElementId::Notification.as_str(),
                class: notification.class_name(),
                role: "status",
                "{notification.text}"
            }
        }
    }
}

/// Copies the shared page model into the render signal whenever it changes.
fn use_page_refresh(source: Page, page: Signal<PageState>) {
    use_future(move || {
        let source = source.clone();
        let mut page = page;
        async move {
            let mut seen = source.revision();
            loop {
                tokio::time::sleep(PAGE_REFRESH_INTERVAL).await;
                let revision = source.revision();
                if revision != seen {
                    seen = revision;
                    page.set(source.snapshot());
                }
            }
        }
    });
}

#[component]
fn AppHeader(page: Signal<PageState>) -> Element {
    let controller = use_context::<ControllerHandle>();
    let snapshot = page();
    let theme = snapshot.document_theme.unwrap_or_default();
    let definition = theme_definition(theme);
    let toggle_class = format!("btn {}", definition.toggle_class);
    let toggle_label = snapshot.text(ElementId::ThemeToggle);
    rsx! {
        div { class: "header",
            h1 { "Task Desk" }
            button {
                id: ElementId::ThemeToggle.as_str(),
                class: toggle_class,
                r#type: "button",
                onclick: move |_| {
                    controller.0.toggle_theme();
                },
                "{toggle_label}"
            }
        }
    }
}
