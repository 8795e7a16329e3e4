use crate::page::{ElementId, PageState};
use crate::ui::ControllerHandle;
use dioxus::prelude::*;

#[component]
pub fn StatusPanel(page: Signal<PageState>) -> Element {
    let controller = use_context::<ControllerHandle>();
    let snapshot = page();
    let window = snapshot.element(ElementId::StatusWindow);
    let check_container = snapshot.element(ElementId::CheckStatusContainer);
    let object_id_result = snapshot.element(ElementId::ObjectIdResult);
    let window_class = format!("status-window {}", window.class_name());
    let status_message = snapshot.text(ElementId::StatusMessage);
    let log_content = snapshot.text(ElementId::LogContent);
    let object_id_message = snapshot.text(ElementId::ObjectIdMessage);

    let on_check = move |_| {
        controller.run(|controller| async move {
            controller.check_status().await;
        });
    };

    rsx! {
        div {
            id: ElementId::StatusWindow.as_str(),
            class: window_class,
            h3 { "Status" }
            p { id: ElementId::StatusMessage.as_str(), "{status_message}" }
            pre {
                id: ElementId::LogContent.as_str(),
                class: "log-content",
                "{log_content}"
            }
            div {
                id: ElementId::CheckStatusContainer.as_str(),
                class: check_container.class_name(),
                button {
                    id: ElementId::CheckStatusButton.as_str(),
                    class: "btn",
                    r#type: "button",
                    onclick: on_check,
                    "Check Status"
                }
            }
            div {
                id: ElementId::ObjectIdResult.as_str(),
                class: object_id_result.class_name(),
                p {
                    id: ElementId::ObjectIdMessage.as_str(),
                    class: "object-id-message",
                    "{object_id_message}"
                }
            }
        }
    }
}
