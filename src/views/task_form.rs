use crate::page::{ElementId, PageState};
use crate::types::{ASSIGNEES, TaskForm};
use crate::ui::ControllerHandle;
use dioxus::prelude::*;

const CATEGORIES: &[&str] = &["Correction", "New Request", "Question", "Other"];

#[component]
pub fn TaskFormView(page: Signal<PageState>) -> Element {
    let mut page = page;
    let controller = use_context::<ControllerHandle>();
    let mut name = use_signal(String::new);
    let mut assigned_to = use_signal(|| ASSIGNEES[0].to_string());
    let mut category = use_signal(|| CATEGORIES[0].to_string());
    let mut due_date = use_signal(String::new);

    let snapshot = page();
    let description = snapshot.element(ElementId::Description).value.clone();
    let rewrite_btn = snapshot.element(ElementId::RewriteBtn);
    let rewrite_disabled = rewrite_btn.disabled;
    let rewrite_busy = rewrite_btn.attributes.get("aria-busy").cloned();

    let submit_controller = controller.clone();
    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let form = TaskForm {
            name: name(),
            assigned_to: assigned_to(),
            category: category(),
            due_date: due_date(),
            description: submit_controller
                .0
                .page()
                .read(|state| state.element(ElementId::Description).value.clone()),
        };
        submit_controller.run(move |controller| async move {
            controller.submit_task(&form).await;
        });
    };

    let input_controller = controller.clone();
    let on_description_input = move |ev: FormEvent| {
        let value = ev.value();
        input_controller.0.page().update(|state| {
            state.element_mut(ElementId::Description).value = value.clone();
        });
        page.with_mut(|state| state.element_mut(ElementId::Description).value = value);
    };

    let rewrite_controller = controller.clone();
    let on_rewrite = move |_| {
        rewrite_controller.run(|controller| async move {
            controller.rewrite_description().await;
        });
    };

    rsx! {
        form {
            id: ElementId::UserTaskForm.as_str(),
            class: "task-form",
            onsubmit: on_submit,
            label { r#for: "name", "Task name" }
            input {
                id: "name",
                name: "name",
                r#type: "text",
                required: true,
                value: "{name}",
                oninput: move |ev| name.set(ev.value()),
            }
            label { r#for: "assignedTo", "Assigned to" }
            select {
                id: "assignedTo",
                name: "assignedTo",
                value: "{assigned_to}",
                onchange: move |ev| assigned_to.set(ev.value()),
                for assignee in ASSIGNEES.iter() {
                    option { value: "{assignee}", "{assignee}" }
                }
            }
            label { r#for: "category", "Category" }
            select {
                id: "category",
                name: "category",
                value: "{category}",
                onchange: move |ev| category.set(ev.value()),
                for option_label in CATEGORIES.iter() {
                    option { value: "{option_label}", "{option_label}" }
                }
            }
            label { r#for: "dueDate", "Due date" }
            input {
                id: "dueDate",
                name: "dueDate",
                r#type: "date",
                value: "{due_date}",
                oninput: move |ev| due_date.set(ev.value()),
            }
            label { r#for: ElementId::Description.as_str(), "Description" }
            textarea {
                id: ElementId::Description.as_str(),
                name: "description",
                value: "{description}",
                oninput: on_description_input,
            }
            div { class: "form-actions",
                button {
                    id: ElementId::RewriteBtn.as_str(),
                    class: "btn",
                    r#type: "button",
                    disabled: rewrite_disabled,
                    aria_busy: rewrite_busy,
                    onclick: on_rewrite,
                    "Rewrite with Gemini"
                }
                button { class: "btn btn-primary", r#type: "submit", "Submit Task" }
            }
        }
    }
}
