pub mod status;
pub mod task_form;

pub use status::StatusPanel;
pub use task_form::TaskFormView;
