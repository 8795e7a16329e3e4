use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parses a stored attribute value; anything other than the two known
    /// modes yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label for the toggle control, naming the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskSubmissionResult {
    pub status: String,
    pub message: String,
    #[serde(rename = "taskId", default)]
    pub task_id: Option<String>,
    #[serde(rename = "taskName", default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub log: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectIdResult {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewriteResult {
    pub status: String,
    #[serde(default)]
    pub rewritten_description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RewriteResult {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Structured body carried by a non-2xx response. The server fills in
/// whichever fields it has.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub log: Option<String>,
}

impl ErrorBody {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

pub const ASSIGNEES: &[&str] = &[
    "Bernadett Forró",
    "János Földvárszki",
    "Ildikó Nagy",
    "Károly Kürti",
];

/// Fields of the user task form, in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskForm {
    pub name: String,
    pub assigned_to: String,
    pub category: String,
    pub due_date: String,
    pub description: String,
}

impl TaskForm {
    pub fn fields(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.clone()),
            ("assignedTo".to_string(), self.assigned_to.clone()),
            ("category".to_string(), self.category.clone()),
            ("dueDate".to_string(), self.due_date.clone()),
            ("description".to_string(), self.description.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_and_label() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark Mode");
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light Mode");
    }

    #[test]
    fn test_theme_parse_rejects_unknown() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("octane"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn test_submission_result_optional_fields() {
        let parsed: TaskSubmissionResult =
            serde_json::from_str(r#"{"status":"success","message":"ok","log":"l"}"#).unwrap();
        assert!(parsed.task_id.is_none());
        assert!(parsed.task_name.is_none());

        let parsed: TaskSubmissionResult = serde_json::from_str(
            r#"{"status":"success","message":"ok","taskId":"T1","taskName":"TASK_ID: T1 - x","log":""}"#,
        )
        .unwrap();
        assert_eq!(parsed.task_id.as_deref(), Some("T1"));
        assert_eq!(parsed.task_name.as_deref(), Some("TASK_ID: T1 - x"));
    }

    #[test]
    fn test_submission_result_null_task_id() {
        let parsed: TaskSubmissionResult = serde_json::from_str(
            r#"{"status":"error","message":"boom","taskId":null,"taskName":null,"log":"trace"}"#,
        )
        .unwrap();
        assert!(parsed.task_id.is_none());
    }

    #[test]
    fn test_error_body_parse() {
        let body = ErrorBody::parse(r#"{"status":"error","message":"bad"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("bad"));
        assert!(body.log.is_none());
        assert!(ErrorBody::parse("<html>").is_none());
    }

    #[test]
    fn test_task_form_fields_order() {
        let form = TaskForm {
            name: "Fix".into(),
            assigned_to: ASSIGNEES[0].into(),
            ..Default::default()
        };
        let keys: Vec<_> = form.fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["name", "assignedTo", "category", "dueDate", "description"]
        );
    }
}
