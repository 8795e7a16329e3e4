use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_class: "theme-toggle",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_class: "theme-toggle theme-toggle-light",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #11191f;
    --color-bg-secondary: #18232c;
    --color-text-primary: #edf0f3;
    --color-text-muted: #a2afb9;
    --color-border: #374956;
    --color-input-bg: #11191f;
    --color-input-border: #374956;
    --color-accent: #1095c1;
    --color-log-bg: #0b1014;
    --color-toast-bg: #2a3a45;
    --color-toast-error-bg: #b71c1c;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.log-content { background: var(--color-log-bg); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f4f6f8;
    --color-text-primary: #11191f;
    --color-text-muted: #5d6b76;
    --color-border: #d5dce2;
    --color-input-bg: #ffffff;
    --color-input-border: #c2ccd4;
    --color-accent: #1095c1;
    --color-log-bg: #f4f6f8;
    --color-toast-bg: #11191f;
    --color-toast-error-bg: #d32f2f;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.log-content { background: var(--color-log-bg); }
"#;
