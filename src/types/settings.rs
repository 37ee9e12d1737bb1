use serde::{Deserialize, Serialize};

/// User-tunable shell behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSettings {
    /// Location the view layer is directed to load when a session starts.
    pub start_page: String,
    /// Whether the session logs the full visited list after each history change.
    pub log_history: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            start_page: "about:blank".to_string(),
            log_history: true,
        }
    }
}
