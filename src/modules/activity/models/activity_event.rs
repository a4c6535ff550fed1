use serde::{Deserialize, Serialize};

use crate::core::error::AppError;

/// User interaction reported by a front end (app launch, contact click, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(default = "unknown_user")]
    pub user_name: String,
    /// e.g. `launch_app`, `contact`
    pub action: String,
    /// App or feature acted on
    pub target: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityReceipt {
    pub recorded: bool,
    pub recorded_at: String,
}

impl ActivityEvent {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.action.trim().is_empty() {
            return Err(AppError::validation("action must not be empty"));
        }
        if self.target.trim().is_empty() {
            return Err(AppError::validation("target must not be empty"));
        }
        Ok(())
    }
}

fn unknown_user() -> String {
    "Unknown User".to_string()
}
