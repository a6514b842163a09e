use serde::Serialize;

pub const EVENT_NAME: &str = "deployment";
pub const EVENT_ACTION: &str = "succeeded";
pub const BRANCH: &str = "main";

/// Record describing one deployment outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentEvent {
    pub event_name: String,
    pub event_action: String,
    pub branch: String,
    pub repo: String,
}

impl DeploymentEvent {
    /// A successful deployment of `repo` from the main branch.
    pub fn succeeded(repo: impl Into<String>) -> Self {
        Self {
            event_name: EVENT_NAME.to_string(),
            event_action: EVENT_ACTION.to_string(),
            branch: BRANCH.to_string(),
            repo: repo.into(),
        }
    }

    pub fn confirmation(&self) -> String {
        format!("🚀 {}'s successful deployment has been recorded!", self.repo)
    }
}
