use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("prompt '{0}' closed before a value was entered")]
    PromptClosed(String),

    #[error("track request rejected by daemon ({status}): {body}")]
    TrackRejected { status: u16, body: String },

    #[error("invalid sdk config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SdkError>;
