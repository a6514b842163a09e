use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("op kind not recognized: '{0}' (expected 'command' or 'service')")]
    KindNotRecognized(String),

    #[error("no template matches '{0}'")]
    TemplateNotFound(String),

    #[error("op name must be a non-empty string of letters, digits, '-' or '_', got '{0}'")]
    NameInvalid(String),

    #[error("op version must start with a letter, digit or '_' and be at most 128 characters, got '{0}'")]
    VersionInvalid(String),

    #[error("destination is not empty: {}", .0.display())]
    DestinationNotEmpty(PathBuf),

    #[error("failed to render template file '{file}': {source}")]
    Render {
        file: String,
        #[source]
        source: tera::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
