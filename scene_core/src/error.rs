//! Scene-level errors.

use site_rules::SiteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    /// Site data lookup failed. During dispatch this means the context refers
    /// to a node its site does not know.
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("unknown event action `{0}`")]
    UnknownAction(String),

    #[error("unknown input token `{0}`")]
    UnknownKey(String),

    #[error("invalid key binding `{0}`")]
    InvalidBinding(String),

    #[error("failed to parse input config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
