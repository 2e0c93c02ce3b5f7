//! Errors raised while loading or querying site data.

use thiserror::Error;

use crate::site::{Level, SiteId};

#[derive(Debug, Error)]
pub enum SiteError {
    /// Metadata was requested for an id that is not in the site's node table.
    #[error("node `{id}` not found in site {site}")]
    NodeNotFound { id: String, site: SiteId },

    #[error("level {level} is outside site {site} (1..={max})")]
    LevelOutOfRange { level: Level, site: SiteId, max: u8 },

    #[error("invalid level `{0}`")]
    InvalidLevel(String),

    #[error("unknown site `{0}`")]
    UnknownSite(String),

    #[error("malformed layout: {0}")]
    MalformedLayout(String),

    #[error("failed to parse site data: {0}")]
    Parse(#[from] toml::de::Error),
}
