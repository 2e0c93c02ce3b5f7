//! Loading site graphs from TOML site data.
//!
//! ```toml
//! site = "a"
//! start = { level = "04", matrix_idx = 0, row_idx = 1 }
//!
//! [[nodes]]
//! id = "0410"
//! node_name = "Lda010"
//! type = 0
//!
//! [levels."04"]
//! rows = [
//!     ["", "", "", "", "", "", "", ""],
//!     ["0410", "", "", "", "", "", "", ""],
//!     ["", "", "", "", "", "", "", ""],
//! ]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::{LevelMatrix, SiteGraph, SiteId, StartPoint};
use crate::error::SiteError;
use crate::nodes::Node;

#[derive(Debug, Deserialize)]
struct SiteFile {
    site: SiteId,
    start: Option<StartPoint>,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    levels: BTreeMap<String, LevelEntry>,
}

#[derive(Debug, Deserialize)]
struct LevelEntry {
    rows: Vec<Vec<String>>,
}

impl SiteGraph {
    /// Parse and validate a site data file.
    pub fn from_toml_str(source: &str) -> Result<Self, SiteError> {
        let file: SiteFile = toml::from_str(source)?;
        let mut graph = SiteGraph::new(file.site);

        for node in file.nodes {
            graph.insert_node(node);
        }

        for (key, entry) in &file.levels {
            let level = key.parse()?;
            graph.insert_level(level, LevelMatrix::from_rows(&entry.rows)?)?;
        }

        if let Some(start) = file.start {
            graph.set_start(start)?;
        }

        debug!(
            site = %graph.site(),
            nodes = graph.node_count(),
            levels = graph.levels().count(),
            "site_loaded"
        );
        Ok(graph)
    }
}
