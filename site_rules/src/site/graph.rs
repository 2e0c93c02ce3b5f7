//! Site graph - the node table and level matrices of one world.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::error;

use super::{Level, LevelMatrix, SiteId};
use crate::error::SiteError;
use crate::nodes::{MatrixIndices, Node};

/// Where the player stands when a site is first entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPoint {
    pub level: Level,
    pub matrix_idx: u8,
    pub row_idx: u8,
}

impl StartPoint {
    pub fn new(level: Level, matrix_indices: MatrixIndices) -> Self {
        Self {
            level,
            matrix_idx: matrix_indices.matrix_idx,
            row_idx: matrix_indices.row_idx,
        }
    }

    pub fn matrix_indices(&self) -> MatrixIndices {
        MatrixIndices::new(self.matrix_idx, self.row_idx)
    }
}

/// The complete graph of one site.
///
/// Node metadata lives in a single table keyed by id; level matrices only
/// reference ids. Lookups hand out copies positioned at the requested cell.
#[derive(Debug, Clone)]
pub struct SiteGraph {
    site: SiteId,

    /// Base metadata, keyed by node id.
    nodes: HashMap<String, Node>,

    /// Matrices of the levels that have been authored.
    levels: BTreeMap<Level, LevelMatrix>,

    start: Option<StartPoint>,
}

impl SiteGraph {
    /// Create an empty graph for `site`.
    pub fn new(site: SiteId) -> Self {
        Self {
            site,
            nodes: HashMap::new(),
            levels: BTreeMap::new(),
            start: None,
        }
    }

    pub fn site(&self) -> SiteId {
        self.site
    }

    /// Add a node to the metadata table, replacing any node with the same id.
    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Place a known node into a level's matrix.
    pub fn place(
        &mut self,
        level: Level,
        indices: MatrixIndices,
        id: &str,
    ) -> Result<(), SiteError> {
        self.check_level(level)?;
        if !self.nodes.contains_key(id) {
            return Err(self.not_found(id));
        }
        self.levels.entry(level).or_default().set(indices, id);
        Ok(())
    }

    /// Install a whole level matrix. Every id in it must be in the node table.
    pub fn insert_level(&mut self, level: Level, matrix: LevelMatrix) -> Result<(), SiteError> {
        self.check_level(level)?;
        if let Some((_, id)) = matrix.placed().find(|(_, id)| !self.nodes.contains_key(*id)) {
            return Err(self.not_found(id));
        }
        self.levels.insert(level, matrix);
        Ok(())
    }

    /// Set the start point. The start cell must hold a node.
    pub fn set_start(&mut self, start: StartPoint) -> Result<(), SiteError> {
        let placed = self
            .level_matrix(start.level)
            .and_then(|matrix| matrix.get(start.matrix_indices()));
        if placed.is_none() {
            return Err(SiteError::MalformedLayout(format!(
                "start {} {} of site {} holds no node",
                start.level,
                start.matrix_indices(),
                self.site
            )));
        }
        self.start = Some(start);
        Ok(())
    }

    /// The node at the start point, positioned there.
    pub fn start_node(&self) -> Result<(StartPoint, Node), SiteError> {
        let start = self.start.ok_or_else(|| {
            SiteError::MalformedLayout(format!("site {} has no start point", self.site))
        })?;
        let node = self.node_at(start.level, start.matrix_indices())?;
        Ok((start, node))
    }

    /// Metadata lookup.
    ///
    /// Callers never ask for the unexplored placeholder, so a miss means the
    /// caller and the site data disagree.
    pub fn get_node_by_id(&self, id: &str) -> Result<Node, SiteError> {
        self.nodes.get(id).cloned().ok_or_else(|| {
            error!(site = %self.site, id, "node_lookup_failed");
            self.not_found(id)
        })
    }

    /// The node placed at `indices` of `level`, positioned there.
    pub fn node_at(&self, level: Level, indices: MatrixIndices) -> Result<Node, SiteError> {
        let id = self
            .level_matrix(level)
            .and_then(|matrix| matrix.get(indices))
            .ok_or_else(|| self.not_found(&format!("{}@{}", level, indices)))?;
        Ok(self.get_node_by_id(id)?.at(indices))
    }

    /// The matrix of `level`, if it is in range and has been authored.
    pub fn level_matrix(&self, level: Level) -> Option<&LevelMatrix> {
        if !self.site.contains(level) {
            return None;
        }
        self.levels.get(&level)
    }

    /// Base metadata without the error path, for searches over placed ids.
    pub(crate) fn lookup(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.levels.keys().copied()
    }

    fn check_level(&self, level: Level) -> Result<(), SiteError> {
        if self.site.contains(level) {
            Ok(())
        } else {
            Err(SiteError::LevelOutOfRange {
                level,
                site: self.site,
                max: self.site.max_level(),
            })
        }
    }

    fn not_found(&self, id: &str) -> SiteError {
        SiteError::NodeNotFound {
            id: id.to_string(),
            site: self.site,
        }
    }
}
