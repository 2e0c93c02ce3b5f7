//! Node records.

use serde::{Deserialize, Serialize};

use super::{MatrixIndices, NodeType};

/// A point of interaction inside a level.
///
/// Nodes are value records. The site's node table holds the base metadata;
/// the copy handed to the scene layer carries the matrix position the player
/// reached it from (see [`Node::at`]). An empty `id` marks the unexplored
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    /// First three characters act as a category tag (`"TaK"`, `"Lda"`, ...).
    pub node_name: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default, rename = "matrixIndices")]
    pub matrix_indices: MatrixIndices,

    /// Minimum SSkn level needed to open the node.
    #[serde(default)]
    pub upgrade_requirement: u32,

    /// Name of the node that must have been viewed first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_by: Option<String>,

    #[serde(default)]
    pub required_final_video_viewcount: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_file: Option<String>,
}

impl Node {
    /// Create a node with the given id, name and type.
    pub fn new(id: impl Into<String>, node_name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_name: node_name.into(),
            node_type,
            matrix_indices: MatrixIndices::default(),
            upgrade_requirement: 0,
            unlocked_by: None,
            required_final_video_viewcount: 0,
            media_file: None,
        }
    }

    /// Placeholder for a cell outside explored territory.
    pub fn unexplored(matrix_indices: MatrixIndices) -> Self {
        Self {
            matrix_indices,
            ..Self::new("", "", NodeType::NEUTRAL)
        }
    }

    pub fn with_upgrade_requirement(mut self, requirement: u32) -> Self {
        self.upgrade_requirement = requirement;
        self
    }

    pub fn with_unlocked_by(mut self, node_name: impl Into<String>) -> Self {
        self.unlocked_by = Some(node_name.into());
        self
    }

    pub fn with_required_final_video_viewcount(mut self, viewcount: u32) -> Self {
        self.required_final_video_viewcount = viewcount;
        self
    }

    pub fn with_media_file(mut self, media_file: impl Into<String>) -> Self {
        self.media_file = Some(media_file.into());
        self
    }

    /// Copy of this node relocated to `matrix_indices`.
    pub fn at(&self, matrix_indices: MatrixIndices) -> Self {
        Self {
            matrix_indices,
            ..self.clone()
        }
    }

    /// Whether this is a real node rather than the placeholder.
    pub fn is_present(&self) -> bool {
        !self.id.is_empty()
    }

    /// The three-character category tag at the start of the name.
    pub fn category_tag(&self) -> &str {
        match self.node_name.char_indices().nth(3) {
            Some((end, _)) => &self.node_name[..end],
            None => &self.node_name,
        }
    }
}
