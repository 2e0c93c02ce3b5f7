//! Node definitions for the site graphs.

mod node;

pub use node::*;

use serde::{Deserialize, Serialize};

/// Interaction category of a node.
///
/// The raw value is kept because the site data addresses it numerically; the
/// scene layer decides what each value opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeType(pub u8);

impl NodeType {
    /// Type given to the unexplored placeholder. Nothing opens from it.
    pub const NEUTRAL: NodeType = NodeType(1);
    /// Story nodes whose name decides between the TaK scene and plain media.
    pub const SPECIAL: NodeType = NodeType(6);
    pub const POLYTAN: NodeType = NodeType(9);
}

impl Default for NodeType {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Position of a node inside its level's matrix.
///
/// `matrix_idx` is the ring column (one per 45 degrees of site rotation) and
/// `row_idx` counts from the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixIndices {
    pub matrix_idx: u8,
    pub row_idx: u8,
}

impl MatrixIndices {
    pub fn new(matrix_idx: u8, row_idx: u8) -> Self {
        Self {
            matrix_idx,
            row_idx,
        }
    }
}

impl std::fmt::Display for MatrixIndices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.matrix_idx, self.row_idx)
    }
}
