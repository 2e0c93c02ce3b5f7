//! Traversal queries - where a direction input leads from a node.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Level, LevelMatrix, SiteGraph, RING_COLUMNS, ROWS};
use crate::nodes::{MatrixIndices, Node};
use crate::progress::{is_node_visible, GameProgress};

/// Travel direction on a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a search landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    /// A visible node, by id.
    Known(String),
    /// A cell outside revealed territory; shown with the placeholder node.
    Unexplored,
}

/// Result of [`SiteGraph::find_node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSearch {
    pub node: NodeRef,
    pub matrix_indices: MatrixIndices,
    /// `false` when the move was blocked and `matrix_indices` is the origin.
    pub did_move: bool,
}

impl SiteGraph {
    /// Resolve where `direction` leads from `from`.
    ///
    /// Horizontal moves step one ring column inside `level`; with
    /// `allow_crossing` the ring wraps, without it the outer columns block.
    /// Vertical moves with `allow_crossing` search the adjacent level; without
    /// it `level` is taken as the destination itself.
    ///
    /// Returns `None` when the searched level is outside the site or was never
    /// authored.
    pub fn find_node(
        &self,
        from: &Node,
        direction: Direction,
        level: Level,
        progress: &GameProgress,
        allow_crossing: bool,
    ) -> Option<NodeSearch> {
        let origin = from.matrix_indices;

        if direction.is_horizontal() {
            let Some(matrix) = self.level_matrix(level) else {
                trace!(site = %self.site(), %level, "search_level_unaddressable");
                return None;
            };
            let found = next_column(origin.matrix_idx, direction, allow_crossing).and_then(
                |column| self.search_column(matrix, column, rows_nearest_to(origin.row_idx), progress),
            );
            return Some(found.unwrap_or_else(|| stay(from)));
        }

        let target = if allow_crossing {
            level.step(direction == Direction::Up)?
        } else {
            level
        };
        let Some(matrix) = self.level_matrix(target) else {
            trace!(site = %self.site(), level = %target, "search_level_unaddressable");
            return None;
        };

        let rows = entry_rows(direction);
        match self.search_column(matrix, origin.matrix_idx, rows, progress) {
            Some(found) => Some(found),
            None if allow_crossing => Some(stay(from)),
            None => Some(NodeSearch {
                node: NodeRef::Unexplored,
                matrix_indices: MatrixIndices::new(origin.matrix_idx, rows[0]),
                did_move: true,
            }),
        }
    }

    /// First visible node of `column`, scanning `rows` in order.
    ///
    /// A column with nodes but none visible yields the unexplored cell at
    /// `rows[0]`; a column with no nodes at all yields `None`.
    fn search_column(
        &self,
        matrix: &LevelMatrix,
        column: u8,
        rows: [u8; ROWS as usize],
        progress: &GameProgress,
    ) -> Option<NodeSearch> {
        if matrix.column_is_empty(column) {
            return None;
        }

        let visible = rows.iter().find_map(|&row_idx| {
            let indices = MatrixIndices::new(column, row_idx);
            matrix
                .get(indices)
                .and_then(|id| self.lookup(id))
                .filter(|node| is_node_visible(node, progress))
                .map(|node| (node.id.clone(), indices))
        });

        Some(match visible {
            Some((id, matrix_indices)) => NodeSearch {
                node: NodeRef::Known(id),
                matrix_indices,
                did_move: true,
            },
            None => NodeSearch {
                node: NodeRef::Unexplored,
                matrix_indices: MatrixIndices::new(column, rows[0]),
                did_move: true,
            },
        })
    }
}

fn stay(from: &Node) -> NodeSearch {
    NodeSearch {
        node: if from.is_present() {
            NodeRef::Known(from.id.clone())
        } else {
            NodeRef::Unexplored
        },
        matrix_indices: from.matrix_indices,
        did_move: false,
    }
}

fn next_column(column: u8, direction: Direction, wrap: bool) -> Option<u8> {
    let last = RING_COLUMNS - 1;
    match (direction, column) {
        (Direction::Left, 0) => wrap.then_some(last),
        (Direction::Left, c) => Some(c - 1),
        (Direction::Right, c) if c >= last => wrap.then_some(0),
        (Direction::Right, c) => Some(c + 1),
        _ => Some(column),
    }
}

/// Rows ordered by distance from `row_idx`, upper row first on ties.
fn rows_nearest_to(row_idx: u8) -> [u8; ROWS as usize] {
    match row_idx {
        0 => [0, 1, 2],
        1 => [1, 0, 2],
        _ => [2, 1, 0],
    }
}

/// Rows in the order a vertical move enters them.
fn entry_rows(direction: Direction) -> [u8; ROWS as usize] {
    match direction {
        Direction::Up => [2, 1, 0],
        _ => [0, 1, 2],
    }
}
