//! Per-level node matrices.

use crate::error::SiteError;
use crate::nodes::MatrixIndices;

/// Columns around a level's ring, one per 45 degrees of site rotation.
pub const RING_COLUMNS: u8 = 8;

/// Rows in a level, top to bottom.
pub const ROWS: u8 = 3;

/// The node ids placed in one level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMatrix {
    cells: [[Option<String>; RING_COLUMNS as usize]; ROWS as usize],
}

impl LevelMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from rows of ids, where an empty string is an empty cell.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, SiteError> {
        if rows.len() != ROWS as usize {
            return Err(SiteError::MalformedLayout(format!(
                "expected {} rows, found {}",
                ROWS,
                rows.len()
            )));
        }

        let mut matrix = Self::new();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != RING_COLUMNS as usize {
                return Err(SiteError::MalformedLayout(format!(
                    "row {} has {} columns, expected {}",
                    row_idx,
                    row.len(),
                    RING_COLUMNS
                )));
            }
            for (col_idx, id) in row.iter().enumerate() {
                if !id.is_empty() {
                    matrix.cells[row_idx][col_idx] = Some(id.clone());
                }
            }
        }
        Ok(matrix)
    }

    /// Place `id` at `indices`. Out-of-bounds indices are ignored.
    pub fn set(&mut self, indices: MatrixIndices, id: impl Into<String>) {
        if let Some(cell) = self.cell_mut(indices) {
            *cell = Some(id.into());
        }
    }

    /// The id at `indices`, if any.
    pub fn get(&self, indices: MatrixIndices) -> Option<&str> {
        self.cells
            .get(indices.row_idx as usize)
            .and_then(|row| row.get(indices.matrix_idx as usize))
            .and_then(|cell| cell.as_deref())
    }

    /// Whether the column holds no node in any row.
    pub fn column_is_empty(&self, matrix_idx: u8) -> bool {
        (0..ROWS).all(|row_idx| self.get(MatrixIndices::new(matrix_idx, row_idx)).is_none())
    }

    /// All placed ids with their positions.
    pub fn placed(&self) -> impl Iterator<Item = (MatrixIndices, &str)> {
        self.cells.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter().enumerate().filter_map(move |(col_idx, cell)| {
                cell.as_deref()
                    .map(|id| (MatrixIndices::new(col_idx as u8, row_idx as u8), id))
            })
        })
    }

    fn cell_mut(&mut self, indices: MatrixIndices) -> Option<&mut Option<String>> {
        self.cells
            .get_mut(indices.row_idx as usize)
            .and_then(|row| row.get_mut(indices.matrix_idx as usize))
    }
}
