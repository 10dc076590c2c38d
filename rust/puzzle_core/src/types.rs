//! Domain types shared across puzzle_core modules.

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};

/// Smallest accepted step: one character across, one line down.
pub const MIN_STEP: f64 = 1.0;

/// Partition parameters: where the first cut falls and how far apart the
/// following cuts are, horizontally in characters and vertically in lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionSpec {
    pub x_offset: f64,
    pub x_step: f64,
    pub y_offset: f64,
    pub y_step: f64,
}

impl Default for PartitionSpec {
    /// Calibration measured on the printed puzzle.
    fn default() -> Self {
        PartitionSpec {
            x_offset: 9.33,
            x_step: 12.8,
            y_offset: 5.0,
            y_step: 6.0,
        }
    }
}

impl PartitionSpec {
    /// Build a validated partition spec.
    pub fn new(x_offset: f64, x_step: f64, y_offset: f64, y_step: f64) -> Result<Self> {
        PartitionSpec {
            x_offset,
            x_step,
            y_offset,
            y_step,
        }
        .validated()
    }

    /// Check every value. Offsets may be zero, steps must be at least `MIN_STEP`.
    pub fn validated(self) -> Result<Self> {
        let offsets = [("x_offset", self.x_offset), ("y_offset", self.y_offset)];
        let steps = [("x_step", self.x_step), ("y_step", self.y_step)];

        for (field, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(PuzzleError::InvalidPartition { field, value });
            }
        }
        for (field, value) in steps {
            if !value.is_finite() || value < MIN_STEP {
                return Err(PuzzleError::InvalidPartition { field, value });
            }
        }
        Ok(self)
    }
}

/// One piece of the grid: the fragments of every source line in its row band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub fragments: Vec<String>,
}

/// Position class of a piece, derived from its grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Corner,
    Edge,
    Interior,
}

impl CellKind {
    pub fn classify(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        let x_border = col == 0 || col + 1 == cols;
        let y_border = row == 0 || row + 1 == rows;
        match (x_border, y_border) {
            (true, true) => CellKind::Corner,
            (true, false) | (false, true) => CellKind::Edge,
            (false, false) => CellKind::Interior,
        }
    }

    /// Display label; interior pieces carry none.
    pub fn label(self) -> &'static str {
        match self {
            CellKind::Corner => "corner",
            CellKind::Edge => "edge",
            CellKind::Interior => "",
        }
    }
}

/// Row-major table of pieces, sized once at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridTable {
    rows: usize,
    cols: usize,
    cells: Vec<GridCell>,
}

impl GridTable {
    /// Assemble a table from row-major cells. `cells.len()` must equal `rows * cols`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<GridCell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        GridTable { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    pub fn kind_of(&self, row: usize, col: usize) -> CellKind {
        CellKind::classify(row, col, self.rows, self.cols)
    }
}

/// Matched span inside one fragment of a cell, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub fragment: usize,
    pub start: usize,
    pub length: usize,
}

/// A query found in one piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub query_index: usize,
    pub row: usize,
    pub col: usize,
    pub content: Vec<String>,
    pub highlight: Highlight,
}

impl MatchRecord {
    pub fn highlight_start(&self) -> usize {
        self.highlight.start
    }

    pub fn highlight_length(&self) -> usize {
        self.highlight.length
    }
}
