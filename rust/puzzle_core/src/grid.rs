//! Grid partitioning: cut a rectangular block of text into pieces.
//!
//! Boundaries are fractional. Each cut is the nearest integer to the
//! accumulated position, so rounding error never builds up across a row.

use log::{debug, warn};

use crate::types::{GridCell, GridTable, PartitionSpec, MIN_STEP};

/// Characters stripped from both ends of every source line.
const TRIM_CHARS: &[char] = &[' ', '\n', '\r', '\t', '\u{0B}', '\0'];

/// Strip surrounding whitespace, line terminators and NUL from a source line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(TRIM_CHARS)
}

/// Running fractional boundary. The first advance moves by `offset`,
/// every later one by `step`.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    position: f64,
    advanced: bool,
}

impl Boundary {
    fn starting_at(position: f64) -> Self {
        Boundary {
            position,
            advanced: false,
        }
    }

    fn advance(&mut self, offset: f64, step: f64) {
        self.position += if self.advanced { step } else { offset };
        self.advanced = true;
    }

    fn rounded(&self) -> f64 {
        self.position.round()
    }

    /// Rounded position as a character index clipped to `[0, len]`.
    fn index(&self, len: usize) -> usize {
        (self.rounded().max(0.0) as usize).min(len)
    }
}

/// Cut one trimmed line into horizontal pieces.
///
/// Offsets are counted in characters. Concatenating the returned pieces
/// reproduces `line` exactly. An `x_step` below `MIN_STEP` leaves the line uncut.
pub fn cut_row(line: &str, x_offset: f64, x_step: f64) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    if x_step.is_nan() || x_step < MIN_STEP {
        return vec![line];
    }

    let bounds: Vec<usize> = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect();
    let char_len = bounds.len() - 1;

    let mut cursor = Boundary::starting_at(0.0);
    let mut pieces = Vec::new();
    while cursor.position < char_len as f64 {
        let start = cursor.index(char_len);
        cursor.advance(x_offset, x_step);
        let end = cursor.index(char_len).max(start);
        pieces.push(&line[bounds[start]..bounds[end]]);
    }
    pieces
}

/// Whether source line `index` opens a new row band.
fn opens_band(index: usize, band: &Boundary) -> bool {
    index as f64 > band.rounded()
}

/// Number of grid rows `line_count` source lines produce.
pub fn count_row_bands(line_count: usize, y_offset: f64, y_step: f64) -> usize {
    let (_, bands) = (0..line_count).fold(
        (Boundary::starting_at(-1.0), 0usize),
        |(mut band, bands), index| {
            if opens_band(index, &band) {
                band.advance(y_offset, y_step);
                (band, bands + 1)
            } else {
                (band, bands)
            }
        },
    );
    bands
}

/// Partition `lines` into a grid table.
///
/// Lines falling into the same row band are merged: each cell collects one
/// fragment per line. Every row is normalised to the column count of the
/// first row; short lines contribute empty fragments and surplus pieces are
/// dropped.
pub fn build_grid<S: AsRef<str>>(lines: &[S], spec: &PartitionSpec) -> GridTable {
    let mut band = Boundary::starting_at(-1.0);
    let mut width: Option<usize> = None;
    let mut bands: Vec<Vec<Vec<String>>> = Vec::new();

    for (index, raw) in lines.iter().enumerate() {
        let pieces = cut_row(trim_line(raw.as_ref()), spec.x_offset, spec.x_step);
        let cols = *width.get_or_insert(pieces.len());
        if pieces.len() != cols {
            warn!(
                "Ragged source line {}: {} pieces, grid has {} columns",
                index,
                pieces.len(),
                cols
            );
        }
        let piece_at = |col: usize| pieces.get(col).copied().unwrap_or("").to_string();

        if opens_band(index, &band) {
            bands.push((0..cols).map(|col| vec![piece_at(col)]).collect());
            band.advance(spec.y_offset, spec.y_step);
        } else if let Some(current) = bands.last_mut() {
            for (col, fragments) in current.iter_mut().enumerate() {
                fragments.push(piece_at(col));
            }
        }
    }

    let rows = bands.len();
    let cols = width.unwrap_or(0);
    let cells: Vec<GridCell> = bands
        .into_iter()
        .enumerate()
        .flat_map(|(row, band)| {
            band.into_iter()
                .enumerate()
                .map(move |(col, fragments)| GridCell {
                    row,
                    col,
                    fragments,
                })
        })
        .collect();

    debug!("Built grid: {} rows x {} cols from {} lines", rows, cols, lines.len());
    GridTable::from_cells(rows, cols, cells)
}

/// Holds a partition spec and turns source lines into grid tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridBuilder {
    spec: PartitionSpec,
}

impl GridBuilder {
    pub fn new(spec: PartitionSpec) -> Self {
        GridBuilder { spec }
    }

    pub fn spec(&self) -> &PartitionSpec {
        &self.spec
    }

    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> GridTable {
        build_grid(lines, &self.spec)
    }
}
