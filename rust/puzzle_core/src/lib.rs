//! `puzzle_core` - grid partitioning and digit search for the Pi puzzle.
//!
//! The printed puzzle is a rectangular block of π's digits. This crate cuts
//! that block into the pieces of the physical puzzle and finds which pieces
//! carry a given digit sequence. It does no file I/O and no rendering.
//!
//! Modules:
//! - `types`  - partition spec, grid cells and table, match records
//! - `grid`   - horizontal cutting and row banding
//! - `search` - literal per-piece search with ordered results
//! - `view`   - 1-based output contract for a presentation layer
//! - `config` - partition spec parsing from JSON
//! - `error`  - configuration errors

pub mod config;
pub mod error;
pub mod grid;
pub mod search;
pub mod types;
pub mod view;

pub use error::{PuzzleError, Result};
pub use grid::{build_grid, count_row_bands, cut_row, trim_line, GridBuilder};
pub use search::{
    compare_matches, find_in_cell, parse_query, MatchScope, QueryInput, QueryResult,
    SearchEngine, SearchResults,
};
pub use types::{CellKind, GridCell, GridTable, Highlight, MatchRecord, PartitionSpec, MIN_STEP};
pub use view::{respond, PieceView, QueryView, Response};
