//! Output contract handed to the presentation layer.
//!
//! Coordinates in views are 1-based, as shown on screen.

use serde::Serialize;

use crate::search::{parse_query, MatchScope, QueryInput, SearchEngine, SearchResults};
use crate::types::{CellKind, GridCell, GridTable, Highlight};

/// One piece ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub row: usize,
    pub col: usize,
    pub kind: CellKind,
    pub fragments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

impl PieceView {
    fn of(grid: &GridTable, cell: &GridCell, highlight: Option<Highlight>) -> Self {
        PieceView {
            row: cell.row + 1,
            col: cell.col + 1,
            kind: grid.kind_of(cell.row, cell.col),
            fragments: cell.fragments.clone(),
            highlight,
        }
    }

    /// Split fragment `index` into (before, matched, after). Fragments other
    /// than the highlighted one come back whole in the first slot.
    pub fn segments(&self, index: usize) -> (&str, &str, &str) {
        let text = self.fragments.get(index).map(String::as_str).unwrap_or("");
        match self.highlight {
            Some(hl) if hl.fragment == index => split_highlight(text, hl.start, hl.length),
            _ => (text, "", ""),
        }
    }
}

/// Pieces found for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryView {
    pub query: String,
    pub pieces: Vec<PieceView>,
}

/// Everything the presentation layer needs for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Response {
    FullGrid {
        rows: usize,
        cols: usize,
        pieces: Vec<PieceView>,
    },
    Filtered {
        rows: usize,
        cols: usize,
        queries: Vec<QueryView>,
    },
}

/// Split `text` around a character span, clipping the span to the text.
pub fn split_highlight(text: &str, start: usize, length: usize) -> (&str, &str, &str) {
    let byte_at = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    };
    let begin = byte_at(start);
    let end = byte_at(start.saturating_add(length)).max(begin);
    (&text[..begin], &text[begin..end], &text[end..])
}

/// Every piece, row-major, without highlights.
pub fn grid_view(grid: &GridTable) -> Vec<PieceView> {
    grid.iter()
        .map(|cell| PieceView::of(grid, cell, None))
        .collect()
}

/// Matched pieces grouped by query, in query order.
pub fn filtered_view(grid: &GridTable, results: &SearchResults) -> Vec<QueryView> {
    results
        .iter()
        .map(|result| QueryView {
            query: result.query.clone(),
            pieces: result
                .matches
                .iter()
                .filter_map(|m| {
                    grid.get(m.row, m.col)
                        .map(|cell| PieceView::of(grid, cell, Some(m.highlight)))
                })
                .collect(),
        })
        .collect()
}

/// Answer a raw query: blank shows the full grid, anything else is searched.
pub fn respond(grid: &GridTable, raw_query: &str, scope: MatchScope) -> Response {
    match parse_query(raw_query) {
        QueryInput::FullGrid => Response::FullGrid {
            rows: grid.rows(),
            cols: grid.cols(),
            pieces: grid_view(grid),
        },
        QueryInput::Filtered(queries) => {
            let results = SearchEngine::new(grid).with_scope(scope).search(&queries);
            Response::Filtered {
                rows: grid.rows(),
                cols: grid.cols(),
                queries: filtered_view(grid, &results),
            }
        }
    }
}
