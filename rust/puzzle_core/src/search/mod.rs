//! Literal search across every piece of a grid table.
//!
//! Each query rescans the whole grid independently. Results stay grouped by
//! query position, so a query without hits still owns an (empty) slot.

pub mod literal;
pub mod query;

use std::cmp::Ordering;

use log::debug;
use serde::Serialize;

use crate::types::{GridCell, GridTable, Highlight, MatchRecord};
use literal::find_literal;

pub use query::{parse_query, QueryInput};

/// Which fragments of a cell a query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchScope {
    /// Only the first line of each piece. Continuation lines of a row band
    /// are never searched.
    #[default]
    FirstFragment,
    /// Every line of each piece, in source order.
    AllFragments,
}

/// Locate `query` in `cell` under `scope`. Empty queries never match.
pub fn find_in_cell(cell: &GridCell, query: &str, scope: MatchScope) -> Option<Highlight> {
    let searched = match scope {
        MatchScope::FirstFragment => cell.fragments.len().min(1),
        MatchScope::AllFragments => cell.fragments.len(),
    };
    cell.fragments[..searched]
        .iter()
        .enumerate()
        .find_map(|(fragment, text)| {
            find_literal(text, query).map(|(start, length)| Highlight {
                fragment,
                start,
                length,
            })
        })
}

/// Result order: by row, then by column.
pub fn compare_matches(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    (a.row, a.col).cmp(&(b.row, b.col))
}

/// Matches of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub index: usize,
    pub query: String,
    pub matches: Vec<MatchRecord>,
}

/// Per-query results, in the order the queries were issued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    queries: Vec<QueryResult>,
}

impl SearchResults {
    /// Result slot of query `index`; `None` only if no such query was issued.
    pub fn get(&self, index: usize) -> Option<&QueryResult> {
        self.queries.get(index)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryResult> {
        self.queries.iter()
    }

    pub fn total_matches(&self) -> usize {
        self.queries.iter().map(|q| q.matches.len()).sum()
    }
}

/// Runs literal queries against a read-only grid table.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'g> {
    grid: &'g GridTable,
    scope: MatchScope,
}

impl<'g> SearchEngine<'g> {
    pub fn new(grid: &'g GridTable) -> Self {
        SearchEngine {
            grid,
            scope: MatchScope::default(),
        }
    }

    pub fn with_scope(mut self, scope: MatchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Scan the grid row-major for one query and return its sorted matches.
    pub fn search_one(&self, query_index: usize, query: &str) -> Vec<MatchRecord> {
        let mut matches: Vec<MatchRecord> = self
            .grid
            .iter()
            .filter_map(|cell| {
                find_in_cell(cell, query, self.scope).map(|highlight| MatchRecord {
                    query_index,
                    row: cell.row,
                    col: cell.col,
                    content: cell.fragments.clone(),
                    highlight,
                })
            })
            .collect();
        matches.sort_by(compare_matches);
        matches
    }

    /// Run every query independently, keeping one result slot per query.
    pub fn search<S: AsRef<str>>(&self, queries: &[S]) -> SearchResults {
        let queries = queries
            .iter()
            .enumerate()
            .map(|(index, query)| {
                let query = query.as_ref();
                let matches = self.search_one(index, query);
                debug!("Query #{} '{}': {} matches", index, query, matches.len());
                QueryResult {
                    index,
                    query: query.to_string(),
                    matches,
                }
            })
            .collect();
        SearchResults { queries }
    }
}
