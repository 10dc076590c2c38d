//! Query string parsing.

/// What a raw query string asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput {
    /// Blank query: show every piece.
    FullGrid,
    /// One literal per comma-separated segment, in input order.
    Filtered(Vec<String>),
}

/// Parse a comma-separated query.
///
/// Whitespace inside a segment is removed. Empty segments stay in the list
/// as placeholders so positions line up with the caller's input.
pub fn parse_query(raw: &str) -> QueryInput {
    let raw = raw.trim();
    if raw.is_empty() {
        return QueryInput::FullGrid;
    }
    QueryInput::Filtered(
        raw.split(',')
            .map(|segment| segment.chars().filter(|c| !c.is_whitespace()).collect())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_full_grid() {
        assert_eq!(parse_query(""), QueryInput::FullGrid);
        assert_eq!(parse_query("   \t"), QueryInput::FullGrid);
    }

    #[test]
    fn splits_and_strips_spaces() {
        assert_eq!(
            parse_query(" 314, 15 9 ,2653 "),
            QueryInput::Filtered(vec!["314".into(), "159".into(), "2653".into()])
        );
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(
            parse_query("314,,  ,27"),
            QueryInput::Filtered(vec!["314".into(), "".into(), "".into(), "27".into()])
        );
        assert_eq!(
            parse_query(","),
            QueryInput::Filtered(vec!["".into(), "".into()])
        );
    }
}
