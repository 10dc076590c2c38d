//! Rendering of the core output contract as text, HTML or JSON.

use clap::ValueEnum;
use puzzle_core::{PieceView, QueryView, Response};

/// Box size of one piece on the HTML page.
const PIECE_WIDTH_PX: usize = 120;
const PIECE_HEIGHT_PX: usize = 135;
/// Horizontal gap between the result columns of two queries.
const QUERY_GAP_PX: usize = 50;
/// Top edge of matched pieces in a query strip, below the query label.
const MATCH_TOP_PX: usize = 20;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Html,
    Json,
}

/// Render a response in the requested format.
pub fn render(response: &Response, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Text => render_text(response),
        Format::Html => render_html(response),
        Format::Json => serde_json::to_string_pretty(response)?,
    })
}

fn piece_header(piece: &PieceView) -> String {
    format!("{} | {} {}", piece.row, piece.col, piece.kind.label())
        .trim_end()
        .to_string()
}

/// Plain text. Matched spans are wrapped in brackets.
pub fn render_text(response: &Response) -> String {
    let mut out = String::new();
    match response {
        Response::FullGrid { pieces, .. } => {
            for piece in pieces {
                push_text_piece(&mut out, piece, "");
            }
        }
        Response::Filtered { queries, .. } => {
            for query in queries {
                out.push_str(&format!("{}:\n", query.query));
                if query.pieces.is_empty() {
                    out.push_str("  (no match)\n\n");
                }
                for piece in &query.pieces {
                    push_text_piece(&mut out, piece, "  ");
                }
            }
        }
    }
    out
}

fn push_text_piece(out: &mut String, piece: &PieceView, indent: &str) {
    out.push_str(&format!("{}{}\n", indent, piece_header(piece)));
    for index in 0..piece.fragments.len() {
        let (before, hit, after) = piece.segments(index);
        if hit.is_empty() {
            out.push_str(&format!("{}{}\n", indent, before));
        } else {
            out.push_str(&format!("{}{}[{}]{}\n", indent, before, hit, after));
        }
    }
    out.push('\n');
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn piece_html(piece: &PieceView) -> String {
    let lines: Vec<String> = (0..piece.fragments.len())
        .map(|index| {
            let (before, hit, after) = piece.segments(index);
            if hit.is_empty() {
                escape_html(before)
            } else {
                format!(
                    "{}<span>{}</span>{}",
                    escape_html(before),
                    escape_html(hit),
                    escape_html(after)
                )
            }
        })
        .collect();
    format!(
        "<p><b>{} | {}</b> <i>{}</i><br/>{}</p>",
        piece.row,
        piece.col,
        piece.kind.label(),
        lines.join("<br/>")
    )
}

fn positioned(top: usize, left: usize, body: &str) -> String {
    format!(
        "<div style=\"position:absolute; top:{}px; left:{}px; width:{}px; height:{}px;\">{}</div>\n",
        top, left, PIECE_WIDTH_PX, PIECE_HEIGHT_PX, body
    )
}

fn grid_html(rows: usize, cols: usize, pieces: &[PieceView]) -> String {
    let mut html = format!(
        "<div style=\"width:{}px; height:{}px; position:relative;\">\n",
        PIECE_WIDTH_PX * cols,
        PIECE_HEIGHT_PX * rows
    );
    for piece in pieces {
        let top = (piece.row - 1) * PIECE_HEIGHT_PX;
        let left = (piece.col - 1) * PIECE_WIDTH_PX;
        html.push_str(&positioned(top, left, &piece_html(piece)));
    }
    html.push_str("</div>\n");
    html
}

/// One column strip per query; a query without hits still takes a slot.
fn filtered_html(queries: &[QueryView]) -> String {
    let mut html = format!(
        "<div style=\"width:100%; height:{}px; overflow:auto; position:relative;\">\n",
        PIECE_HEIGHT_PX + 80
    );
    let mut offset = 0;
    for query in queries {
        if offset > 0 {
            offset += QUERY_GAP_PX;
        }
        html.push_str(&format!(
            "<div style=\"position:absolute; top:10px; left:{}px;\">{}:</div>\n",
            offset,
            escape_html(&query.query)
        ));
        for piece in &query.pieces {
            html.push_str(&positioned(MATCH_TOP_PX, offset, &piece_html(piece)));
            offset += PIECE_WIDTH_PX;
        }
        if query.pieces.is_empty() {
            offset += PIECE_WIDTH_PX;
        }
    }
    html.push_str("</div>\n");
    html
}

/// Standalone HTML page.
pub fn render_html(response: &Response) -> String {
    let body = match response {
        Response::FullGrid { rows, cols, pieces } => grid_html(*rows, *cols, pieces),
        Response::Filtered { queries, .. } => filtered_html(queries),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>PI-Puzzle-Helper</title>\n<style type=\"text/css\">\n  span {{ background-color:#ee0; }}\n</style>\n\
         </head>\n<body>\n{}</body>\n</html>\n",
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::{build_grid, respond, MatchScope, PartitionSpec};

    fn response(query: &str) -> Response {
        let lines = ["3141592653", "5897932384"];
        let grid = build_grid(&lines, &PartitionSpec::new(5.0, 5.0, 1.0, 1.0).unwrap());
        respond(&grid, query, MatchScope::FirstFragment)
    }

    #[test]
    fn test_text_full_grid() {
        let text = render_text(&response(""));
        assert!(text.starts_with("1 | 1 corner\n31415\n\n"));
        assert!(text.contains("2 | 2 corner\n32384\n"));
    }

    #[test]
    fn test_text_marks_match_and_empty_query() {
        let text = render_text(&response("415,000"));
        assert_eq!(text, "415:\n  1 | 1 corner\n  31[415]\n\n000:\n  (no match)\n\n");
    }

    #[test]
    fn test_text_no_match_placeholder() {
        let text = render_text(&response("000"));
        assert_eq!(text, "000:\n  (no match)\n\n");
    }

    #[test]
    fn test_html_grid_dimensions() {
        let html = render_html(&response(""));
        assert!(html.contains("width:240px; height:270px;"));
        assert!(html.contains("top:135px; left:120px;"));
        assert!(html.contains("<p><b>1 | 1</b> <i>corner</i><br/>31415</p>"));
    }

    #[test]
    fn test_html_highlights_span() {
        let html = render_html(&response("415"));
        assert!(html.contains("31<span>415</span>"));
    }

    #[test]
    fn test_html_filtered_offsets() {
        // "9": pieces (1,2) and (2,1); "000": none; "3": three pieces.
        let html = render_html(&response("9,000,3"));
        assert!(html.contains("top:10px; left:0px;\">9:"));
        assert!(html.contains("top:10px; left:290px;\">000:"));
        assert!(html.contains("top:10px; left:460px;\">3:"));
    }

    #[test]
    fn test_html_matched_pieces_sit_below_label() {
        let html = render_html(&response("9"));
        assert!(html.contains("top:20px; left:0px; width:120px;"));
        assert!(html.contains("top:20px; left:120px; width:120px;"));
        assert!(!html.contains("top:30px;"));
    }

    #[test]
    fn test_html_escapes_text() {
        assert_eq!(escape_html("<a&b>"), "&lt;a&amp;b&gt;");
    }

    #[test]
    fn test_json_has_mode() {
        let json = render(&response("314"), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "filtered");
        assert_eq!(value["queries"][0]["pieces"][0]["highlight"]["start"], 0);
    }
}
