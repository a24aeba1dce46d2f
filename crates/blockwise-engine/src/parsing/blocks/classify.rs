use super::kinds::{BlockQuote, CodeFence, Heading, ListItem};

/// Columns a tab character occupies when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Indentation width of the line, tabs expanded to [`TAB_WIDTH`] columns.
    pub indent: usize,
    /// Marker kind detected after stripping leading whitespace.
    pub kind: LineKind,
}

/// Marker kind of a single line, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    ListItem,
    BlockQuote,
    Fence,
    /// No marker matched; the paragraph default.
    Text,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`] of local facts.
    ///
    /// Markers are matched against the line after stripping leading
    /// whitespace; precedence is heading, list, blockquote, fence, text.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let (indent, rest) = measure_indent(trimmed);

        if rest.is_empty() {
            return LineClass {
                is_blank: true,
                indent,
                kind: LineKind::Text,
            };
        }

        let kind = if Heading::matches(rest) {
            LineKind::Heading
        } else if ListItem::marker(rest).is_some() {
            LineKind::ListItem
        } else if BlockQuote::matches(rest) {
            LineKind::BlockQuote
        } else if CodeFence::matches(rest) {
            LineKind::Fence
        } else {
            LineKind::Text
        };

        LineClass {
            is_blank: false,
            indent,
            kind,
        }
    }
}

/// Measures leading whitespace width and returns the stripped remainder.
///
/// Tabs count as [`TAB_WIDTH`] columns, spaces as one.
pub fn measure_indent(line: &str) -> (usize, &str) {
    let mut cols = 0;
    for (i, ch) in line.char_indices() {
        match ch {
            ' ' => cols += 1,
            '\t' => cols += TAB_WIDTH,
            _ => return (cols, &line[i..]),
        }
    }
    (cols, "")
}
