use super::{
    classify::{LineClass, LineKind},
    types::{Block, BlockKind},
};

/// Groups classified lines into typed blocks.
///
/// One left-to-right pass over the lines. Blank lines are consumed and never
/// emitted; fences, lists, and paragraphs each have their own extension
/// rules. Emitted blocks carry no parent/child links yet; see
/// [`super::hierarchy::link_parents`].
pub struct BlockScanner<'a> {
    lines: &'a [String],
    classes: &'a [LineClass],
    pos: usize,
    out: Vec<Block>,
}

impl<'a> BlockScanner<'a> {
    pub fn new(lines: &'a [String], classes: &'a [LineClass]) -> Self {
        debug_assert_eq!(lines.len(), classes.len());
        Self {
            lines,
            classes,
            pos: 0,
            out: vec![],
        }
    }

    pub fn scan(mut self) -> Vec<Block> {
        while self.pos < self.lines.len() {
            let c = &self.classes[self.pos];
            if c.is_blank {
                self.pos += 1;
                continue;
            }
            match c.kind {
                LineKind::Fence => self.scan_fence(),
                LineKind::ListItem => self.scan_list(),
                LineKind::Text => self.scan_paragraph(),
                LineKind::Heading => self.emit_single(BlockKind::Heading),
                LineKind::BlockQuote => self.emit_single(BlockKind::BlockQuote),
            }
        }
        self.out
    }

    /// Fences pair: the block runs from the opening fence to the next line
    /// independently matching the fence pattern, or to end of document when
    /// unterminated. Interior lines never become blocks of their own.
    fn scan_fence(&mut self) {
        let start = self.pos;
        let close = (start + 1..self.lines.len()).find(|&j| self.classes[j].kind == LineKind::Fence);
        let end = close.unwrap_or(self.lines.len() - 1);
        self.emit(BlockKind::Code, start, end, 0);
    }

    /// Lists extend while the next non-blank line is a list item at indent
    /// >= the block's own indent (sibling and nested items merge), or a
    /// more-indented non-item line (wrapped continuation). Blank lines
    /// inside the scan are skipped without ending the block.
    fn scan_list(&mut self) {
        let start = self.pos;
        let indent = self.classes[start].indent;
        let mut end = start;
        let mut j = start + 1;
        while j < self.lines.len() {
            let c = &self.classes[j];
            if c.is_blank {
                j += 1;
                continue;
            }
            let item = c.kind == LineKind::ListItem && c.indent >= indent;
            let continuation = c.kind != LineKind::ListItem && c.indent > indent;
            if !(item || continuation) {
                break;
            }
            end = j;
            j += 1;
        }
        self.emit(BlockKind::List, start, end, indent);
    }

    /// Paragraphs extend while the next line is non-blank, is itself plain
    /// text, and stays within 2 columns of the starting indentation. Blank
    /// lines terminate the block; they are not skipped here.
    fn scan_paragraph(&mut self) {
        let start = self.pos;
        let indent = self.classes[start].indent;
        let mut end = start;
        for j in start + 1..self.lines.len() {
            let c = &self.classes[j];
            if c.is_blank || c.kind != LineKind::Text || c.indent.abs_diff(indent) > 2 {
                break;
            }
            end = j;
        }
        self.emit(BlockKind::Paragraph, start, end, indent);
    }

    fn emit_single(&mut self, kind: BlockKind) {
        let start = self.pos;
        let indent = self.classes[start].indent;
        self.emit(kind, start, start, indent);
    }

    fn emit(&mut self, kind: BlockKind, start: usize, end: usize, indent: usize) {
        self.out.push(Block {
            kind,
            start_line: start,
            end_line: end,
            indent,
            parent: None,
            children: vec![],
            content: self.lines[start..=end].join("\n"),
        });
        self.pos = end + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::LineClassifier;

    fn scan(text: &str) -> Vec<Block> {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let classes: Vec<_> = lines.iter().map(|l| LineClassifier.classify(l)).collect();
        BlockScanner::new(&lines, &classes).scan()
    }

    fn kinds_and_lines(blocks: &[Block]) -> Vec<(BlockKind, usize, usize)> {
        blocks
            .iter()
            .map(|b| (b.kind, b.start_line, b.end_line))
            .collect()
    }

    #[test]
    fn paragraph_ends_at_blank_line() {
        let blocks = scan("Foo bar\nbaz\n\nqux");
        assert_eq!(
            kinds_and_lines(&blocks),
            vec![
                (BlockKind::Paragraph, 0, 1),
                (BlockKind::Paragraph, 3, 3),
            ]
        );
    }

    #[test]
    fn paragraph_splits_on_indent_jump() {
        let blocks = scan("top\n    shifted");
        assert_eq!(
            kinds_and_lines(&blocks),
            vec![
                (BlockKind::Paragraph, 0, 0),
                (BlockKind::Paragraph, 1, 1),
            ]
        );
    }

    #[test]
    fn paragraph_tolerates_small_indent_drift() {
        let blocks = scan("top\n  shifted a little");
        assert_eq!(kinds_and_lines(&blocks), vec![(BlockKind::Paragraph, 0, 1)]);
    }

    #[test]
    fn paragraph_ends_at_marker_line() {
        let blocks = scan("text\n- item");
        assert_eq!(
            kinds_and_lines(&blocks),
            vec![(BlockKind::Paragraph, 0, 0), (BlockKind::List, 1, 1)]
        );
    }

    #[test]
    fn list_merges_siblings_and_nested_items() {
        let blocks = scan("- a\n  - nested\n- b");
        assert_eq!(kinds_and_lines(&blocks), vec![(BlockKind::List, 0, 2)]);
    }

    #[test]
    fn list_keeps_wrapped_continuation_lines() {
        let blocks = scan("- a long item\n  wrapped here\n- b");
        assert_eq!(kinds_and_lines(&blocks), vec![(BlockKind::List, 0, 2)]);
    }

    #[test]
    fn list_survives_interior_blank_lines() {
        let blocks = scan("- a\n\n- b");
        assert_eq!(kinds_and_lines(&blocks), vec![(BlockKind::List, 0, 2)]);
    }

    #[test]
    fn list_ends_at_dedented_item() {
        let blocks = scan("  - deep\n- shallow");
        assert_eq!(
            kinds_and_lines(&blocks),
            vec![(BlockKind::List, 0, 0), (BlockKind::List, 1, 1)]
        );
    }

    #[test]
    fn list_ends_at_same_indent_text() {
        let blocks = scan("- a\ntext after");
        assert_eq!(
            kinds_and_lines(&blocks),
            vec![(BlockKind::List, 0, 0), (BlockKind::Paragraph, 1, 1)]
        );
    }

    #[test]
    fn fence_pairs_to_closing_fence() {
        let blocks = scan("```\nlet x = 1;\n```\nafter");
        assert_eq!(
            kinds_and_lines(&blocks),
            vec![(BlockKind::Code, 0, 2), (BlockKind::Paragraph, 3, 3)]
        );
        assert_eq!(blocks[0].indent, 0);
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let blocks = scan("```\ncode\nmore code");
        assert_eq!(kinds_and_lines(&blocks), vec![(BlockKind::Code, 0, 2)]);
    }

    #[test]
    fn fence_interior_lines_are_not_classified() {
        // Marker-looking lines inside the fence stay inside the code block.
        let blocks = scan("```\n# not a heading\n- not a list\n```");
        assert_eq!(kinds_and_lines(&blocks), vec![(BlockKind::Code, 0, 3)]);
    }

    #[test]
    fn heading_and_quote_are_single_line() {
        let blocks = scan("# Title\n> quote\n> more quote");
        assert_eq!(
            kinds_and_lines(&blocks),
            vec![
                (BlockKind::Heading, 0, 0),
                (BlockKind::BlockQuote, 1, 1),
                (BlockKind::BlockQuote, 2, 2),
            ]
        );
    }
}
