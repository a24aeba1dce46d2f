pub mod blocks;
pub mod snapshot;

use xi_rope::Rope;

use blocks::{Block, BlockScanner, LineClassifier, link_parents};

/// Parsed view of one document: the block arena in parse order.
///
/// Blocks are stored flat, ordered by strictly increasing `start_line`.
/// Parent/child structure is carried as arena indices ([`blocks::BlockId`]),
/// so the tree has no reference cycles and serializes directly.
#[derive(Debug, Default)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Parses a document into its block structure.
///
/// Two phases: each line is classified into local facts
/// ([`blocks::LineClass`]), then the scanner groups lines into typed blocks
/// and the indent stack links parents. The rope is read once per call; there
/// is no incremental reuse between invocations.
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = LineClassifier;
    let lines: Vec<String> = rope
        .lines_raw(..)
        .map(|line| line.trim_end_matches(['\r', '\n']).to_string())
        .collect();
    let classes: Vec<_> = lines.iter().map(|line| classifier.classify(line)).collect();

    let mut blocks = BlockScanner::new(&lines, &classes).scan();
    link_parents(&mut blocks);

    ParsedDoc { blocks }
}
