use serde::Serialize;

use crate::parsing::ParsedDoc;
use crate::parsing::blocks::{BlockId, BlockKind};

/// Flat, comparison-friendly description of one parsed block.
///
/// Strips the content text and flattens arena references to plain indices so
/// test expectations stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSnap {
    pub kind: BlockKind,
    pub lines: (usize, usize),
    pub indent: usize,
    pub parent: Option<usize>,
}

/// Normalizes a parsed document into [`BlockSnap`]s in parse order.
pub fn normalize(doc: &ParsedDoc) -> Vec<BlockSnap> {
    doc.blocks
        .iter()
        .map(|b| BlockSnap {
            kind: b.kind,
            lines: (b.start_line, b.end_line),
            indent: b.indent,
            parent: b.parent.map(BlockId::index),
        })
        .collect()
}
