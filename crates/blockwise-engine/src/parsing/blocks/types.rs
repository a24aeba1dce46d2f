use serde::Serialize;

/// Index of a block in the [`ParsedDoc`](crate::parsing::ParsedDoc) arena.
///
/// Blocks reference each other by index rather than by pointer, so the
/// parent/child tree has no ownership cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The structural kind of a block.
///
/// Blank lines are consumed during parsing and never carry a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// Default run of text lines when no marker matches.
    Paragraph,
    /// Bullet or numbered list items, including nested items and wrapped
    /// continuation lines, merged into one block.
    List,
    /// A single `#`-prefixed line.
    Heading,
    /// A fenced code region, opening fence through closing fence inclusive.
    Code,
    /// A single `>`-prefixed line.
    BlockQuote,
}

/// A contiguous, non-overlapping run of source lines classified as one
/// structural unit.
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Inclusive 0-indexed first line.
    pub start_line: usize,
    /// Inclusive 0-indexed last line.
    pub end_line: usize,
    /// Indentation width of the first line, tabs expanded to 4 columns.
    pub indent: usize,
    /// Enclosing block, if some earlier still-open block has a strictly
    /// smaller indent.
    pub parent: Option<BlockId>,
    /// Directly nested blocks, insertion order = document order.
    pub children: Vec<BlockId>,
    /// Verbatim source text of the block's line range.
    pub content: String,
}

impl Block {
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
