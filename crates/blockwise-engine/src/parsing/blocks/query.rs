//! Containment and sibling lookups over the parsed block arena.

use crate::parsing::ParsedDoc;

use super::types::{Block, BlockId};

impl ParsedDoc {
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    /// Top-level blocks in document order.
    pub fn roots(&self) -> Vec<BlockId> {
        (0..self.blocks.len())
            .map(BlockId)
            .filter(|&id| self.block(id).is_root())
            .collect()
    }

    /// Deepest block whose line range contains `line`.
    ///
    /// Blocks never overlap, so at most one block contains any given line;
    /// the child descent keeps the deepest-match contract explicit. Returns
    /// `None` for blank lines and lines past the last block.
    pub fn block_at_line(&self, line: usize) -> Option<BlockId> {
        let hit = (0..self.blocks.len())
            .map(BlockId)
            .find(|&id| self.block(id).contains_line(line))?;
        Some(self.deepest_at(hit, line))
    }

    fn deepest_at(&self, id: BlockId, line: usize) -> BlockId {
        for &child in &self.block(id).children {
            if self.block(child).contains_line(line) {
                return self.deepest_at(child, line);
            }
        }
        id
    }

    /// The sibling set of `id` in document order: its parent's children, or
    /// all root blocks when it has no parent. A block is always a member of
    /// its own sibling set.
    pub fn siblings(&self, id: BlockId) -> Vec<BlockId> {
        match self.block(id).parent {
            Some(parent) => self.block(parent).children.clone(),
            None => self.roots(),
        }
    }

    /// The sibling set one level further up: siblings of `id`'s parent.
    ///
    /// For a root block this returns the root set again; callers detect
    /// "no further level" by checking `parent` is absent, not by comparing
    /// sets.
    pub fn parent_level_blocks(&self, id: BlockId) -> Vec<BlockId> {
        match self.block(id).parent {
            Some(parent) => self.siblings(parent),
            None => self.roots(),
        }
    }

    /// First start line and last end line covered by `ids`, or `None` for an
    /// empty set.
    pub fn line_span(&self, ids: &[BlockId]) -> Option<(usize, usize)> {
        let first = self.block(*ids.first()?);
        let last = self.block(*ids.last()?);
        Some((first.start_line, last.end_line))
    }
}
