use super::types::{Block, BlockId};

/// Links parent/child arena indices through an indent stack.
///
/// The stack holds still-open ancestors ordered by increasing indent. Each
/// block pops every entry whose indent is >= its own (those can no longer be
/// ancestors); a non-empty stack top then becomes its parent. The result is
/// a forest whose depth equals the number of indent breaks.
pub fn link_parents(blocks: &mut [Block]) {
    let mut stack: Vec<BlockId> = vec![];

    for i in 0..blocks.len() {
        let indent = blocks[i].indent;
        while let Some(&top) = stack.last() {
            if blocks[top.index()].indent >= indent {
                stack.pop();
            } else {
                break;
            }
        }
        if let Some(&top) = stack.last() {
            blocks[i].parent = Some(top);
            blocks[top.index()].children.push(BlockId(i));
        }
        stack.push(BlockId(i));
    }
}
