use std::ops::Range;
use std::time::{Duration, Instant};

use crate::parsing::ParsedDoc;
use crate::parsing::blocks::BlockId;

use super::{LineOffsets, state::ExpandState};

/// Default continuation window between invocations of one sequence.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1000);

/// Computes the next selection for a progressive-expansion sequence.
///
/// Stateless apart from the configured window; the per-context
/// [`ExpandState`] travels with the caller. The window is a UX debounce
/// separating "keep expanding" from "start over", not a concurrency
/// control.
#[derive(Debug, Clone)]
pub struct SelectionExpander {
    window: Duration,
}

impl Default for SelectionExpander {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl SelectionExpander {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Computes the next selection range and updates `state`.
    ///
    /// `selection` is the host's current selection as an ordered pair
    /// (`start <= end`). Every input has a defined result: a cursor on a
    /// blank line, an empty document, or an out-of-range selection all fall
    /// back to selecting the whole document. The emitted range and `now`
    /// are always recorded into `state` as the final step.
    pub fn next(
        &self,
        doc: &ParsedDoc,
        lines: &dyn LineOffsets,
        selection: Range<usize>,
        now: Instant,
        state: &mut ExpandState,
    ) -> Range<usize> {
        let whole = 0..lines.doc_len();

        let anchor_line = lines.line_of_offset(selection.start);
        let Some(block) = doc.block_at_line(anchor_line) else {
            // Nothing structural under the selection head; the whole
            // document is the terminal fallback, not an error.
            state.level = 0;
            state.record(whole.clone(), now);
            return whole;
        };

        let range = if state.continues(&selection, now, self.window) {
            advance(doc, lines, &selection, block, whole, state)
        } else {
            begin(doc, lines, &selection, block, state)
        };

        state.record(range.clone(), now);
        range
    }
}

/// Continuation: the level advances by one before dispatch.
fn advance(
    doc: &ParsedDoc,
    lines: &dyn LineOffsets,
    selection: &Range<usize>,
    block: BlockId,
    whole: Range<usize>,
    state: &mut ExpandState,
) -> Range<usize> {
    state.level = state.level.saturating_add(1);
    match state.level {
        1 => span_offsets(doc, lines, &doc.siblings(block)).unwrap_or_else(|| selection.clone()),
        2 => {
            if doc.block(block).parent.is_some() {
                span_offsets(doc, lines, &doc.parent_level_blocks(block))
                    .unwrap_or_else(|| selection.clone())
            } else {
                // No enclosing level left: jump straight to the whole
                // document instead of repeating the root-level span.
                state.level = 3;
                whole
            }
        }
        _ => whole,
    }
}

/// Fresh sequence: select the containing block. A selection that already
/// covers the block exactly starts at level 1, priming the next
/// continuation to advance immediately.
fn begin(
    doc: &ParsedDoc,
    lines: &dyn LineOffsets,
    selection: &Range<usize>,
    block: BlockId,
    state: &mut ExpandState,
) -> Range<usize> {
    let block_range = block_offsets(doc, lines, block);
    state.level = if *selection == block_range { 1 } else { 0 };
    block_range
}

fn block_offsets(doc: &ParsedDoc, lines: &dyn LineOffsets, id: BlockId) -> Range<usize> {
    let b = doc.block(id);
    lines.line_start(b.start_line)..lines.line_end(b.end_line)
}

fn span_offsets(
    doc: &ParsedDoc,
    lines: &dyn LineOffsets,
    ids: &[BlockId],
) -> Option<Range<usize>> {
    let (first, last) = doc.line_span(ids)?;
    Some(lines.line_start(first)..lines.line_end(last))
}
