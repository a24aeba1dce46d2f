//! End-to-end expansion sequences through the public host surface:
//! parse the buffer, compute the next range, install it, repeat.

use std::time::{Duration, Instant};

use blockwise_engine::{Document, ExpandState, LineOffsets, SelectionExpander};
use pretty_assertions::assert_eq;
use rstest::rstest;

const STEP: Duration = Duration::from_millis(200);

fn run_sequence(text: &str, cursor: usize, presses: usize) -> Vec<std::ops::Range<usize>> {
    let mut doc = Document::from_text(text);
    doc.set_cursor(cursor);
    let expander = SelectionExpander::default();
    let mut state = ExpandState::default();
    let t0 = Instant::now();

    (0..presses)
        .map(|i| doc.expand_selection(&expander, &mut state, t0 + i as u32 * STEP))
        .collect()
}

#[test]
fn paragraph_then_roots_then_document() {
    // Worked example: cursor on "Foo bar" expands paragraph -> all root
    // blocks -> whole document.
    let text = "# Title\n\nFoo bar\nbaz\n\n- item 1\n- item 2\n";
    let ranges = run_sequence(text, 12, 4);
    assert_eq!(ranges, vec![9..20, 0..39, 0..40, 0..40]);
}

#[rstest]
#[case::start_of_paragraph(9)]
#[case::middle_of_paragraph(12)]
#[case::second_paragraph_line(18)]
fn any_cursor_in_the_block_yields_the_same_sequence(#[case] cursor: usize) {
    let text = "# Title\n\nFoo bar\nbaz\n\n- item 1\n- item 2\n";
    let ranges = run_sequence(text, cursor, 3);
    assert_eq!(ranges, vec![9..20, 0..39, 0..40]);
}

#[test]
fn list_block_covers_all_items() {
    let text = "# Title\n\nFoo bar\nbaz\n\n- item 1\n- item 2\n";
    let doc = Document::from_text(text);
    let ranges = run_sequence(text, doc.line_start(5), 1);
    // Both list items are one block.
    assert_eq!(ranges, vec![doc.line_start(5)..doc.line_end(6)]);
}

#[test]
fn expansion_never_shrinks_until_saturation() {
    let text = "# One\n\ntext under one\n\n- a\n- b\n\n# Two\n\nmore text\n";
    let mut doc = Document::from_text(text);
    doc.set_cursor(doc.line_start(4));
    let expander = SelectionExpander::default();
    let mut state = ExpandState::default();
    let t0 = Instant::now();

    let mut prev = doc.expand_selection(&expander, &mut state, t0);
    for i in 1..6u32 {
        let next = doc.expand_selection(&expander, &mut state, t0 + i * STEP);
        assert!(
            next.start <= prev.start && next.end >= prev.end,
            "step {i}: {next:?} does not include {prev:?}"
        );
        prev = next;
    }
    assert_eq!(prev, 0..doc.len());
}

#[test]
fn unterminated_fence_is_one_code_block_to_eof() {
    let text = "intro\n\n```\nlet x = 1;\nlet y = 2;\n";
    let mut doc = Document::from_text(text);
    let parsed = doc.parse();
    assert_eq!(parsed.blocks.len(), 2);
    let fence = parsed.block_at_line(3).unwrap();
    assert_eq!(parsed.block(fence).start_line, 2);
    assert_eq!(parsed.block(fence).end_line, 4);

    // Selecting inside the fence selects the whole region.
    doc.set_cursor(doc.line_start(3));
    let mut state = ExpandState::default();
    let range = doc.expand_selection(&SelectionExpander::default(), &mut state, Instant::now());
    assert_eq!(range, doc.line_start(2)..doc.line_end(4));
}

#[test]
fn debounce_gap_starts_a_fresh_sequence() {
    let text = "Foo bar\nbaz\n\n- item\n";
    let mut doc = Document::from_text(text);
    doc.set_cursor(0);
    let expander = SelectionExpander::default();
    let mut state = ExpandState::default();
    let t0 = Instant::now();

    let first = doc.expand_selection(&expander, &mut state, t0);
    assert_eq!(first, 0..11);
    // Past the window the same selection is treated as a fresh sequence;
    // it already covers the block, so the level is primed rather than
    // the range grown.
    let second = doc.expand_selection(&expander, &mut state, t0 + Duration::from_secs(2));
    assert_eq!(second, 0..11);
    assert_eq!(state.level, 1);
}

#[test]
fn custom_window_controls_the_debounce() {
    let text = "Foo\n\nBar\n";
    let mut doc = Document::from_text(text);
    doc.set_cursor(0);
    let expander = SelectionExpander::new(Duration::from_millis(100));
    let mut state = ExpandState::default();
    let t0 = Instant::now();

    doc.expand_selection(&expander, &mut state, t0);
    // 200ms is outside the shortened window: no continuation.
    doc.expand_selection(&expander, &mut state, t0 + Duration::from_millis(200));
    assert_eq!(state.level, 1);

    let mut state = ExpandState::default();
    doc.set_cursor(0);
    doc.expand_selection(&expander, &mut state, t0);
    let grown = doc.expand_selection(&expander, &mut state, t0 + Duration::from_millis(50));
    // Inside the window the sequence continues to the sibling span.
    assert_eq!(grown, 0..doc.line_end(2));
}

#[test]
fn cursor_on_trailing_blank_line_selects_everything() {
    let text = "# Title\n\nFoo\n\n";
    let mut doc = Document::from_text(text);
    doc.set_cursor(doc.len());
    let mut state = ExpandState::default();
    let range = doc.expand_selection(&SelectionExpander::default(), &mut state, Instant::now());
    assert_eq!(range, 0..doc.len());
    assert_eq!(state.level, 0);
}
