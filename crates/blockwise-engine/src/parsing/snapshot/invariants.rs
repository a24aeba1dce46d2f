use crate::parsing::ParsedDoc;
use crate::parsing::blocks::BlockId;

/// Validates parser output invariants.
///
/// Asserts that:
/// - blocks appear in strictly increasing line order and never overlap
/// - every parent has a strictly smaller indent than its child
/// - children are recorded on their parent and appear after it in document
///   order
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_invariants(doc: &ParsedDoc) {
    for pair in doc.blocks.windows(2) {
        assert!(
            pair[1].start_line > pair[0].end_line,
            "blocks overlap or are out of order: {:?}..{:?} then {:?}..{:?}",
            pair[0].start_line,
            pair[0].end_line,
            pair[1].start_line,
            pair[1].end_line
        );
    }

    for (i, b) in doc.blocks.iter().enumerate() {
        assert!(
            b.start_line <= b.end_line,
            "inverted line range: {:?}..{:?}",
            b.start_line,
            b.end_line
        );

        if let Some(parent) = b.parent {
            let p = doc.block(parent);
            assert!(
                p.indent < b.indent,
                "parent indent {} not strictly smaller than child indent {}",
                p.indent,
                b.indent
            );
            assert!(
                p.children.contains(&BlockId(i)),
                "block {i} missing from its parent's children"
            );
            assert!(
                parent.index() < i,
                "parent {} does not precede child {i} in parse order",
                parent.index()
            );
        }

        let mut prev_end = b.end_line;
        for &child in &b.children {
            let c = doc.block(child);
            assert!(
                c.start_line > prev_end,
                "child at {:?} does not follow its predecessor ending at {prev_end}",
                c.start_line
            );
            prev_end = c.end_line;
        }
    }
}
