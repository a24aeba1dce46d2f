//! # Progressive Selection
//!
//! Maps repeated invocations of one "select" action onto an expanding
//! sequence of character ranges: current block, then sibling blocks, then
//! parent-level blocks, then the whole document.
//!
//! The host supplies the parsed document, the current selection as an
//! ordered offset pair, the current time, and a [`LineOffsets`] service for
//! converting the parser's line ranges into the offset space of its
//! selection API. [`ExpandState`] is owned by the caller and passed in
//! mutably, so each editor context carries its own sequence and no global
//! state exists.

pub mod expand;
pub mod state;

pub use expand::{DEFAULT_WINDOW, SelectionExpander};
pub use state::ExpandState;

/// Line⇄offset conversion service supplied by the host.
///
/// The expander works in the parser's line space and emits ranges in the
/// host's character-offset space; this trait is the bridge. A malformed
/// implementation (offsets disagreeing with the text the parser saw) is a
/// host contract violation and is not validated here.
pub trait LineOffsets {
    /// Offset of the first character of `line`.
    fn line_start(&self, line: usize) -> usize;
    /// Offset just past the last character of `line`, newline excluded.
    fn line_end(&self, line: usize) -> usize;
    /// 0-indexed line containing `offset`.
    fn line_of_offset(&self, offset: usize) -> usize;
    /// Total document length.
    fn doc_len(&self) -> usize;
}
