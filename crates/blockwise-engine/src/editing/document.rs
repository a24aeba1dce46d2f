use std::ops::Range;
use std::time::Instant;

use xi_rope::Rope;

use crate::parsing::{self, ParsedDoc};
use crate::select::{ExpandState, LineOffsets, SelectionExpander};

/// An in-memory document: rope buffer plus the current selection.
///
/// The buffer is the single source of truth for line⇄offset conversion;
/// every parse reads it in full. Line endings are normalized to `\n` on
/// load so the parser's line indices and the buffer's offsets always agree.
pub struct Document {
    buffer: Rope,
    selection: Range<usize>,
}

impl Document {
    /// Creates a document from raw bytes, validating UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    /// Creates a document from text, normalizing CRLF and lone CR to `\n`.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            buffer: Rope::from(normalized.as_str()),
            selection: 0..0,
        }
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Current selection as an ordered offset pair.
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Installs `range` as the current selection, clamped to the document.
    pub fn set_selection(&mut self, range: Range<usize>) {
        let len = self.buffer.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.selection = start..end;
    }

    /// Collapses the selection to a caret at `offset`.
    pub fn set_cursor(&mut self, offset: usize) {
        self.set_selection(offset..offset);
    }

    /// Parses the full buffer into its block structure.
    pub fn parse(&self) -> ParsedDoc {
        parsing::parse_document(&self.buffer)
    }

    /// One full host invocation: re-parse, compute the next range, install
    /// it, and return it so the view can scroll it into visibility.
    pub fn expand_selection(
        &mut self,
        expander: &SelectionExpander,
        state: &mut ExpandState,
        now: Instant,
    ) -> Range<usize> {
        let doc = self.parse();
        let range = expander.next(&doc, &*self, self.selection.clone(), now, state);
        self.set_selection(range.clone());
        range
    }

    /// Line index of the final line (the line containing `len()`).
    fn last_line(&self) -> usize {
        self.buffer.line_of_offset(self.buffer.len())
    }
}

impl LineOffsets for Document {
    fn line_start(&self, line: usize) -> usize {
        if line > self.last_line() {
            self.buffer.len()
        } else {
            self.buffer.offset_of_line(line)
        }
    }

    fn line_end(&self, line: usize) -> usize {
        if line >= self.last_line() {
            self.buffer.len()
        } else {
            // Lines are newline-terminated up to the last one; drop the
            // terminator so the range covers characters only.
            self.buffer.offset_of_line(line + 1) - 1
        }
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        self.buffer.line_of_offset(offset.min(self.buffer.len()))
    }

    fn doc_len(&self) -> usize {
        self.buffer.len()
    }
}
