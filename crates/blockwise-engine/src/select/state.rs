use std::ops::Range;
use std::time::{Duration, Instant};

/// Remembered interaction state for one editor context.
///
/// The host owns one value per context and passes it into every
/// [`SelectionExpander::next`](super::SelectionExpander::next) call. There
/// is no explicit reset: the state starts over implicitly whenever
/// [`continues`](ExpandState::continues) fails.
#[derive(Debug, Clone, Default)]
pub struct ExpandState {
    /// Range installed by the previous invocation, if any.
    pub last_range: Option<Range<usize>>,
    /// When that range was installed.
    pub last_at: Option<Instant>,
    /// Current expansion level: 0 = block, 1 = siblings, 2 = parent
    /// siblings, 3 and up = whole document.
    pub level: u8,
}

impl ExpandState {
    /// True when an invocation with `selection` at `now` continues the
    /// prior expansion sequence: a range was emitted before, it is still
    /// installed untouched, and the gap is inside the continuation window.
    pub fn continues(&self, selection: &Range<usize>, now: Instant, window: Duration) -> bool {
        match (&self.last_range, self.last_at) {
            (Some(last), Some(at)) => now.duration_since(at) < window && last == selection,
            _ => false,
        }
    }

    pub(crate) fn record(&mut self, range: Range<usize>, now: Instant) {
        self.last_range = Some(range);
        self.last_at = Some(now);
    }
}
