//! Active video source selection with cycle-and-fallback semantics.

use shared::media::Consumer;

/// Tracks which of a peer's video consumers is rendered full-size. Owned by
/// exactly one peer controller; index 0 is the primary/fallback source.
#[derive(Debug, Clone, Default)]
pub struct ActiveSourceSelector {
    active_index: usize,
}

impl ActiveSourceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Advances to the next source without bounds-checking; an out-of-range
    /// index is corrected back to 0 by the next [`validate`](Self::validate).
    pub fn cycle(&mut self) {
        self.active_index = self.active_index.saturating_add(1);
    }

    /// Direct selection (tile click). Validated on the next refresh like any
    /// other state.
    pub fn select(&mut self, index: usize) {
        self.active_index = index;
    }

    /// Resets the index to 0 when it no longer points at a live,
    /// non-remotely-paused entry. Remote pause is a server-side condition the
    /// local user cannot override, so the selection silently falls back to
    /// the primary source. Local pause never forces a source switch.
    pub fn validate(&mut self, videos: &[&Consumer]) {
        if self.active_index == 0 {
            return;
        }
        let still_valid = videos
            .get(self.active_index)
            .map(|consumer| !consumer.remotely_paused)
            .unwrap_or(false);
        if !still_valid {
            self.active_index = 0;
        }
    }

    /// The consumer currently selected, or none when the index is out of
    /// range (including the empty-list case).
    pub fn active_consumer<'a>(&self, videos: &[&'a Consumer]) -> Option<&'a Consumer> {
        videos.get(self.active_index).copied()
    }
}
