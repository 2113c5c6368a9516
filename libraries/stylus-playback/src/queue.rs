//! Playback queue with a play-mode driven cursor
//!
//! The queue owns an ordered list of tracks and a cursor pointing at the
//! current one. Advancing moves the cursor according to the active
//! [`PlayMode`]:
//!
//! ```text
//! Loop, Next:      [A] B  C   ->   A [B] C   ->   A  B [C]   ->  [A] B  C
//! Loop, Previous:  [A] B  C   ->   A  B [C]
//! Repeat:          cursor never moves
//! Random:          cursor jumps to any index, direction ignored
//! ```

use crate::error::{PlaybackError, Result};
use crate::types::{Direction, PlayMode, TrackDescriptor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ordered tracks plus the current-position cursor
///
/// Invariant: whenever the queue is non-empty, `cursor < tracks.len()`.
/// On an empty queue the cursor is held at 0 and never read.
#[derive(Debug, Clone)]
pub struct PlaybackQueue {
    tracks: Vec<TrackDescriptor>,
    cursor: usize,
    mode: PlayMode,
    rng: StdRng,
}

impl PlaybackQueue {
    /// Create an empty queue in the given mode, seeded from OS entropy
    pub fn new(mode: PlayMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }

    /// Create an empty queue whose Random mode draws from a fixed seed
    pub fn with_seed(mode: PlayMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: PlayMode, rng: StdRng) -> Self {
        Self {
            tracks: Vec::new(),
            cursor: 0,
            mode,
            rng,
        }
    }

    /// Append all tracks, preserving their order
    pub fn add_all(&mut self, items: impl IntoIterator<Item = TrackDescriptor>) {
        let before = self.tracks.len();
        self.tracks.extend(items);
        if self.tracks.len() > before {
            tracing::debug!(
                added = self.tracks.len() - before,
                len = self.tracks.len(),
                "Tracks appended to queue"
            );
        }
    }

    /// Append one track
    pub fn add(&mut self, item: TrackDescriptor) {
        self.tracks.push(item);
    }

    /// Remove the track at `index`
    ///
    /// Cursor policy:
    /// - removed before the cursor: cursor shifts left, same track stays current
    /// - removed at the cursor: cursor clamps to `min(cursor, len - 1)`, so the
    ///   track that slid into the slot becomes current (or the new last track)
    /// - removed after the cursor: unchanged
    pub fn remove_at(&mut self, index: usize) -> Result<TrackDescriptor> {
        let len = self.tracks.len();
        if index >= len {
            return Err(PlaybackError::IndexOutOfRange { index, len });
        }

        let removed = self.tracks.remove(index);

        if index < self.cursor {
            self.cursor -= 1;
        } else if index == self.cursor {
            self.cursor = self.cursor.min(self.tracks.len().saturating_sub(1));
        }

        tracing::debug!(index, cursor = self.cursor, len = self.tracks.len(), "Removed track");
        Ok(removed)
    }

    /// Remove every track and reset the cursor
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = 0;
    }

    /// Track at the cursor
    pub fn current(&self) -> Result<&TrackDescriptor> {
        self.tracks.get(self.cursor).ok_or(PlaybackError::EmptyQueue)
    }

    /// Active play mode
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Switch play mode; applies from the next advance
    pub fn set_mode(&mut self, mode: PlayMode) {
        self.mode = mode;
    }

    /// Move the cursor per the active mode and return the resulting track
    pub fn advance(&mut self, direction: Direction) -> Result<&TrackDescriptor> {
        let len = self.tracks.len();
        if len == 0 {
            return Err(PlaybackError::EmptyQueue);
        }

        self.cursor = match (self.mode, direction) {
            (PlayMode::Repeat, _) => self.cursor,
            (PlayMode::Loop, Direction::Next) => (self.cursor + 1) % len,
            (PlayMode::Loop, Direction::Previous) => {
                if self.cursor == 0 {
                    len - 1
                } else {
                    self.cursor - 1
                }
            }
            (PlayMode::Random, _) => self.rng.gen_range(0..len),
        };

        tracing::debug!(mode = %self.mode, ?direction, cursor = self.cursor, "Advanced queue");
        Ok(&self.tracks[self.cursor])
    }

    /// Point the cursor at `index` and return that track
    pub fn select(&mut self, index: usize) -> Result<&TrackDescriptor> {
        let len = self.tracks.len();
        if index >= len {
            return Err(PlaybackError::IndexOutOfRange { index, len });
        }
        self.cursor = index;
        Ok(&self.tracks[index])
    }

    /// Cursor position, `None` when the queue is empty
    pub fn cursor(&self) -> Option<usize> {
        if self.tracks.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// All tracks in queue order
    pub fn tracks(&self) -> &[TrackDescriptor] {
        &self.tracks
    }

    /// Track at index
    pub fn get(&self, index: usize) -> Option<&TrackDescriptor> {
        self.tracks.get(index)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl Default for PlaybackQueue {
    fn default() -> Self {
        Self::new(PlayMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_track(id: &str) -> TrackDescriptor {
        TrackDescriptor::new(
            id,
            format!("/music/{}.mp3", id),
            format!("Track {}", id),
            "Test Artist",
        )
    }

    fn queue_of(mode: PlayMode, ids: &[&str]) -> PlaybackQueue {
        let mut queue = PlaybackQueue::with_seed(mode, 7);
        queue.add_all(ids.iter().map(|id| create_test_track(id)));
        queue
    }

    fn current_id(queue: &PlaybackQueue) -> String {
        queue.current().unwrap().id.clone()
    }

    #[test]
    fn create_empty_queue() {
        let queue = PlaybackQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.cursor(), None);
        assert_eq!(queue.mode(), PlayMode::Repeat);
    }

    #[test]
    fn add_all_preserves_order_and_allows_duplicates() {
        let queue = queue_of(PlayMode::Loop, &["a", "b", "a"]);
        let ids: Vec<&str> = queue.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a"]);
    }

    #[test]
    fn add_all_with_empty_input_is_noop() {
        let mut queue = queue_of(PlayMode::Loop, &["a"]);
        queue.add_all(Vec::new());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.cursor(), Some(0));
    }

    #[test]
    fn current_on_empty_queue_fails() {
        let queue = PlaybackQueue::default();
        assert_eq!(queue.current(), Err(PlaybackError::EmptyQueue));
    }

    #[test]
    fn advance_on_empty_queue_fails_in_every_mode() {
        for mode in [PlayMode::Repeat, PlayMode::Loop, PlayMode::Random] {
            let mut queue = PlaybackQueue::new(mode);
            assert_eq!(queue.advance(Direction::Next), Err(PlaybackError::EmptyQueue));
            assert_eq!(
                queue.advance(Direction::Previous),
                Err(PlaybackError::EmptyQueue)
            );
        }
    }

    #[test]
    fn repeat_mode_never_moves_cursor() {
        let mut queue = queue_of(PlayMode::Repeat, &["a", "b", "c"]);
        queue.select(1).unwrap();

        assert_eq!(queue.advance(Direction::Next).unwrap().id, "b");
        assert_eq!(queue.advance(Direction::Previous).unwrap().id, "b");
        assert_eq!(queue.cursor(), Some(1));
    }

    #[test]
    fn loop_mode_wraps_forward_and_backward() {
        let mut queue = queue_of(PlayMode::Loop, &["a", "b", "c"]);

        assert_eq!(queue.advance(Direction::Next).unwrap().id, "b");
        assert_eq!(queue.advance(Direction::Next).unwrap().id, "c");
        assert_eq!(queue.advance(Direction::Next).unwrap().id, "a");
        assert_eq!(queue.cursor(), Some(0));
        assert_eq!(queue.advance(Direction::Previous).unwrap().id, "c");
        assert_eq!(queue.cursor(), Some(2));
    }

    #[test]
    fn random_mode_single_track_always_returns_it() {
        let mut queue = queue_of(PlayMode::Random, &["only"]);
        for _ in 0..50 {
            assert_eq!(queue.advance(Direction::Next).unwrap().id, "only");
            assert_eq!(queue.advance(Direction::Previous).unwrap().id, "only");
        }
    }

    #[test]
    fn random_mode_with_same_seed_is_reproducible() {
        let mut first = queue_of(PlayMode::Random, &["a", "b", "c", "d", "e"]);
        let mut second = queue_of(PlayMode::Random, &["a", "b", "c", "d", "e"]);

        for _ in 0..20 {
            let a = first.advance(Direction::Next).unwrap().id.clone();
            let b = second.advance(Direction::Next).unwrap().id.clone();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn mode_switch_applies_on_next_advance() {
        let mut queue = queue_of(PlayMode::Loop, &["a", "b", "c"]);
        queue.advance(Direction::Next).unwrap();

        queue.set_mode(PlayMode::Repeat);
        assert_eq!(current_id(&queue), "b");
        assert_eq!(queue.advance(Direction::Next).unwrap().id, "b");
    }

    #[test]
    fn remove_before_cursor_keeps_same_track_current() {
        let mut queue = queue_of(PlayMode::Loop, &["a", "b", "c"]);
        queue.select(2).unwrap();

        let removed = queue.remove_at(0).unwrap();
        assert_eq!(removed.id, "a");
        assert_eq!(queue.cursor(), Some(1));
        assert_eq!(current_id(&queue), "c");
    }

    #[test]
    fn remove_at_cursor_selects_following_track() {
        let mut queue = queue_of(PlayMode::Loop, &["a", "b", "c"]);
        queue.select(1).unwrap();

        queue.remove_at(1).unwrap();
        assert_eq!(queue.cursor(), Some(1));
        assert_eq!(current_id(&queue), "c");
    }

    #[test]
    fn remove_last_track_at_cursor_clamps() {
        let mut queue = queue_of(PlayMode::Loop, &["a", "b", "c"]);
        queue.select(2).unwrap();

        queue.remove_at(2).unwrap();
        assert_eq!(queue.cursor(), Some(1));
        assert_eq!(current_id(&queue), "b");
    }

    #[test]
    fn remove_after_cursor_leaves_cursor() {
        let mut queue = queue_of(PlayMode::Loop, &["a", "b", "c"]);

        queue.remove_at(2).unwrap();
        assert_eq!(queue.cursor(), Some(0));
        assert_eq!(current_id(&queue), "a");
    }

    #[test]
    fn remove_only_track_empties_queue() {
        let mut queue = queue_of(PlayMode::Loop, &["a"]);

        queue.remove_at(0).unwrap();
        assert!(queue.is_empty());
        assert_eq!(queue.cursor(), None);
        assert_eq!(queue.current(), Err(PlaybackError::EmptyQueue));
    }

    #[test]
    fn remove_out_of_range_fails() {
        let mut queue = queue_of(PlayMode::Loop, &["a", "b"]);

        assert_eq!(
            queue.remove_at(2),
            Err(PlaybackError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn select_out_of_range_fails() {
        let mut queue = queue_of(PlayMode::Loop, &["a"]);
        assert_eq!(
            queue.select(3),
            Err(PlaybackError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(queue.cursor(), Some(0));
    }

    #[test]
    fn clear_resets_cursor() {
        let mut queue = queue_of(PlayMode::Loop, &["a", "b", "c"]);
        queue.select(2).unwrap();

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.cursor(), None);

        queue.add(create_test_track("d"));
        assert_eq!(queue.cursor(), Some(0));
        assert_eq!(current_id(&queue), "d");
    }
}
