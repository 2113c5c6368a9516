//! Playback controller - binds the queue to an external player
//!
//! The controller is the public surface: callers never touch the queue
//! directly. Track selection is delegated to [`PlaybackQueue`], audio to the
//! host's [`Player`], and status transitions flow back through the reporter
//! channel to registered listeners.

use crate::{
    error::Result,
    listener::{ListenerId, ListenerRegistry, StatusListener},
    player::{status_channel, Player, PlayerError, StatusReporter},
    queue::PlaybackQueue,
    types::{Direction, PlayMode, PlaybackConfig, PlaybackStatus, StatusChange, TrackDescriptor},
};
use crossbeam_channel::Receiver;

/// Queue-driven playback control over a host player
///
/// One owner drives a controller at a time (`&mut self` everywhere); a host
/// wanting process-wide access owns a single instance and hands out
/// references. Status notifications pushed by the player are buffered until
/// [`dispatch_events`](Self::dispatch_events) is called.
pub struct PlaybackController<P: Player> {
    player: P,
    queue: PlaybackQueue,
    listeners: ListenerRegistry,
    reporter: StatusReporter,
    pending: Receiver<StatusChange>,
}

impl<P: Player> PlaybackController<P> {
    /// Create a controller with an empty queue
    ///
    /// The player can still obtain a reporter later through
    /// [`reporter`](Self::reporter).
    pub fn new(player: P, config: PlaybackConfig) -> Self {
        Self::build(config, |_| player)
    }

    /// Create a controller whose player is constructed around its reporter
    pub fn build(config: PlaybackConfig, make_player: impl FnOnce(StatusReporter) -> P) -> Self {
        let queue = match config.random_seed {
            Some(seed) => PlaybackQueue::with_seed(config.play_mode, seed),
            None => PlaybackQueue::new(config.play_mode),
        };
        let (reporter, pending) = status_channel();
        let player = make_player(reporter.clone());

        Self {
            player,
            queue,
            listeners: ListenerRegistry::new(),
            reporter,
            pending,
        }
    }

    // ===== Playback Control =====

    /// Load the current track into the player
    pub fn play(&mut self) -> Result<TrackDescriptor> {
        let track = self.queue.current()?.clone();
        self.load(&track);
        Ok(track)
    }

    /// Advance per the play mode and load the resulting track
    pub fn next(&mut self) -> Result<TrackDescriptor> {
        self.advance_and_load(Direction::Next)
    }

    /// Step back per the play mode and load the resulting track
    pub fn previous(&mut self) -> Result<TrackDescriptor> {
        self.advance_and_load(Direction::Previous)
    }

    /// Move the cursor to `index` and load that track
    pub fn skip_to_queue_index(&mut self, index: usize) -> Result<TrackDescriptor> {
        let track = self.queue.select(index)?.clone();
        self.load(&track);
        Ok(track)
    }

    /// Pause the player
    pub fn pause(&mut self) {
        if let Err(err) = self.player.pause() {
            self.relay_player_error(None, &err);
        }
    }

    /// Resume the player
    pub fn resume(&mut self) {
        if let Err(err) = self.player.resume() {
            self.relay_player_error(None, &err);
        }
    }

    /// True iff the player reports `Started`
    pub fn is_playing(&self) -> bool {
        self.player.status() == PlaybackStatus::Started
    }

    /// Player status snapshot
    pub fn get_status(&self) -> PlaybackStatus {
        self.player.status()
    }

    fn advance_and_load(&mut self, direction: Direction) -> Result<TrackDescriptor> {
        let track = self.queue.advance(direction)?.clone();
        self.load(&track);
        Ok(track)
    }

    fn load(&mut self, track: &TrackDescriptor) {
        tracing::info!(track_id = %track.id, title = %track.title, "Loading track");
        if let Err(err) = self.player.load(track) {
            self.relay_player_error(Some(track.id.clone()), &err);
        }
    }

    /// Player failures never surface as controller errors; listeners see them
    /// as an `Error` transition, delivered immediately.
    ///
    /// Changes the player reported before failing are dispatched first so the
    /// `Error` stays last in arrival order.
    fn relay_player_error(&mut self, track_id: Option<String>, err: &PlayerError) {
        tracing::warn!(track_id = ?track_id, error = %err, "Player operation failed");
        self.dispatch_events();
        let change = StatusChange::failed(track_id, err.message.clone());
        self.listeners.notify(&change);
    }

    // ===== Queue Management =====

    /// Append one track
    pub fn add_to_queue(&mut self, track: TrackDescriptor) {
        self.queue.add(track);
    }

    /// Append tracks in order
    pub fn add_all_to_queue(&mut self, tracks: impl IntoIterator<Item = TrackDescriptor>) {
        self.queue.add_all(tracks);
    }

    /// Remove track at index
    pub fn remove_from_queue(&mut self, index: usize) -> Result<TrackDescriptor> {
        self.queue.remove_at(index)
    }

    /// Remove every track
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    /// All tracks in queue order
    pub fn get_queue(&self) -> &[TrackDescriptor] {
        self.queue.tracks()
    }

    /// Number of queued tracks
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Track at the cursor, if any
    pub fn get_current_track(&self) -> Option<&TrackDescriptor> {
        self.queue.current().ok()
    }

    /// Cursor position, `None` when the queue is empty
    pub fn get_queue_index(&self) -> Option<usize> {
        self.queue.cursor()
    }

    // ===== Play Mode =====

    pub fn get_play_mode(&self) -> PlayMode {
        self.queue.mode()
    }

    pub fn set_play_mode(&mut self, mode: PlayMode) {
        tracing::debug!(%mode, "Play mode changed");
        self.queue.set_mode(mode);
    }

    /// Switch to the next mode in toggle order and return it
    pub fn cycle_play_mode(&mut self) -> PlayMode {
        let mode = self.queue.mode().cycle();
        self.set_play_mode(mode);
        mode
    }

    // ===== Status Listeners =====

    /// Register a listener; notified in registration order
    pub fn add_status_listener(&mut self, listener: impl StatusListener + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Unregister a listener; returns false if it was not registered
    pub fn remove_status_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Handle for the player to push status transitions through
    ///
    /// The channel is unbounded: reports accumulate until the owner calls
    /// [`dispatch_events`](Self::dispatch_events).
    pub fn reporter(&self) -> StatusReporter {
        self.reporter.clone()
    }

    /// Deliver every pending status change to listeners, in arrival order
    ///
    /// Never blocks. Returns the number of changes dispatched. Hosts must call
    /// this regularly (once per main-loop iteration); nothing else drains the
    /// buffer, so an owner that never dispatches grows it without bound.
    pub fn dispatch_events(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(change) = self.pending.try_recv() {
            tracing::debug!(status = ?change.status, track_id = ?change.track_id, "Dispatching status change");
            self.listeners.notify(&change);
            dispatched += 1;
        }
        dispatched
    }

    /// Check if the player has reported changes not yet dispatched
    pub fn has_pending_events(&self) -> bool {
        !self.pending.is_empty()
    }

    // ===== Player Access =====

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }
}

impl<P: Player> std::fmt::Debug for PlaybackController<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("queue", &self.queue)
            .field("listeners", &self.listeners)
            .field("status", &self.player.status())
            .finish_non_exhaustive()
    }
}
