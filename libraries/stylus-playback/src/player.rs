//! External player capability
//!
//! The controller never decodes or outputs audio itself. The host provides a
//! [`Player`] that does, and pushes its status transitions back through a
//! [`StatusReporter`] obtained from the controller.

use crate::types::{PlaybackStatus, StatusChange, TrackDescriptor};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use thiserror::Error;

/// Opaque failure reported by the external player
///
/// Never returned from controller operations; the controller relays it to
/// listeners as a `PlaybackStatus::Error` transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Player error: {message}")]
pub struct PlayerError {
    pub message: String,
}

impl PlayerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Host-provided playback backend
///
/// Implementors prepare and output audio (platform media player, decoder
/// thread, remote renderer, ...). Loading is asynchronous: `load` only starts
/// preparation and completion is reported through the status channel.
pub trait Player {
    /// Begin preparing and playing `track`, superseding any in-flight load
    fn load(&mut self, track: &TrackDescriptor) -> Result<(), PlayerError>;

    /// Pause the loaded track
    fn pause(&mut self) -> Result<(), PlayerError>;

    /// Resume the loaded track
    fn resume(&mut self) -> Result<(), PlayerError>;

    /// Current status snapshot
    fn status(&self) -> PlaybackStatus;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn load(&mut self, track: &TrackDescriptor) -> Result<(), PlayerError> {
        (**self).load(track)
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        (**self).pause()
    }

    fn resume(&mut self) -> Result<(), PlayerError> {
        (**self).resume()
    }

    fn status(&self) -> PlaybackStatus {
        (**self).status()
    }
}

/// Push side of the status channel
///
/// Cheap to clone and `Send`, so a player can report from its own thread.
/// Reports are buffered, without a size limit, until the controller owner
/// dispatches them.
#[derive(Debug, Clone)]
pub struct StatusReporter {
    sender: Sender<StatusChange>,
}

impl StatusReporter {
    /// Queue a transition for delivery to listeners
    ///
    /// Returns false if the controller has been dropped.
    pub fn report(&self, change: StatusChange) -> bool {
        match self.sender.try_send(change) {
            Ok(()) => true,
            Err(TrySendError::Disconnected(change)) => {
                tracing::debug!(status = ?change.status, "Status reported after controller dropped");
                false
            }
            // Unbounded channel: only reachable if the channel kind changes
            Err(TrySendError::Full(_)) => false,
        }
    }

    /// Report a bare status
    pub fn report_status(&self, status: PlaybackStatus) -> bool {
        self.report(StatusChange::new(status))
    }
}

/// Create a connected reporter / receiver pair
pub(crate) fn status_channel() -> (StatusReporter, Receiver<StatusChange>) {
    let (sender, receiver) = crossbeam_channel::unbounded();
    (StatusReporter { sender }, receiver)
}
