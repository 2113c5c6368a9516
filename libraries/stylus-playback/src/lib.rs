//! Stylus Player - Playback Queue Engine
//!
//! Platform-agnostic playback queue and controller for audio widgets.
//!
//! This crate provides:
//! - Ordered playback queue with a current-track cursor
//! - Play modes (Repeat, Loop, Random) deciding what plays next
//! - A controller that loads tracks into a host-provided player
//! - Status listeners with ordered, failure-isolated fan-out
//!
//! # Architecture
//!
//! `stylus-playback` decodes nothing and renders nothing:
//! - Audio output is a [`Player`] the host implements
//! - Status flows back through a [`StatusReporter`] channel
//! - Listeners are notified when the owner calls `dispatch_events`
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use stylus_playback::{
//!     PlaybackConfig, PlaybackController, PlaybackStatus, PlayMode, Player, PlayerError,
//!     StatusChange, TrackDescriptor,
//! };
//!
//! struct SilentPlayer {
//!     status: PlaybackStatus,
//! }
//!
//! impl Player for SilentPlayer {
//!     fn load(&mut self, _track: &TrackDescriptor) -> Result<(), PlayerError> {
//!         self.status = PlaybackStatus::Started;
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> Result<(), PlayerError> {
//!         self.status = PlaybackStatus::Paused;
//!         Ok(())
//!     }
//!
//!     fn resume(&mut self) -> Result<(), PlayerError> {
//!         self.status = PlaybackStatus::Started;
//!         Ok(())
//!     }
//!
//!     fn status(&self) -> PlaybackStatus {
//!         self.status
//!     }
//! }
//!
//! let player = SilentPlayer { status: PlaybackStatus::Idle };
//! let mut controller = PlaybackController::new(player, PlaybackConfig::default());
//!
//! controller.add_all_to_queue(vec![
//!     TrackDescriptor::new("1", "/music/one.mp3", "One", "Artist"),
//!     TrackDescriptor::new("2", "/music/two.mp3", "Two", "Artist"),
//! ]);
//! controller.set_play_mode(PlayMode::Loop);
//!
//! controller.add_status_listener(|change: &StatusChange| {
//!     println!("status: {:?}", change.status);
//! });
//!
//! controller.play().unwrap();
//! assert_eq!(controller.next().unwrap().id, "2");
//! assert!(controller.is_playing());
//!
//! // Statuses pushed by the player are delivered here
//! controller.reporter().report_status(PlaybackStatus::Stopped);
//! assert_eq!(controller.dispatch_events(), 1);
//! ```

mod controller;
mod error;
mod listener;
mod player;
mod queue;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use listener::{ListenerId, StatusListener};
pub use player::{Player, PlayerError, StatusReporter};
pub use queue::PlaybackQueue;
pub use types::{
    Direction, PlayMode, PlaybackConfig, PlaybackStatus, StatusChange, TrackDescriptor,
};
