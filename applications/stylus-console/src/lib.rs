//! Stylus Console - terminal front-end for the playback queue engine
//!
//! Reads commands line by line and drives a [`PlaybackController`] backed by
//! a [`SimulatedPlayer`]. Status changes are printed as the player reports
//! them.
//!
//! [`PlaybackController`]: stylus_playback::PlaybackController

pub mod config;
pub mod player;
pub mod playlist;
pub mod session;

pub use config::ConsoleConfig;
pub use player::SimulatedPlayer;
pub use playlist::load_playlist;
pub use session::{execute, run, Command, Flow, ParseError};
