//! Core types for the playback queue and controller

use serde::{Deserialize, Serialize};

/// A playable item in the queue
///
/// Carries the identifier handed back in status notifications, the media
/// location the player loads, and the metadata a widget needs for display.
/// Tracks are immutable once enqueued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Opaque track identifier
    pub id: String,

    /// Media location passed to the player (path or URL)
    pub uri: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name (optional)
    #[serde(default)]
    pub album: Option<String>,

    /// Artwork reference (path or URL, optional)
    #[serde(default)]
    pub artwork: Option<String>,
}

impl TrackDescriptor {
    /// Create a track without album or artwork metadata
    pub fn new(
        id: impl Into<String>,
        uri: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            artwork: None,
        }
    }

    /// Attach an album name
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Attach an artwork reference
    #[must_use]
    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }
}

/// Policy deciding which track an advance selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Replay the current track forever
    #[default]
    Repeat,

    /// Walk the whole queue, wrapping at both ends
    Loop,

    /// Pick a uniformly random track on every advance
    Random,
}

impl PlayMode {
    /// Next mode in toggle order: Repeat -> Loop -> Random -> Repeat
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            PlayMode::Repeat => PlayMode::Loop,
            PlayMode::Loop => PlayMode::Random,
            PlayMode::Random => PlayMode::Repeat,
        }
    }
}

impl std::str::FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "repeat" => Ok(PlayMode::Repeat),
            "loop" => Ok(PlayMode::Loop),
            "random" => Ok(PlayMode::Random),
            other => Err(format!("unknown play mode: {other}")),
        }
    }
}

impl std::fmt::Display for PlayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayMode::Repeat => "repeat",
            PlayMode::Loop => "loop",
            PlayMode::Random => "random",
        };
        f.write_str(name)
    }
}

/// Advance direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Status reported by the external player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Nothing loaded yet
    #[default]
    Idle,

    /// Preparing a track
    Loading,

    /// Producing audio
    Started,

    /// Paused mid-track
    Paused,

    /// Playback stopped
    Stopped,

    /// Player reported a failure
    Error,
}

/// A single status transition relayed to listeners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// The new status
    pub status: PlaybackStatus,

    /// Track the transition refers to, when the player knows it
    pub track_id: Option<String>,

    /// Player-supplied failure message (only for `PlaybackStatus::Error`)
    pub error: Option<String>,
}

impl StatusChange {
    /// Transition with no track context
    pub fn new(status: PlaybackStatus) -> Self {
        Self {
            status,
            track_id: None,
            error: None,
        }
    }

    /// Transition for a specific track
    pub fn for_track(status: PlaybackStatus, track_id: impl Into<String>) -> Self {
        Self {
            status,
            track_id: Some(track_id.into()),
            error: None,
        }
    }

    /// Failure transition carrying the player's message
    pub fn failed(track_id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status: PlaybackStatus::Error,
            track_id,
            error: Some(message.into()),
        }
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial play mode (default: Repeat)
    pub play_mode: PlayMode,

    /// Seed for Random mode; `None` draws from OS entropy
    pub random_seed: Option<u64>,
}
