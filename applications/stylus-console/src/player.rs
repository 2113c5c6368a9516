/// Simulated player backend
///
/// Stands in for a platform media player: loads complete instantly and every
/// transition is pushed through the controller's reporter.
use stylus_playback::{
    PlaybackStatus, Player, PlayerError, StatusChange, StatusReporter, TrackDescriptor,
};

pub struct SimulatedPlayer {
    reporter: StatusReporter,
    status: PlaybackStatus,
    loaded: Option<String>,
}

impl SimulatedPlayer {
    pub fn new(reporter: StatusReporter) -> Self {
        Self {
            reporter,
            status: PlaybackStatus::Idle,
            loaded: None,
        }
    }

    /// Id of the track last loaded successfully
    pub fn loaded_track(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    fn transition(&mut self, status: PlaybackStatus) {
        self.status = status;
        let change = match &self.loaded {
            Some(id) => StatusChange::for_track(status, id.clone()),
            None => StatusChange::new(status),
        };
        self.reporter.report(change);
    }
}

impl Player for SimulatedPlayer {
    fn load(&mut self, track: &TrackDescriptor) -> Result<(), PlayerError> {
        if track.uri.trim().is_empty() {
            self.status = PlaybackStatus::Error;
            self.loaded = None;
            return Err(PlayerError::new(format!(
                "no media location for track {}",
                track.id
            )));
        }

        tracing::debug!(uri = %track.uri, "Simulating load");
        self.loaded = Some(track.id.clone());
        self.transition(PlaybackStatus::Loading);
        self.transition(PlaybackStatus::Started);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        match self.status {
            PlaybackStatus::Started => {
                self.transition(PlaybackStatus::Paused);
                Ok(())
            }
            PlaybackStatus::Paused => Ok(()),
            _ => Err(PlayerError::new("nothing is playing")),
        }
    }

    fn resume(&mut self) -> Result<(), PlayerError> {
        match self.status {
            PlaybackStatus::Paused => {
                self.transition(PlaybackStatus::Started);
                Ok(())
            }
            PlaybackStatus::Started => Ok(()),
            _ => Err(PlayerError::new("nothing is paused")),
        }
    }

    fn status(&self) -> PlaybackStatus {
        self.status
    }
}
