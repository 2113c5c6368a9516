/// Playlist file loading
use anyhow::{Context, Result};
use std::path::Path;
use stylus_playback::TrackDescriptor;

/// Read a JSON array of tracks
pub fn load_playlist(path: &Path) -> Result<Vec<TrackDescriptor>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read playlist {}", path.display()))?;

    let tracks: Vec<TrackDescriptor> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse playlist {}", path.display()))?;

    tracing::info!(count = tracks.len(), path = %path.display(), "Playlist loaded");
    Ok(tracks)
}
