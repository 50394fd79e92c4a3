//! Track endpoints.

use reqwest::Method;

use super::{extract_identifier, join_ids, DEFAULT_PAGE_LIMIT};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{AudioFeatures, SavedTrack, SavedTracksResponse, Track, TracksResponse};

const MAX_TRACKS_PER_REQUEST: usize = 50;

impl SpotifyClient {
    /// Get a track. Accepts a bare id or a `spotify:track:...` URI.
    pub async fn get_track(&self, track_id: &str) -> Result<Track> {
        let identifier = extract_identifier(track_id);
        self.get_json(&format!("v1/tracks/{identifier}"), &[]).await
    }

    /// Get up to 50 tracks in one call.
    pub async fn get_tracks(&self, track_ids: &[&str]) -> Result<Vec<Track>> {
        let Some(ids) = join_ids(track_ids, MAX_TRACKS_PER_REQUEST, "tracks")? else {
            return Ok(Vec::new());
        };
        let response: TracksResponse = self.get_json("v1/tracks", &[("ids", ids)]).await?;
        Ok(response.tracks)
    }

    /// Get the tracks in the current user's library.
    pub async fn get_saved_tracks(&self) -> Result<Vec<SavedTrack>> {
        let response: SavedTracksResponse = self
            .get_json("v1/me/tracks", &[("limit", DEFAULT_PAGE_LIMIT.to_string())])
            .await?;
        Ok(response.items)
    }

    /// Save up to 50 tracks to the current user's library.
    pub async fn save_tracks(&self, track_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(track_ids, MAX_TRACKS_PER_REQUEST, "tracks")? else {
            return Ok(());
        };
        self.send(Method::PUT, "v1/me/tracks", &[("ids", ids)], None)
            .await
    }

    /// Remove up to 50 tracks from the current user's library.
    pub async fn remove_saved_tracks(&self, track_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(track_ids, MAX_TRACKS_PER_REQUEST, "tracks")? else {
            return Ok(());
        };
        self.send(Method::DELETE, "v1/me/tracks", &[("ids", ids)], None)
            .await
    }

    /// Check which of up to 50 tracks are in the current user's library.
    pub async fn are_tracks_saved(&self, track_ids: &[&str]) -> Result<Vec<bool>> {
        let Some(ids) = join_ids(track_ids, MAX_TRACKS_PER_REQUEST, "tracks")? else {
            return Ok(Vec::new());
        };
        self.get_json("v1/me/tracks/contains", &[("ids", ids)]).await
    }

    /// Get the audio feature analysis of a track.
    pub async fn get_audio_features(&self, track_id: &str) -> Result<AudioFeatures> {
        let identifier = extract_identifier(track_id);
        self.get_json(&format!("v1/audio-features/{identifier}"), &[])
            .await
    }
}
