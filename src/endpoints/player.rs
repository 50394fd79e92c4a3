//! Player endpoints.

use reqwest::Method;
use serde_json::{json, Value};

use super::DEFAULT_PAGE_LIMIT;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{
    CurrentPlaying, Device, Devices, PlaybackState, PlayedTrack, PlayedTracksResponse, RepeatMode,
};

/// What to start or resume playing, and where.
#[derive(Debug, Default, Clone)]
pub struct StartPlaybackOptions {
    /// Target device; the active device when absent.
    pub device_id: Option<String>,
    /// Context (album, artist or playlist URI) to play from.
    pub context_uri: Option<String>,
    /// Explicit track/episode URIs to play instead of a context.
    pub uris: Option<Vec<String>>,
    /// Position within the context to start at.
    pub position_offset: Option<u32>,
    /// URI within the context to start at.
    pub uri_offset: Option<String>,
    /// Position within the item to start at.
    pub position_ms: u64,
}

impl SpotifyClient {
    /// Get the current playback state. `None` when nothing is playing on
    /// any device.
    pub async fn get_playback(&self) -> Result<Option<PlaybackState>> {
        self.get_optional_json(
            "v1/me/player",
            &[("additional_types", "track,episode".to_string())],
        )
        .await
    }

    /// Get the currently playing item. `None` when nothing is playing.
    pub async fn get_current_playing(&self) -> Result<Option<CurrentPlaying>> {
        self.get_optional_json("v1/me/player/currently-playing", &[])
            .await
    }

    /// Get the devices playback can run on.
    pub async fn get_devices(&self) -> Result<Vec<Device>> {
        let response: Devices = self.get_json("v1/me/player/devices", &[]).await?;
        Ok(response.devices)
    }

    /// Transfer playback to another device.
    pub async fn transfer_playback(&self, device_id: &str) -> Result<()> {
        self.send(
            Method::PUT,
            "v1/me/player",
            &[],
            Some(json!({ "device_ids": [device_id] })),
        )
        .await
    }

    /// Start or resume playback.
    pub async fn start_playback(&self, options: StartPlaybackOptions) -> Result<()> {
        let mut payload = json!({ "position_ms": options.position_ms });
        if let Some(context_uri) = options.context_uri {
            payload["context_uri"] = Value::String(context_uri);
        }
        if let Some(uris) = options.uris {
            payload["uris"] = json!(uris);
        }
        if let Some(position) = options.position_offset {
            payload["offset"] = json!({ "position": position });
        }
        if let Some(uri) = options.uri_offset {
            payload["offset"] = json!({ "uri": uri });
        }
        let query = device_query(options.device_id);
        self.send(Method::PUT, "v1/me/player/play", &query, Some(payload))
            .await
    }

    /// Pause playback.
    pub async fn pause_playback(&self, device_id: Option<&str>) -> Result<()> {
        let query = device_query(device_id.map(str::to_string));
        self.send(Method::PUT, "v1/me/player/pause", &query, None)
            .await
    }

    /// Skip to the next item.
    pub async fn next_track(&self, device_id: Option<&str>) -> Result<()> {
        let query = device_query(device_id.map(str::to_string));
        self.send(Method::POST, "v1/me/player/next", &query, None)
            .await
    }

    /// Skip to the previous item.
    pub async fn previous_track(&self, device_id: Option<&str>) -> Result<()> {
        let query = device_query(device_id.map(str::to_string));
        self.send(Method::POST, "v1/me/player/previous", &query, None)
            .await
    }

    /// Seek within the current item.
    pub async fn seek_track(&self, position_ms: u64, device_id: Option<&str>) -> Result<()> {
        let mut query = vec![("position_ms", position_ms.to_string())];
        query.extend(device_query(device_id.map(str::to_string)));
        self.send(Method::PUT, "v1/me/player/seek", &query, None)
            .await
    }

    /// Set the repeat mode.
    pub async fn set_repeat(&self, state: RepeatMode, device_id: Option<&str>) -> Result<()> {
        let mut query = vec![("state", state.as_str().to_string())];
        query.extend(device_query(device_id.map(str::to_string)));
        self.send(Method::PUT, "v1/me/player/repeat", &query, None)
            .await
    }

    /// Set the volume, in percent.
    pub async fn set_volume(&self, volume_percent: u8, device_id: Option<&str>) -> Result<()> {
        let mut query = vec![("volume_percent", volume_percent.to_string())];
        query.extend(device_query(device_id.map(str::to_string)));
        self.send(Method::PUT, "v1/me/player/volume", &query, None)
            .await
    }

    /// Turn shuffle on or off.
    pub async fn set_shuffle(&self, state: bool, device_id: Option<&str>) -> Result<()> {
        let mut query = vec![("state", state.to_string())];
        query.extend(device_query(device_id.map(str::to_string)));
        self.send(Method::PUT, "v1/me/player/shuffle", &query, None)
            .await
    }

    /// Add an item to the playback queue.
    pub async fn add_to_queue(&self, uri: &str, device_id: Option<&str>) -> Result<()> {
        let mut payload = json!({ "uri": uri });
        if let Some(device_id) = device_id {
            payload["device_id"] = Value::String(device_id.to_string());
        }
        self.send(Method::POST, "v1/me/player/queue", &[], Some(payload))
            .await
    }

    /// Get the user's recently played tracks.
    pub async fn get_recently_played_tracks(&self) -> Result<Vec<PlayedTrack>> {
        let response: PlayedTracksResponse = self
            .get_json(
                "v1/me/player/recently-played",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }
}

fn device_query(device_id: Option<String>) -> Vec<(&'static str, String)> {
    device_id
        .into_iter()
        .map(|device_id| ("device_id", device_id))
        .collect()
}
