//! Playback and device models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::ExternalUrls;
use super::episode::Episode;
use super::track::Track;
use crate::decode::{clear_local_item, ApiResponse};

/// Kind of Connect device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DeviceType {
    AudioDongle,
    #[serde(rename = "AVR")]
    AudioVideoReceiver,
    Automobile,
    CastAudio,
    CastVideo,
    Computer,
    GameConsole,
    #[serde(rename = "STB")]
    SetTopBox,
    Smartphone,
    Smartwatch,
    Speaker,
    Tablet,
    #[serde(rename = "TV")]
    Tv,
    Unknown,
}

/// A device playback can run on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Device {
    /// Absent for some restricted devices.
    pub id: Option<String>,
    pub is_active: bool,
    pub is_private_session: bool,
    pub is_restricted: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub volume_percent: u32,
    #[serde(default = "default_true")]
    pub supports_volume: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Devices {
    pub devices: Vec<Device>,
}

impl ApiResponse for Devices {}

/// Repeat mode of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    Off,
    Track,
    Context,
}

impl RepeatMode {
    /// Wire token, as echoed back when setting the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::Track => "track",
            RepeatMode::Context => "context",
        }
    }
}

/// Kind of context playback was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    Album,
    Artist,
    Playlist,
    Collection,
    Show,
}

/// The collection playback was started from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Context {
    pub external_urls: ExternalUrls,
    pub href: String,
    #[serde(rename = "type")]
    pub context_type: ContextType,
    pub uri: String,
}

/// A thing that can be playing: a track or an episode, discriminated by the
/// `type` field. Unknown discriminators fail decoding.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Track(Track),
    Episode(Episode),
}

impl Item {
    pub fn uri(&self) -> &str {
        match self {
            Item::Track(track) => &track.track.uri,
            Item::Episode(episode) => &episode.episode.uri,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Track(track) => &track.track.name,
            Item::Episode(episode) => &episode.episode.name,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            Item::Track(track) => track.track.duration_ms,
            Item::Episode(episode) => episode.episode.duration_ms,
        }
    }

    pub fn explicit(&self) -> bool {
        match self {
            Item::Track(track) => track.track.explicit,
            Item::Episode(episode) => episode.episode.explicit,
        }
    }

    pub fn external_urls(&self) -> &ExternalUrls {
        match self {
            Item::Track(track) => &track.track.external_urls,
            Item::Episode(episode) => &episode.episode.external_urls,
        }
    }
}

/// What is currently playing.
///
/// `item` is absent when nothing is playing and when the playing item is a
/// local file, which has no catalog identity to decode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CurrentPlaying {
    pub context: Option<Context>,
    /// Kept optional so "0 ms in" stays distinguishable from "no progress
    /// info".
    pub progress_ms: Option<u64>,
    pub is_playing: bool,
    pub item: Option<Item>,
    pub currently_playing_type: Option<String>,
}

impl ApiResponse for CurrentPlaying {
    fn prepare(value: &mut Value) {
        clear_local_item(value);
    }
}

/// Full playback state: the current item plus device, shuffle and repeat.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackState {
    pub device: Device,
    #[serde(rename = "shuffle_state")]
    pub shuffle: bool,
    #[serde(rename = "repeat_state")]
    pub repeat_mode: RepeatMode,
    #[serde(flatten)]
    pub playing: CurrentPlaying,
}

impl ApiResponse for PlaybackState {
    fn prepare(value: &mut Value) {
        clear_local_item(value);
    }
}
