//! Track models and audio analysis.

use chrono::{DateTime, Utc};
use serde::de::{Error as DeError, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use super::album::SimplifiedAlbum;
use super::artist::SimplifiedArtist;
use super::common::ExternalUrls;
use super::player::Context;
use crate::decode::ApiResponse;

/// Track as embedded in album track lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplifiedTrack {
    pub id: String,
    pub artists: Vec<SimplifiedArtist>,
    pub disc_number: u32,
    pub duration_ms: u64,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub name: String,
    pub is_local: bool,
    pub track_number: u32,
    pub uri: String,
}

/// Full track object, including its album.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Track {
    #[serde(flatten)]
    pub track: SimplifiedTrack,
    pub album: SimplifiedAlbum,
}

impl ApiResponse for Track {}

/// Response to a batch track lookup; also the shape of an artist's top
/// tracks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
}

impl ApiResponse for TracksResponse {}

/// A track in the user's library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedTrack {
    pub added_at: DateTime<Utc>,
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedTracksResponse {
    pub items: Vec<SavedTrack>,
}

impl ApiResponse for SavedTracksResponse {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
}

impl ApiResponse for TopTracksResponse {}

/// An entry in the play history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayedTrack {
    pub played_at: DateTime<Utc>,
    pub track: Track,
    #[serde(default)]
    pub context: Option<Context>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayedTracksResponse {
    pub items: Vec<PlayedTrack>,
}

impl ApiResponse for PlayedTracksResponse {}

/// Key of a track, in pitch class notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Key {
    C,
    CSharpDFlat,
    D,
    DSharpEFlat,
    E,
    F,
    FSharpGFlat,
    G,
    GSharpAFlat,
    A,
    ASharpBFlat,
    B,
}

impl Key {
    fn from_pitch_class(value: i64) -> Option<Self> {
        match value {
            0 => Some(Key::C),
            1 => Some(Key::CSharpDFlat),
            2 => Some(Key::D),
            3 => Some(Key::DSharpEFlat),
            4 => Some(Key::E),
            5 => Some(Key::F),
            6 => Some(Key::FSharpGFlat),
            7 => Some(Key::G),
            8 => Some(Key::GSharpAFlat),
            9 => Some(Key::A),
            10 => Some(Key::ASharpBFlat),
            11 => Some(Key::B),
            _ => None,
        }
    }
}

/// Spotify reports "no key detected" as -1 or null.
fn key_from_wire<'de, D>(deserializer: D) -> Result<Option<Key>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<i64>::deserialize(deserializer)? {
        None | Some(-1) => Ok(None),
        Some(value) => Key::from_pitch_class(value).map(Some).ok_or_else(|| {
            D::Error::invalid_value(Unexpected::Signed(value), &"a pitch class between -1 and 11")
        }),
    }
}

/// Modality of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    Minor,
    Major,
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match i64::deserialize(deserializer)? {
            0 => Ok(Mode::Minor),
            1 => Ok(Mode::Major),
            other => Err(D::Error::invalid_value(
                Unexpected::Signed(other),
                &"0 or 1",
            )),
        }
    }
}

/// Estimated time signature, in beats per bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeSignature {
    OneFour,
    ThreeFour,
    FourFour,
    FiveFour,
    SixFour,
    SevenFour,
}

impl<'de> Deserialize<'de> for TimeSignature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match i64::deserialize(deserializer)? {
            1 => Ok(TimeSignature::OneFour),
            3 => Ok(TimeSignature::ThreeFour),
            4 => Ok(TimeSignature::FourFour),
            5 => Ok(TimeSignature::FiveFour),
            6 => Ok(TimeSignature::SixFour),
            7 => Ok(TimeSignature::SevenFour),
            other => Err(D::Error::invalid_value(
                Unexpected::Signed(other),
                &"one of 1, 3, 4, 5, 6, 7",
            )),
        }
    }
}

/// Audio feature analysis of a track.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AudioFeatures {
    pub danceability: f64,
    pub energy: f64,
    #[serde(deserialize_with = "key_from_wire")]
    pub key: Option<Key>,
    pub loudness: f64,
    pub mode: Mode,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub time_signature: TimeSignature,
}

impl ApiResponse for AudioFeatures {}
