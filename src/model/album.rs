//! Album models.

use chrono::{DateTime, Utc};
use serde::de::{Error as DeError, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::artist::SimplifiedArtist;
use super::common::{Image, ReleaseDatePrecision};
use super::track::SimplifiedTrack;
use crate::decode::{drop_null_entries, unwrap_items, ApiResponse};

/// Kind of album release.
///
/// Spotify is inconsistent about the casing of this token, so decoding is
/// case-insensitive; the canonical form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Single,
    Ep,
    Compilation,
}

impl<'de> Deserialize<'de> for AlbumType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        match token.to_ascii_lowercase().as_str() {
            "album" => Ok(AlbumType::Album),
            "single" => Ok(AlbumType::Single),
            "ep" => Ok(AlbumType::Ep),
            "compilation" => Ok(AlbumType::Compilation),
            _ => Err(D::Error::invalid_value(
                Unexpected::Str(&token),
                &"one of `album`, `single`, `ep`, `compilation`",
            )),
        }
    }
}

/// Album as embedded in tracks and listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplifiedAlbum {
    pub id: String,
    pub album_type: AlbumType,
    pub total_tracks: u32,
    pub images: Vec<Image>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub uri: String,
    pub artists: Vec<SimplifiedArtist>,
}

/// Full album object, including its track list.
///
/// On the wire the track list arrives wrapped in a pagination envelope
/// (`{"tracks": {"items": [...]}}`); it is flattened before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Album {
    #[serde(flatten)]
    pub album: SimplifiedAlbum,
    pub tracks: Vec<SimplifiedTrack>,
}

impl ApiResponse for Album {
    fn prepare(value: &mut Value) {
        unwrap_items(value, "tracks");
    }
}

/// Flatten the track envelope of an album nested inside another payload.
pub(crate) fn prepare_nested_album(value: &mut Value) {
    unwrap_items(value, "tracks");
}

/// An album in the user's library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedAlbum {
    pub added_at: DateTime<Utc>,
    pub album: Album,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedAlbumsResponse {
    pub items: Vec<SavedAlbum>,
}

impl ApiResponse for SavedAlbumsResponse {
    fn prepare(value: &mut Value) {
        drop_null_entries(value, "items");
        if let Some(Value::Array(items)) = value.get_mut("items") {
            for item in items {
                if let Some(album) = item.get_mut("album") {
                    prepare_nested_album(album);
                }
            }
        }
    }
}

/// Response to a batch album lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlbumsResponse {
    pub albums: Vec<Album>,
}

impl ApiResponse for AlbumsResponse {
    fn prepare(value: &mut Value) {
        if let Some(Value::Array(albums)) = value.get_mut("albums") {
            for album in albums {
                prepare_nested_album(album);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<SimplifiedTrack>,
}

impl ApiResponse for AlbumTracksResponse {}

/// Bare album listing, shared by new releases and artist albums.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplifiedAlbumList {
    pub items: Vec<SimplifiedAlbum>,
}

impl ApiResponse for SimplifiedAlbumList {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewReleasesResponse {
    pub albums: SimplifiedAlbumList,
}

impl ApiResponse for NewReleasesResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use serde_json::json;

    fn album_json(album_type: &str) -> String {
        json!({
            "id": "6akEvsycLGftJxYudPjmqK",
            "album_type": album_type,
            "total_tracks": 1,
            "images": [],
            "name": "Global Warming",
            "release_date": "2012-11-16",
            "release_date_precision": "day",
            "uri": "spotify:album:6akEvsycLGftJxYudPjmqK",
            "artists": [
                {"id": "0TnOYISbd1XYRBk9myaseg", "name": "Pitbull", "uri": "spotify:artist:0TnOYISbd1XYRBk9myaseg"}
            ],
            "tracks": {
                "items": [{
                    "id": "4yOn1TEcfsKHUJCL2h1r8I",
                    "artists": [],
                    "disc_number": 1,
                    "duration_ms": 85400,
                    "explicit": false,
                    "external_urls": {},
                    "href": "https://api.spotify.com/v1/tracks/4yOn1TEcfsKHUJCL2h1r8I",
                    "name": "Global Warming (Intro)",
                    "is_local": false,
                    "track_number": 1,
                    "uri": "spotify:track:4yOn1TEcfsKHUJCL2h1r8I"
                }],
                "limit": 50,
                "offset": 0,
                "total": 1
            }
        })
        .to_string()
    }

    #[test]
    fn album_track_envelope_is_flattened() {
        let album: Album = decode(&album_json("album")).unwrap();
        assert_eq!(album.tracks.len(), 1);
        assert_eq!(album.tracks[0].name, "Global Warming (Intro)");
        assert_eq!(album.album.total_tracks, 1);
    }

    #[test]
    fn album_type_decoding_is_case_insensitive() {
        for token in ["album", "Album", "ALBUM"] {
            let album: Album = decode(&album_json(token)).unwrap();
            assert_eq!(album.album.album_type, AlbumType::Album);
        }
    }

    #[test]
    fn unknown_album_type_fails_decoding() {
        assert!(decode::<Album>(&album_json("mixtape")).is_err());
    }

    #[test]
    fn album_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AlbumType::Compilation).unwrap(),
            "\"compilation\""
        );
    }
}
