//! Playlist models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ExternalUrls, Image, Page};
use super::player::Item;
use crate::decode::{drop_local_entries, drop_null_entries, null_as_default, ApiResponse};

/// Owner of a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistOwner {
    pub display_name: String,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
}

/// Playlist as returned by listing endpoints, without its track list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BasePlaylist {
    pub collaborative: bool,
    pub description: Option<String>,
    pub external_urls: ExternalUrls,
    pub id: String,
    /// Spotify sends `null` instead of an empty list here.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PlaylistOwner,
    pub public: Option<bool>,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
}

/// Full playlist object, including its item list.
///
/// Entries flagged `is_local` are dropped before decoding; they have no
/// catalog identity and cannot be represented as [`Item`]s.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Playlist {
    #[serde(flatten)]
    pub playlist: BasePlaylist,
    pub tracks: PlaylistTracks,
}

impl ApiResponse for Playlist {
    fn prepare(value: &mut Value) {
        if let Some(tracks) = value.get_mut("tracks") {
            drop_local_entries(tracks, "items");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaylistTracks {
    pub items: Vec<PlaylistTrack>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaylistTrack {
    pub track: Item,
}

/// One page of playlists. Spotify occasionally puts `null` entries in the
/// item list; they are dropped before decoding.
impl ApiResponse for Page<BasePlaylist> {
    fn prepare(value: &mut Value) {
        drop_null_entries(value, "items");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeaturedPlaylistsResponse {
    pub message: String,
    pub playlists: Page<BasePlaylist>,
}

impl ApiResponse for FeaturedPlaylistsResponse {
    fn prepare(value: &mut Value) {
        if let Some(playlists) = value.get_mut("playlists") {
            drop_null_entries(playlists, "items");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryPlaylistsResponse {
    pub playlists: Page<BasePlaylist>,
}

impl ApiResponse for CategoryPlaylistsResponse {
    fn prepare(value: &mut Value) {
        if let Some(playlists) = value.get_mut("playlists") {
            drop_null_entries(playlists, "items");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use serde_json::json;

    fn base_playlist_json(id: &str, images: Value) -> Value {
        json!({
            "collaborative": false,
            "description": "Chill out",
            "external_urls": {},
            "id": id,
            "images": images,
            "name": "Evenings",
            "owner": {
                "display_name": "user",
                "external_urls": {},
                "href": "https://api.spotify.com/v1/users/user",
                "id": "user",
                "type": "user",
                "uri": "spotify:user:user"
            },
            "public": null,
            "type": "playlist",
            "uri": format!("spotify:playlist:{id}")
        })
    }

    fn playlist_track_json(id: &str, is_local: bool) -> Value {
        json!({
            "is_local": is_local,
            "track": {
                "type": "track",
                "id": id,
                "artists": [],
                "disc_number": 1,
                "duration_ms": 1000,
                "explicit": false,
                "external_urls": {},
                "href": format!("https://api.spotify.com/v1/tracks/{id}"),
                "name": id,
                "is_local": is_local,
                "track_number": 1,
                "uri": format!("spotify:track:{id}"),
                "album": {
                    "id": "a",
                    "album_type": "album",
                    "total_tracks": 1,
                    "images": [],
                    "name": "A",
                    "release_date": "2020-01-01",
                    "release_date_precision": "day",
                    "uri": "spotify:album:a",
                    "artists": []
                }
            }
        })
    }

    #[test]
    fn local_entries_are_filtered_preserving_order() {
        let mut playlist = base_playlist_json("p1", json!([]));
        playlist["tracks"] = json!({"items": [
            playlist_track_json("first", false),
            playlist_track_json("skipme", true),
            playlist_track_json("second", false),
        ]});

        let playlist: Playlist = decode(&playlist.to_string()).unwrap();
        let names: Vec<&str> = playlist
            .tracks
            .items
            .iter()
            .map(|item| item.track.name())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn null_images_decode_to_empty_list() {
        let raw = base_playlist_json("p2", json!(null)).to_string();
        let playlist: BasePlaylist = serde_json::from_str(&raw).unwrap();
        assert!(playlist.images.is_empty());
    }

    #[test]
    fn playlist_page_drops_null_entries() {
        let raw = json!({
            "href": "https://api.spotify.com/v1/me/playlists",
            "items": [base_playlist_json("p1", json!([])), null, base_playlist_json("p2", json!([]))],
            "limit": 48,
            "next": null,
            "offset": 0,
            "previous": null,
            "total": 2
        })
        .to_string();

        let page: Page<BasePlaylist> = decode(&raw).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
    }
}
